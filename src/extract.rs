//! Per-field extractors over the raw sidecar document.
//!
//! Each extractor is a small pure function: it receives the untyped document
//! and returns one normalized output field (or a grouped pair for the
//! provider and format concerns). The shared contract:
//!
//! - never panics, never errors: absent, null, or wrong-typed input for the
//!   targeted key yields the field's absent value
//! - string fields are trimmed; empty-after-trim counts as absent
//! - list fields drop non-string elements, trim survivors, drop entries that
//!   trim to empty, and preserve relative order
//!
//! The sidecar keys come from third-party downloaders and do not match the
//! output field names; the mapping is fixed per extractor below. Keys the
//! extractors do not recognize are ignored, never an error.
use serde_json::Value;

use crate::config::DEFAULT_DISPLAY_NAME;
use crate::types::{FormatInfo, ProviderInfo};
use crate::value;

/// Extracts the display name through the `display_name` → `title` →
/// `stored_name` fallback chain. The first key holding a non-empty trimmed
/// string wins; when all three fail the literal fallback `"Unknown"` is
/// returned, so the result is never empty.
///
/// ```rust
/// use richmeta::extract_display_name;
/// use serde_json::json;
///
/// assert_eq!(extract_display_name(&json!({"display_name": "", "title": "T"})), "T");
/// assert_eq!(extract_display_name(&json!({})), "Unknown");
/// ```
pub fn extract_display_name(doc: &Value) -> String {
    display_name_or(doc, DEFAULT_DISPLAY_NAME)
}

/// Same fallback chain as [`extract_display_name`] with a caller-supplied
/// fallback literal. Used by the orchestrator to honor
/// [`ParserConfig::fallback_display_name`](crate::ParserConfig::fallback_display_name).
pub(crate) fn display_name_or(doc: &Value, fallback: &str) -> String {
    const NAME_KEYS: [&str; 3] = ["display_name", "title", "stored_name"];

    NAME_KEYS
        .iter()
        .find_map(|key| value::string_field(doc, key))
        .unwrap_or_else(|| fallback.to_owned())
}

/// Extracts `tags`: trimmed, lowercased, order-preserving.
pub fn extract_tags(doc: &Value) -> Vec<String> {
    value::string_seq(doc, "tags", true)
}

/// Extracts `categories`: trimmed, lowercased, order-preserving.
pub fn extract_categories(doc: &Value) -> Vec<String> {
    value::string_seq(doc, "categories", true)
}

/// Extracts performers from the provider-specific `pornstars` key (the
/// downloader's own name for this list; intentionally not renamed). A
/// `performers` key in the document is ignored.
pub fn extract_performers(doc: &Value) -> Vec<String> {
    value::string_seq(doc, "pornstars", true)
}

/// Extracts the provider identity group from `provider`, `id`, and
/// `webpage_url`. Each field is independently trimmed-or-absent; there is no
/// cross-field dependency. `webpage_url` must carry an http(s) scheme or it
/// is dropped here, at parse time.
pub fn extract_provider_info(doc: &Value) -> ProviderInfo {
    ProviderInfo {
        provider: value::string_field(doc, "provider"),
        provider_id: value::string_field(doc, "id"),
        webpage_url: value::field(doc, "webpage_url").and_then(value::http_url),
    }
}

/// Extracts the thumbnail URL. Values without an `http://` or `https://`
/// scheme are rejected to absent here rather than deferred to validation.
///
/// ```rust
/// use richmeta::extract_thumbnail;
/// use serde_json::json;
///
/// assert_eq!(extract_thumbnail(&json!({"thumbnail": "ftp://x"})), None);
/// assert_eq!(
///     extract_thumbnail(&json!({"thumbnail": "https://x"})),
///     Some("https://x".to_owned())
/// );
/// ```
pub fn extract_thumbnail(doc: &Value) -> Option<String> {
    value::field(doc, "thumbnail").and_then(value::http_url)
}

/// Extracts the duration in whole seconds from `duration`.
///
/// Accepts a number or a numeric string; fractional values are floored,
/// negative or unparseable values yield `None`.
///
/// ```rust
/// use richmeta::extract_duration;
/// use serde_json::json;
///
/// assert_eq!(extract_duration(&json!({"duration": "1404"})), Some(1404));
/// assert_eq!(extract_duration(&json!({"duration": 12.9})), Some(12));
/// assert_eq!(extract_duration(&json!({"duration": -5})), None);
/// assert_eq!(extract_duration(&json!({"duration": "abc"})), None);
/// ```
pub fn extract_duration(doc: &Value) -> Option<i64> {
    value::field(doc, "duration").and_then(value::integer_seconds)
}

/// Extracts the format group from `downloaded_format` and `formats`.
///
/// Format labels are technical identifiers, so unlike the classification
/// lists their case is preserved.
pub fn extract_formats(doc: &Value) -> FormatInfo {
    FormatInfo {
        downloaded_format: value::string_field(doc, "downloaded_format"),
        available_formats: value::string_seq(doc, "formats", false),
    }
}

/// Extracts the uploader/channel name from `creator`: trimmed-or-absent,
/// case preserved.
pub fn extract_creator(doc: &Value) -> Option<String> {
    value::string_field(doc, "creator")
}

/// Extracts the primary tag from `primary_tag`: trimmed and lowercased
/// (unlike `creator`), ready for lookup against the tag catalog.
pub fn extract_primary_tag(doc: &Value) -> Option<String> {
    value::string_field(doc, "primary_tag").map(|tag| tag.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_name_fallback_chain_order() {
        assert_eq!(
            extract_display_name(&json!({"display_name": "D", "title": "T", "stored_name": "S"})),
            "D"
        );
        assert_eq!(
            extract_display_name(&json!({"display_name": "", "title": "T"})),
            "T"
        );
        assert_eq!(
            extract_display_name(&json!({"title": "  ", "stored_name": "S"})),
            "S"
        );
        assert_eq!(
            extract_display_name(&json!({"display_name": " ", "title": "", "stored_name": "  "})),
            "Unknown"
        );
        assert_eq!(extract_display_name(&json!({})), "Unknown");
    }

    #[test]
    fn display_name_skips_wrong_typed_keys() {
        assert_eq!(
            extract_display_name(&json!({"display_name": 42, "title": "T"})),
            "T"
        );
    }

    #[test]
    fn tags_normalized_lowercase() {
        let doc = json!({"tags": ["Brunette", " Office ", "BLOWJOB"]});
        assert_eq!(extract_tags(&doc), vec!["brunette", "office", "blowjob"]);
    }

    #[test]
    fn performers_read_only_from_pornstars_key() {
        assert!(extract_performers(&json!({"performers": ["X"]})).is_empty());
        assert_eq!(
            extract_performers(&json!({"pornstars": ["Raven"]})),
            vec!["raven"]
        );
    }

    #[test]
    fn provider_fields_are_independent() {
        let info = extract_provider_info(&json!({
            "provider": " exampletube ",
            "id": 1234,
            "webpage_url": "https://example.com/v/1"
        }));
        assert_eq!(info.provider.as_deref(), Some("exampletube"));
        assert_eq!(info.provider_id, None); // numeric id is wrong-typed
        assert_eq!(
            info.webpage_url.as_deref(),
            Some("https://example.com/v/1")
        );
    }

    #[test]
    fn provider_webpage_url_scheme_enforced() {
        let info = extract_provider_info(&json!({"webpage_url": "example.com/v/1"}));
        assert_eq!(info.webpage_url, None);
    }

    #[test]
    fn formats_preserve_case() {
        let info = extract_formats(&json!({
            "downloaded_format": " 1080p ",
            "formats": ["HD", "sd", 3, " 720p "]
        }));
        assert_eq!(info.downloaded_format.as_deref(), Some("1080p"));
        assert_eq!(info.available_formats, vec!["HD", "sd", "720p"]);
    }

    #[test]
    fn primary_tag_lowercased_creator_preserved() {
        let doc = json!({"primary_tag": "Combat_Zone", "creator": "Some Studio"});
        assert_eq!(extract_primary_tag(&doc).as_deref(), Some("combat_zone"));
        assert_eq!(extract_creator(&doc).as_deref(), Some("Some Studio"));
    }

    #[test]
    fn duration_coercion_matrix() {
        assert_eq!(extract_duration(&json!({"duration": 1404})), Some(1404));
        assert_eq!(extract_duration(&json!({"duration": "1404"})), Some(1404));
        assert_eq!(extract_duration(&json!({"duration": 12.9})), Some(12));
        assert_eq!(extract_duration(&json!({"duration": -5})), None);
        assert_eq!(extract_duration(&json!({"duration": "abc"})), None);
        assert_eq!(extract_duration(&json!({"duration": null})), None);
        assert_eq!(extract_duration(&json!({})), None);
    }

    #[test]
    fn extractors_tolerate_non_object_documents() {
        for doc in [Value::Null, json!([]), json!("text"), json!(17)] {
            assert_eq!(extract_display_name(&doc), "Unknown");
            assert!(extract_tags(&doc).is_empty());
            assert_eq!(extract_provider_info(&doc), ProviderInfo::default());
            assert_eq!(extract_formats(&doc), FormatInfo::default());
            assert_eq!(extract_duration(&doc), None);
            assert_eq!(extract_thumbnail(&doc), None);
        }
    }
}
