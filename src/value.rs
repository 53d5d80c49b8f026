//! Defensive accessors over the untyped sidecar document.
//!
//! Sidecar documents are uploader-controlled JSON: any key may be absent,
//! null, wrong-typed, or malformed. Every extractor goes through the helpers
//! here instead of touching [`serde_json::Value`] directly, so the
//! type-checking rules live in one place:
//!
//! - a string field is only read if the value really is a string, then
//!   trimmed; empty-after-trim counts as absent
//! - a sequence field is only read if the value really is an array; non-string
//!   elements are skipped, surviving elements keep their relative order
//! - a mismatch at any level degrades to the absent value, never an error
use serde_json::Value;

/// Looks up `key` in `doc` when `doc` is a JSON object.
///
/// Non-object documents (null, arrays, scalars) have no fields, so every
/// lookup returns `None` and the caller falls through to its absent value.
pub(crate) fn field<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    doc.as_object().and_then(|map| map.get(key))
}

/// Reads `value` as a trimmed, non-empty string slice.
///
/// Returns `None` for non-string values and for strings that are empty after
/// trimming.
pub(crate) fn trimmed_str(value: &Value) -> Option<&str> {
    let trimmed = value.as_str()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Reads the string field `key` from `doc`: trimmed, empty-as-absent.
pub(crate) fn string_field(doc: &Value, key: &str) -> Option<String> {
    field(doc, key).and_then(trimmed_str).map(str::to_owned)
}

/// Reads the array field `key` from `doc` as a sequence of cleaned strings.
///
/// Non-string elements are dropped, each survivor is trimmed (and lowercased
/// when `lowercase` is set), and elements that become empty after trimming
/// are dropped. Relative order of survivors is preserved. A missing key or a
/// non-array value yields an empty vector.
pub(crate) fn string_seq(doc: &Value, key: &str, lowercase: bool) -> Vec<String> {
    let Some(items) = field(doc, key).and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(trimmed_str)
        .map(|entry| {
            if lowercase {
                entry.to_lowercase()
            } else {
                entry.to_owned()
            }
        })
        .collect()
}

/// Coerces `value` into whole seconds.
///
/// Accepts a JSON number or a numeric string. Fractional values are floored,
/// negative and non-finite values coerce to `None`, and strings that fail to
/// parse as a number coerce to `None`.
pub(crate) fn integer_seconds(value: &Value) -> Option<i64> {
    let seconds = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Some(seconds.floor() as i64)
}

/// Reads `value` as a trimmed URL with an `http://` or `https://` scheme.
///
/// Any other scheme, a bare value, or a non-string coerces to `None`. The
/// scheme is enforced here at extraction time; the validator re-checks it for
/// records that arrive from other construction paths.
pub(crate) fn http_url(value: &Value) -> Option<String> {
    let url = trimmed_str(value)?;
    if url.starts_with("http://") || url.starts_with("https://") {
        Some(url.to_owned())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_ignores_non_object_documents() {
        assert!(field(&Value::Null, "title").is_none());
        assert!(field(&json!([1, 2, 3]), "title").is_none());
        assert!(field(&json!("scalar"), "title").is_none());
        assert!(field(&json!({"title": "x"}), "title").is_some());
    }

    #[test]
    fn trimmed_str_rejects_non_strings_and_blank() {
        assert_eq!(trimmed_str(&json!("  padded  ")), Some("padded"));
        assert_eq!(trimmed_str(&json!("   ")), None);
        assert_eq!(trimmed_str(&json!(42)), None);
        assert_eq!(trimmed_str(&Value::Null), None);
    }

    #[test]
    fn string_seq_filters_and_preserves_order() {
        let doc = json!({"items": ["B", 7, "  a  ", null, "", "C"]});
        assert_eq!(string_seq(&doc, "items", true), vec!["b", "a", "c"]);
        assert_eq!(string_seq(&doc, "items", false), vec!["B", "a", "C"]);
    }

    #[test]
    fn string_seq_structural_mismatch_is_empty() {
        assert!(string_seq(&json!({"items": "not-a-list"}), "items", true).is_empty());
        assert!(string_seq(&json!({}), "items", true).is_empty());
        assert!(string_seq(&Value::Null, "items", true).is_empty());
    }

    #[test]
    fn integer_seconds_coercion_rules() {
        assert_eq!(integer_seconds(&json!(1404)), Some(1404));
        assert_eq!(integer_seconds(&json!("1404")), Some(1404));
        assert_eq!(integer_seconds(&json!(12.9)), Some(12));
        assert_eq!(integer_seconds(&json!(-5)), None);
        assert_eq!(integer_seconds(&json!("abc")), None);
        assert_eq!(integer_seconds(&json!(true)), None);
        assert_eq!(integer_seconds(&json!(0)), Some(0));
    }

    #[test]
    fn http_url_enforces_scheme() {
        assert_eq!(
            http_url(&json!(" https://cdn.example/thumb.jpg ")),
            Some("https://cdn.example/thumb.jpg".to_owned())
        );
        assert_eq!(
            http_url(&json!("http://cdn.example/a.jpg")),
            Some("http://cdn.example/a.jpg".to_owned())
        );
        assert_eq!(http_url(&json!("ftp://cdn.example/a.jpg")), None);
        assert_eq!(http_url(&json!("cdn.example/a.jpg")), None);
        assert_eq!(http_url(&json!(9)), None);
    }
}
