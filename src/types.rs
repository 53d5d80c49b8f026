//! Core data model types for sidecar metadata.
//!
//! These types represent the normalized record produced from one sidecar
//! document and the validation report the ingestion layer uses to gate
//! acceptance. They are designed to be:
//!
//! - **Serializable**: JSON round-trips via serde for the loader and the
//!   persistence layer
//! - **Cloneable**: cheap to hand across pipeline stages
//! - **Comparable**: equality checks for testing and idempotency assertions
//!
//! # Type flow
//!
//! ```text
//! serde_json::Value (untrusted sidecar document)
//!         │
//!         ▼ parse_rich_metadata()
//! ParsedRichMetadata (always well-typed)
//!         │
//!         ▼ validate_metadata()
//! ValidationReport (errors vs warnings)
//! ```
//!
//! The record and the report together form a [`SidecarOutcome`], the unit the
//! external ingestion pipeline persists or rejects.
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_DISPLAY_NAME;

/// Normalized metadata record produced from one sidecar document.
///
/// Every field is guaranteed well-typed regardless of the input shape:
/// absent, null, or wrong-typed source fields degrade to `None` or an empty
/// vector, never to an error.
///
/// # Guarantees
///
/// - `display_name` is never empty: it is a trimmed source value or the
///   configured fallback (default [`DEFAULT_DISPLAY_NAME`])
/// - every entry of `tags`, `categories`, `performers`, and `primary_tag` is
///   trimmed and lowercased; entries that trim to empty never appear
/// - `available_formats` entries are trimmed but keep their original case —
///   formats are technical labels, not free-text classification
/// - `thumbnail` and `webpage_url` carry an `http://`/`https://` scheme when
///   produced by the extractors
/// - `duration` is floored whole seconds; the extractors never emit a
///   negative value
///
/// # Example
///
/// ```rust
/// use richmeta::parse_rich_metadata;
/// use serde_json::json;
///
/// let doc = json!({
///     "title": "Grand Finale",
///     "provider": "exampletube",
///     "duration": "1404",
///     "tags": ["Brunette", " Office "],
/// });
///
/// let record = parse_rich_metadata(&doc);
/// assert_eq!(record.display_name, "Grand Finale");
/// assert_eq!(record.duration, Some(1404));
/// assert_eq!(record.tags, vec!["brunette", "office"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedRichMetadata {
    /// Human-readable label for the media file. Never empty.
    pub display_name: String,

    /// Source platform identifier, e.g. the downloader's extractor key.
    pub provider: Option<String>,

    /// Platform-specific content identifier.
    pub provider_id: Option<String>,

    /// Original source URL of the media page.
    pub webpage_url: Option<String>,

    /// Thumbnail URL. When produced by the extractor this always carries an
    /// `http://` or `https://` scheme; non-conforming values are dropped at
    /// parse time rather than flagged later.
    pub thumbnail: Option<String>,

    /// Duration in whole seconds. Fractional source values are floored;
    /// negative or unparseable values never survive extraction.
    pub duration: Option<i64>,

    /// Label of the format that was actually retrieved.
    pub downloaded_format: Option<String>,

    /// Catalog of formats seen for this media file, original case preserved.
    pub available_formats: Vec<String>,

    /// Uploader or channel name, trimmed but case-preserved.
    pub creator: Option<String>,

    /// Single distinguished tag, lowercased, looked up against the tag
    /// catalog by the external storage layer.
    pub primary_tag: Option<String>,

    /// General tag names, trimmed and lowercased, order preserved.
    pub tags: Vec<String>,

    /// Category names, trimmed and lowercased, order preserved.
    pub categories: Vec<String>,

    /// Performer names, trimmed and lowercased, order preserved.
    pub performers: Vec<String>,
}

impl ParsedRichMetadata {
    /// Returns true if any provider information was found in the source
    /// document.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Returns true if the display name fell back to the default because no
    /// usable source value was present.
    pub fn used_fallback_name(&self) -> bool {
        self.display_name == DEFAULT_DISPLAY_NAME
    }

    /// Returns true if the record carries no classification at all (no tags
    /// and no categories).
    pub fn is_unclassified(&self) -> bool {
        self.tags.is_empty() && self.categories.is_empty()
    }

    /// Iterates over every candidate name the storage layer should upsert
    /// into its catalogs: tags, categories, performers, and the primary tag.
    pub fn catalog_candidates(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .chain(self.categories.iter())
            .chain(self.performers.iter())
            .map(String::as_str)
            .chain(self.primary_tag.as_deref())
    }
}

/// Provider identity fields extracted as a group.
///
/// The three fields are independently null-safe; grouping is ergonomic only,
/// there is no cross-field dependency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProviderInfo {
    /// Source platform identifier.
    pub provider: Option<String>,
    /// Platform-specific content identifier.
    pub provider_id: Option<String>,
    /// Original source URL.
    pub webpage_url: Option<String>,
}

/// Format fields extracted as a group.
///
/// Unlike tags and categories, format labels keep their original case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FormatInfo {
    /// Label of the format actually retrieved.
    pub downloaded_format: Option<String>,
    /// Every format label seen in the document, order and case preserved.
    pub available_formats: Vec<String>,
}

/// Structured validation findings for one record.
///
/// Errors and warnings are data, not control flow: validation never fails,
/// it reports. `valid` is true exactly when `errors` is empty; warnings never
/// affect validity. The external ingestion pipeline decides accept/warn/
/// reject policy from this report.
///
/// # Example
///
/// ```rust
/// use richmeta::{parse_rich_metadata, validate_metadata};
/// use serde_json::json;
///
/// let record = parse_rich_metadata(&json!({}));
/// let report = validate_metadata(&record);
///
/// assert!(report.valid);
/// assert!(report.errors.is_empty());
/// // Empty document: fallback name, no classification, no provider.
/// assert_eq!(report.warnings.len(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// True iff `errors` is empty.
    pub valid: bool,
    /// Conditions that should block acceptance.
    pub errors: Vec<String>,
    /// Conditions worth surfacing that do not affect validity.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Builds a report from collected findings, deriving `valid`.
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// A report with no findings.
    pub fn clean() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Returns true if the report carries any finding, error or warning.
    pub fn has_findings(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::clean()
    }
}

/// Parsed record plus its validation report, produced once per sidecar
/// document and handed to the external persistence layer. The value has no
/// identity beyond the call that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidecarOutcome {
    /// The normalized metadata record.
    pub record: ParsedRichMetadata,
    /// Validation findings for the record.
    pub report: ValidationReport,
}
