//! Semantic validation of parsed metadata records.
//!
//! Validation consumes an already well-typed [`ParsedRichMetadata`] and
//! produces a [`ValidationReport`]; findings are data, never control flow.
//! The validator does not re-check structure — that is the extractors' job —
//! only semantic acceptability. It performs no mutation and cannot fail.
//!
//! Some rules are unreachable through this crate's own extractors (the
//! thumbnail and webpage URL schemes are already enforced at parse time) and
//! exist to guard records that reach validation from another construction
//! path. Dropping them would silently weaken the contract for such callers.
use crate::config::{RequiredField, ValidationPolicy, DEFAULT_DISPLAY_NAME};
use crate::types::{ParsedRichMetadata, ValidationReport};

/// Validates a record against the stock rule set.
///
/// Errors (block acceptance):
/// - thumbnail present without an http(s) scheme
/// - webpage URL present without an http(s) scheme
/// - negative duration
///
/// Warnings (surfaced, never affect validity):
/// - display name fell back to the default
/// - neither tags nor categories present
/// - no provider information
///
/// # Example
///
/// ```rust
/// use richmeta::{parse_rich_metadata, validate_metadata};
/// use serde_json::json;
///
/// let record = parse_rich_metadata(&json!({
///     "title": "Clip",
///     "provider": "exampletube",
///     "tags": ["office"],
/// }));
/// let report = validate_metadata(&record);
/// assert!(report.valid);
/// assert!(report.warnings.is_empty());
/// ```
pub fn validate_metadata(record: &ParsedRichMetadata) -> ValidationReport {
    validate_metadata_with(record, &ValidationPolicy::default())
}

/// Validates a record, applying a [`ValidationPolicy`] on top of the stock
/// rules. Required fields escalate the matching "missing" finding to an
/// error; `warnings_as_errors` promotes every remaining warning. Escalation
/// only strengthens findings, it never suppresses them.
pub fn validate_metadata_with(
    record: &ParsedRichMetadata,
    policy: &ValidationPolicy,
) -> ValidationReport {
    validate_record(record, policy, DEFAULT_DISPLAY_NAME)
}

/// Full validation entry point, parameterized on the fallback display name
/// so a configured fallback is recognized by the fell-back warning.
pub(crate) fn validate_record(
    record: &ParsedRichMetadata,
    policy: &ValidationPolicy,
    fallback_display_name: &str,
) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Some(thumbnail) = record.thumbnail.as_deref() {
        if !has_http_scheme(thumbnail) {
            errors.push("Thumbnail URL must use http or https scheme".to_owned());
        }
    }

    if let Some(webpage_url) = record.webpage_url.as_deref() {
        if !has_http_scheme(webpage_url) {
            errors.push("Webpage URL must use http or https scheme".to_owned());
        }
    }

    if matches!(record.duration, Some(d) if d < 0) {
        errors.push("Duration cannot be negative".to_owned());
    }

    if record.display_name == fallback_display_name {
        warnings.push("Display name fell back to default value".to_owned());
    }

    if record.is_unclassified() {
        warnings.push("No tags or categories found".to_owned());
    }

    let provider_required = policy.required_fields.contains(&RequiredField::Provider);
    if !record.has_provider() && !provider_required {
        warnings.push("No provider information found".to_owned());
    }

    for field in &policy.required_fields {
        let present = match field {
            RequiredField::Provider => record.provider.is_some(),
            RequiredField::Thumbnail => record.thumbnail.is_some(),
            RequiredField::Duration => record.duration.is_some(),
            RequiredField::Creator => record.creator.is_some(),
        };
        if !present {
            errors.push(format!(
                "{} is required by validation policy",
                field.label()
            ));
        }
    }

    if policy.warnings_as_errors {
        errors.append(&mut warnings);
    }

    ValidationReport::new(errors, warnings)
}

fn has_http_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
