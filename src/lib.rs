//! Sidecar Metadata Pipeline
//!
//! This is where sidecar metadata enters the media library. Third-party
//! video downloaders drop loosely-structured `.info.json` documents next to
//! each media file; we take that untrusted document, run every field through
//! a defensive extractor, and hand back a normalized record plus a
//! validation report that the ingestion pipeline uses to decide whether to
//! accept, warn, or reject.
//!
//! ## What we do here
//!
//! - **Extract and normalize fields** - display name fallback chain,
//!   lowercased classification lists, scheme-checked URLs, coerced durations
//! - **Tolerate anything** - absent, null, or wrong-typed fields degrade to
//!   absent values; parsing never fails and never panics
//! - **Validate semantics** - errors vs. warnings as data, not control flow
//! - **Log everything** - structured logs via tracing for debugging batch
//!   ingestion runs
//!
//! The pipeline is pure and synchronous: no I/O, no locks, no state between
//! invocations. It is safe to call concurrently across arbitrarily many
//! documents. Reading files, batching, and persistence belong to the
//! external ingestion pipeline.
//!
//! ## Main entry points
//!
//! Call [`parse_rich_metadata`] for the record alone, [`validate_metadata`]
//! for the report, or [`ingest_sidecar`] for both in one call with
//! structured logging.
//!
//! ## Example
//!
//! ```
//! use richmeta::{ingest_sidecar, ParserConfig};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "title": "Grand Finale",
//!     "provider": "exampletube",
//!     "id": "abc123",
//!     "duration": "1404",
//!     "tags": ["Brunette", " Office "],
//!     "thumbnail": "https://cdn.example/thumb.jpg",
//! });
//!
//! let outcome = ingest_sidecar(&doc, &ParserConfig::default());
//!
//! assert_eq!(outcome.record.display_name, "Grand Finale");
//! assert_eq!(outcome.record.duration, Some(1404));
//! assert_eq!(outcome.record.tags, vec!["brunette", "office"]);
//! assert!(outcome.report.valid);
//! ```
use std::time::Instant;

use serde_json::Value;
use tracing::{info, warn, Level};

mod config;
mod error;
mod extract;
mod types;
mod validate;
mod value;

pub use crate::config::{
    ConfigError, ParserConfig, RequiredField, ValidationPolicy, DEFAULT_DISPLAY_NAME,
};
pub use crate::error::SidecarError;
pub use crate::extract::{
    extract_categories, extract_creator, extract_display_name, extract_duration, extract_formats,
    extract_performers, extract_primary_tag, extract_provider_info, extract_tags,
    extract_thumbnail,
};
pub use crate::types::{
    FormatInfo, ParsedRichMetadata, ProviderInfo, SidecarOutcome, ValidationReport,
};
pub use crate::validate::{validate_metadata, validate_metadata_with};

/// Parses a sidecar document into a normalized metadata record.
///
/// Invokes each field extractor exactly once against the same document and
/// assembles the result; no extractor depends on another's output.
/// Deterministic and side-effect-free: identical input always yields
/// identical output, and an entirely empty (or non-object) document produces
/// a record with the fallback display name and every other field absent.
pub fn parse_rich_metadata(doc: &Value) -> ParsedRichMetadata {
    parse_rich_metadata_with(doc, &ParserConfig::default())
}

/// Parses a sidecar document, honoring a [`ParserConfig`] for the fallback
/// display name and the optional list cap.
pub fn parse_rich_metadata_with(doc: &Value, cfg: &ParserConfig) -> ParsedRichMetadata {
    let provider_info = extract_provider_info(doc);
    let format_info = extract_formats(doc);

    let mut record = ParsedRichMetadata {
        display_name: extract::display_name_or(doc, &cfg.fallback_display_name),
        provider: provider_info.provider,
        provider_id: provider_info.provider_id,
        webpage_url: provider_info.webpage_url,
        thumbnail: extract_thumbnail(doc),
        duration: extract_duration(doc),
        downloaded_format: format_info.downloaded_format,
        available_formats: format_info.available_formats,
        creator: extract_creator(doc),
        primary_tag: extract_primary_tag(doc),
        tags: extract_tags(doc),
        categories: extract_categories(doc),
        performers: extract_performers(doc),
    };

    if let Some(cap) = cfg.max_list_entries {
        record.tags.truncate(cap);
        record.categories.truncate(cap);
        record.performers.truncate(cap);
        record.available_formats.truncate(cap);
    }

    record
}

/// Parses and validates one sidecar document in a single call.
///
/// This is the entry point the ingestion pipeline uses per document. The
/// result is always produced — validation findings are carried in the
/// report, not raised — and the call is instrumented with a tracing span,
/// an elapsed-micros timing field, and a summary log line (`info!` for
/// clean records, `warn!` when the report carries errors).
pub fn ingest_sidecar(doc: &Value, cfg: &ParserConfig) -> SidecarOutcome {
    let start = Instant::now();

    let span = tracing::span!(Level::INFO, "richmeta.ingest_sidecar");
    let _guard = span.enter();

    let record = parse_rich_metadata_with(doc, cfg);
    let report = validate::validate_record(&record, &cfg.validation, &cfg.fallback_display_name);

    let elapsed_micros = start.elapsed().as_micros();
    if report.valid {
        info!(
            display_name = %record.display_name,
            provider = record.provider.as_deref().unwrap_or("none"),
            tags = record.tags.len(),
            categories = record.categories.len(),
            performers = record.performers.len(),
            warnings = report.warnings.len(),
            elapsed_micros,
            "sidecar_parsed"
        );
    } else {
        warn!(
            display_name = %record.display_name,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            elapsed_micros,
            "sidecar_flagged"
        );
    }

    SidecarOutcome { record, report }
}

/// Deserializes sidecar JSON text and runs [`ingest_sidecar`] on it.
///
/// Convenience for the file loader; the only failure mode is text that is
/// not JSON at all. Any valid JSON value — object or not — parses to an
/// outcome.
///
/// # Errors
///
/// [`SidecarError::MalformedDocument`] when the text fails to deserialize.
pub fn parse_sidecar_str(text: &str, cfg: &ParserConfig) -> Result<SidecarOutcome, SidecarError> {
    let doc: Value = serde_json::from_str(text)
        .map_err(|err| SidecarError::MalformedDocument(err.to_string()))?;
    Ok(ingest_sidecar(&doc, cfg))
}
