//! Error types for the sidecar metadata crate.
//!
//! The parsing and validation surfaces are total: any document shape,
//! including an empty or entirely non-object one, degrades to well-defined
//! absent values rather than an error. The only fallible operation is the
//! JSON-text convenience entry point, which can reject text that is not JSON
//! at all; that case is normally caught upstream by the file loader.
use thiserror::Error;

/// Errors produced by the text-level entry point.
///
/// Cloneable and comparable so callers and tests can match on them, and
/// `#[non_exhaustive]` so variants can be added without a breaking release.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SidecarError {
    /// The sidecar text could not be deserialized as JSON. Once a document
    /// deserializes, parsing itself cannot fail.
    #[error("malformed sidecar document: {0}")]
    MalformedDocument(String),
}
