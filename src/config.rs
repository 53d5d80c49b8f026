//! Configuration types for the sidecar metadata pipeline.
//!
//! This module defines [`ParserConfig`] and [`ValidationPolicy`], which
//! control how sidecar documents are normalized and how findings are
//! escalated. Both are cheap to clone and serialize cleanly from external
//! configuration formats such as JSON, TOML, or YAML.
//!
//! The defaults reproduce the stock pipeline behavior exactly: `"Unknown"`
//! as the display-name fallback, unlimited list lengths, no required fields,
//! warnings left as warnings.
//!
//! # Quick start
//!
//! ```rust
//! use richmeta::ParserConfig;
//!
//! let config = ParserConfig::default();
//! config.validate().expect("invalid configuration");
//! ```
//!
//! # Stricter ingestion
//!
//! ```rust
//! use richmeta::{ParserConfig, RequiredField, ValidationPolicy};
//!
//! let config = ParserConfig {
//!     max_list_entries: Some(256),
//!     validation: ValidationPolicy {
//!         required_fields: vec![RequiredField::Provider],
//!         warnings_as_errors: false,
//!     },
//!     ..Default::default()
//! };
//!
//! assert!(config.validate().is_ok());
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display name used when no source field yields a usable value.
pub const DEFAULT_DISPLAY_NAME: &str = "Unknown";

/// Runtime configuration for parsing and validating sidecar documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Semantic version of the parser configuration. Increment on breaking
    /// behavioral changes.
    ///
    /// Default: `1`
    pub version: u32,

    /// Display name applied when `display_name`, `title`, and `stored_name`
    /// are all absent or empty after trimming.
    ///
    /// Must be non-empty after trimming (checked by [`ParserConfig::validate`]).
    ///
    /// Default: [`DEFAULT_DISPLAY_NAME`]
    pub fallback_display_name: String,

    /// Optional cap on the length of the list-valued fields (tags,
    /// categories, performers, available formats). Entries beyond the cap
    /// are truncated after normalization; surviving entries keep their
    /// relative order. Protects the storage layer from abusive documents
    /// carrying thousands of candidate names.
    ///
    /// Default: `None` (unlimited)
    #[serde(default)]
    pub max_list_entries: Option<usize>,

    /// Escalation rules applied when validating parsed records.
    ///
    /// Default: [`ValidationPolicy::default()`]
    #[serde(default)]
    pub validation: ValidationPolicy,
}

/// Controls how validation findings are escalated.
///
/// The default policy reports the stock rule set unchanged; escalation only
/// ever strengthens findings, it never suppresses them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Fields whose absence is an error rather than the stock warning (or
    /// no finding at all). Useful when the ingestion pipeline should refuse
    /// records that cannot be linked back to their source platform.
    ///
    /// Default: empty (no required fields)
    pub required_fields: Vec<RequiredField>,

    /// Promote every warning to an error. `valid` then reflects warnings
    /// too, which turns the report into a strict gate.
    ///
    /// Default: `false`
    pub warnings_as_errors: bool,
}

/// Record fields that can be required via [`ValidationPolicy`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum RequiredField {
    /// Require provider identification to be present.
    Provider,
    /// Require a thumbnail URL to be present.
    Thumbnail,
    /// Require a duration to be present.
    Duration,
    /// Require an uploader/channel name to be present.
    Creator,
}

impl RequiredField {
    /// Stable lowercase label used in report messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Provider => "provider",
            RequiredField::Thumbnail => "thumbnail",
            RequiredField::Duration => "duration",
            RequiredField::Creator => "creator",
        }
    }
}

/// Errors that can occur when validating a [`ParserConfig`].
///
/// These are configuration-time issues, intended to be surfaced at process
/// start-up rather than per document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configured fallback display name trims to the empty string, which
    /// would break the guarantee that every record has a non-empty name.
    #[error("fallback_display_name must be non-empty after trimming")]
    EmptyFallbackDisplayName,

    /// A zero list cap would silently drop every tag, category, performer,
    /// and format; use `None` for "unlimited" instead.
    #[error("max_list_entries must be at least 1 when set (use None for unlimited)")]
    ZeroListCap,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            version: 1,
            fallback_display_name: DEFAULT_DISPLAY_NAME.into(),
            max_list_entries: None,
            validation: ValidationPolicy::default(),
        }
    }
}

impl ParserConfig {
    /// Validates internal consistency of this configuration.
    ///
    /// Inexpensive, in-memory only; call once at start-up before processing
    /// documents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use richmeta::ParserConfig;
    ///
    /// assert!(ParserConfig::default().validate().is_ok());
    ///
    /// let bad = ParserConfig {
    ///     fallback_display_name: "   ".into(),
    ///     ..Default::default()
    /// };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback_display_name.trim().is_empty() {
            return Err(ConfigError::EmptyFallbackDisplayName);
        }
        if self.max_list_entries == Some(0) {
            return Err(ConfigError::ZeroListCap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ParserConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.fallback_display_name, DEFAULT_DISPLAY_NAME);
        assert!(cfg.max_list_entries.is_none());
        assert!(cfg.validation.required_fields.is_empty());
        assert!(!cfg.validation.warnings_as_errors);
    }

    #[test]
    fn blank_fallback_name_rejected() {
        let cfg = ParserConfig {
            fallback_display_name: " \t ".into(),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyFallbackDisplayName));
    }

    #[test]
    fn zero_list_cap_rejected() {
        let cfg = ParserConfig {
            max_list_entries: Some(0),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroListCap));
    }

    #[test]
    fn policy_survives_serde_round_trip() {
        let cfg = ParserConfig {
            max_list_entries: Some(64),
            validation: ValidationPolicy {
                required_fields: vec![RequiredField::Provider, RequiredField::Duration],
                warnings_as_errors: true,
            },
            ..Default::default()
        };

        let text = serde_json::to_string(&cfg).expect("serialize");
        let back: ParserConfig = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back.max_list_entries, Some(64));
        assert_eq!(back.validation.required_fields.len(), 2);
        assert!(back.validation.warnings_as_errors);
    }
}
