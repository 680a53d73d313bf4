//! Validated constructors for ingestion edges.
//!
//! The unchecked constructors in [`crate::build`] are the primary API; these
//! variants reject malformed payloads at the boundary where untrusted input
//! enters the model.

use crate::value::Json;
use base64::Engine;
use regex::Regex;
use thiserror::Error;

/// Validation errors for checked constructors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a binary payload is not valid standard base64.
    #[error("binary payload is not valid base64: {0}")]
    InvalidBase64(String),
}

/// Accepted regex flag characters (ECMAScript flag alphabet).
const FLAG_ALPHABET: &str = "dgimsuvy";

impl Json {
    /// Builds a `Date` leaf after validating the ISO-8601 instant shape
    /// (`YYYY-MM-DDTHH:MM:SS[.fff]Z` or a numeric UTC offset).
    pub fn date_checked(iso: impl Into<String>) -> Result<Json, ValidationError> {
        let iso = iso.into();
        let re = Regex::new(
            r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{1,9})?(Z|[+-]\d{2}:\d{2})$",
        )
        .expect("invalid regex");
        if !re.is_match(&iso) {
            return Err(ValidationError::PatternMismatch {
                field: "date",
                value: iso,
            });
        }
        Ok(Json::Date(iso))
    }

    /// Builds a `Binary` leaf after checking the payload decodes as standard
    /// base64.
    pub fn binary_checked(b64: impl Into<String>) -> Result<Json, ValidationError> {
        let b64 = b64.into();
        base64::engine::general_purpose::STANDARD
            .decode(&b64)
            .map_err(|e| ValidationError::InvalidBase64(e.to_string()))?;
        Ok(Json::Binary(b64))
    }

    /// Builds a `Regex` leaf after checking every flag character is in the
    /// accepted alphabet. Duplicate flags are allowed on input;
    /// canonicalization deduplicates them.
    pub fn regex_checked(
        pattern: impl Into<String>,
        flags: Option<&str>,
    ) -> Result<Json, ValidationError> {
        if let Some(flags) = flags {
            if let Some(bad) = flags.chars().find(|c| !FLAG_ALPHABET.contains(*c)) {
                return Err(ValidationError::PatternMismatch {
                    field: "regex_flags",
                    value: bad.to_string(),
                });
            }
        }
        Ok(Json::Regex {
            pattern: pattern.into(),
            flags: flags.map(str::to_string),
        })
    }
}
