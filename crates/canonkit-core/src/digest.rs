//! SHA-256 content digests over canonical bytes.
//!
//! Content digests are computed as
//! `sha256(domain_separator || canonical_key_bytes)` and encoded as
//! base64url without padding. They are the content-addressing identifier for
//! canonical values; the FNV fingerprint in [`crate::hash`] is a cheap
//! in-process surrogate, not an address.

use base64::Engine;
use canonkit_json::{Json, ValidationError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;

use crate::key::canonical_key;

/// Domain separator for content digests: `b"canonkit:canonical:v1\0"`.
const CONTENT_DOMAIN_SEPARATOR: &[u8] = b"canonkit:canonical:v1\0";

/// Supported digest algorithms for canonical identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256 (the current default).
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + bytes digest, encoded as base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm (currently always `sha-256`).
    pub alg: DigestAlg,
    /// Base64URL (no padding) digest bytes.
    #[serde(rename = "b64")]
    pub b64: String,
}

impl Digest {
    /// Constructs a validated digest from an externally supplied payload.
    pub fn new(alg: DigestAlg, b64: impl Into<String>) -> Result<Self, ValidationError> {
        let b64 = b64.into();
        let re = Regex::new(r"^[A-Za-z0-9_-]{43,44}$").expect("invalid regex");
        if !re.is_match(&b64) {
            return Err(ValidationError::PatternMismatch {
                field: "digest",
                value: b64,
            });
        }
        Ok(Digest { alg, b64 })
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha-256:{}", self.b64)
    }
}

/// Computes the content digest of a value.
///
/// Formula: `sha256(domain_separator || canonical_key_bytes)`, so two values
/// share a digest iff they are canonically equal.
pub fn content_digest(json: &Json) -> Digest {
    let key = canonical_key(json);
    let mut hasher = Sha256::new();
    hasher.update(CONTENT_DOMAIN_SEPARATOR);
    hasher.update(key.as_bytes());
    let hash_bytes = hasher.finalize();
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash_bytes);
    Digest {
        alg: DigestAlg::Sha256,
        b64,
    }
}
