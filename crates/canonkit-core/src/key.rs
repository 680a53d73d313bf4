//! Canonical keys, equality, and total order.
//!
//! The canonical key is the single source of truth for canonical identity:
//! two values are canonically equal iff their keys are byte-identical, and
//! the lexicographic byte order over keys is the total order every canonical
//! sort in the workspace uses. The 32-bit fingerprint in [`crate::hash`] is
//! a surrogate only.

use canonkit_json::Json;
use std::cmp::Ordering;

use crate::canonicalize::{canonicalize, canonicalize_with};
use crate::ejson::to_ejson;
use crate::policy::Policy;

/// Canonical key under the default policy.
pub fn canonical_key(json: &Json) -> String {
    key_of_canonical(&canonicalize(json))
}

/// Canonical key under the given policy.
pub fn canonical_key_with(policy: &Policy, json: &Json) -> String {
    key_of_canonical(&canonicalize_with(policy, json))
}

/// Canonical equality: byte-identical canonical keys.
pub fn equals_canonical(a: &Json, b: &Json) -> bool {
    canonical_key(a) == canonical_key(b)
}

/// Total order over values: lexicographic byte order of canonical keys.
pub fn compare_canonical(a: &Json, b: &Json) -> Ordering {
    canonical_key(a).cmp(&canonical_key(b))
}

/// Key of an already-canonical value: encode and serialize, skipping the
/// canonicalization pass. Callers must only hand in canonical values.
pub(crate) fn key_of_canonical(json: &Json) -> String {
    to_ejson(json).to_compact_string()
}
