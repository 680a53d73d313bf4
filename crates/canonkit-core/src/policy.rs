//! Canonicalization policy options.

use serde::{Deserialize, Serialize};

/// Options controlling which normalizations the canonicalization fold
/// applies. All options are on by default; turning one off widens the
/// equivalence classes that canonical keys distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Sort `Obj` entries byte-lexicographically by key (duplicates kept).
    pub sort_objects: bool,
    /// Deduplicate `Set` elements by canonical key (first occurrence wins).
    pub dedup_sets: bool,
    /// Sort `Set` elements by canonical key.
    pub sort_sets: bool,
    /// Deduplicate and sort regex flags; collapse empty flags to `None`.
    pub normalize_regex_flags: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            sort_objects: true,
            dedup_sets: true,
            sort_sets: true,
            normalize_regex_flags: true,
        }
    }
}
