//! Flat-array canonical utilities.
//!
//! The canonical-key total order applied directly to slices and iterators,
//! without building a container.

use canonkit_core::canonical_key;
use canonkit_json::Json;
use std::collections::HashSet;

/// Sorts by canonical-key order.
pub fn sort_json_by_canonical(items: &[Json]) -> Vec<Json> {
    let mut out = items.to_vec();
    out.sort_by_cached_key(canonical_key);
    out
}

/// Deduplicates by canonical key, keeping the first occurrence and the
/// original order.
pub fn unique_json_by_canonical(items: &[Json]) -> Vec<Json> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(canonical_key(item)))
        .cloned()
        .collect()
}

/// Deduplicates arbitrary items by the canonical key of `key_of(item)`,
/// keeping the first occurrence.
pub fn distinct_by_canonical<V: Clone>(
    items: &[V],
    mut key_of: impl FnMut(&V) -> Json,
) -> Vec<V> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(canonical_key(&key_of(item))))
        .cloned()
        .collect()
}

/// Lazy, single-pass variant of [`distinct_by_canonical`]. Safe for
/// unbounded input; not restartable.
pub fn distinct_iter_by_canonical<V, I>(
    items: I,
    mut key_of: impl FnMut(&V) -> Json,
) -> impl Iterator<Item = V>
where
    I: IntoIterator<Item = V>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(move |item| seen.insert(canonical_key(&key_of(item))))
}

/// First minimal element in canonical-key order; first wins ties.
pub fn min_by_canonical(items: &[Json]) -> Option<&Json> {
    extremum(items, |candidate, best| candidate < best)
}

/// First maximal element in canonical-key order; first wins ties.
pub fn max_by_canonical(items: &[Json]) -> Option<&Json> {
    extremum(items, |candidate, best| candidate > best)
}

fn extremum<'a>(items: &'a [Json], better: impl Fn(&str, &str) -> bool) -> Option<&'a Json> {
    let mut best: Option<(&Json, String)> = None;
    for item in items {
        let key = canonical_key(item);
        match &best {
            Some((_, best_key)) if !better(&key, best_key) => {}
            _ => best = Some((item, key)),
        }
    }
    best.map(|(item, _)| item)
}
