//! Single-pass streaming reducers.
//!
//! The only algorithms in this crate designed for unbounded or lazy input:
//! each consumes its sequence exactly once, in order, folding into a
//! canonical map incrementally via `upsert`. The sequence is not
//! restartable; callers wanting early results must bound the input
//! themselves.

use crate::map::CanonicalJsonMap;
use crate::multimap::CanonicalJsonMultiMap;
use canonkit_json::Json;
use std::cmp::Ordering;

/// Folds `(key, value)` pairs into per-canonical-key accumulators.
/// `init` builds the accumulator for a first-seen key; `step` folds each
/// value into its key's accumulator.
pub fn stream_reduce_by_canonical<V, A>(
    pairs: impl IntoIterator<Item = (Json, V)>,
    mut init: impl FnMut() -> A,
    mut step: impl FnMut(&mut A, V),
) -> CanonicalJsonMap<A> {
    let mut out = CanonicalJsonMap::new();
    for (key, value) in pairs {
        let acc = out.upsert(&key, &mut init, |_| {});
        step(acc, value);
    }
    out
}

/// Keeps the top `k` values per canonical key, scored on arrival:
/// descending by score, arrival order breaking ties.
pub fn stream_top_k_by_canonical<V>(
    pairs: impl IntoIterator<Item = (Json, V)>,
    k: usize,
    mut score_of: impl FnMut(&V) -> f64,
) -> CanonicalJsonMultiMap<V> {
    let mut acc: CanonicalJsonMap<Vec<(f64, usize, V)>> = CanonicalJsonMap::new();
    for (seq, (key, value)) in pairs.into_iter().enumerate() {
        let score = score_of(&value);
        let bucket = acc.upsert(&key, Vec::new, |_| {});
        bucket.push((score, seq, value));
        bucket.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });
        bucket.truncate(k);
    }
    let mut out = CanonicalJsonMultiMap::new();
    for (key, bucket) in acc.into_entries() {
        out.add_all(&key, bucket.into_iter().map(|(_, _, value)| value));
    }
    out
}

/// Counts occurrences per canonical key.
pub fn stream_counts_by_canonical(keys: impl IntoIterator<Item = Json>) -> CanonicalJsonMap<u64> {
    let mut out = CanonicalJsonMap::new();
    for key in keys {
        *out.upsert(&key, || 0, |_| {}) += 1;
    }
    out
}

/// Sums values per canonical key.
pub fn stream_sum_by_canonical(
    pairs: impl IntoIterator<Item = (Json, f64)>,
) -> CanonicalJsonMap<f64> {
    let mut out = CanonicalJsonMap::new();
    for (key, value) in pairs {
        *out.upsert(&key, || 0.0, |_| {}) += value;
    }
    out
}
