//! Group algorithms over canonical multimaps.
//!
//! All functions are pure: inputs are never mutated and results are new
//! container instances. Bucket keys are compared canonically (that is the
//! multimap's job); the `elem_key` parameters below key *elements inside a
//! bucket* and are independent of the canonical bucket key.
//!
//! These are eager algorithms over pre-materialized maps; for unbounded
//! input use [`crate::stream`].

use crate::map::CanonicalJsonMap;
use crate::multimap::CanonicalJsonMultiMap;
use canonkit_json::Json;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

/// Buckets items by the canonical key of `key_of(item)`.
pub fn group_by_canonical<V, K>(
    items: impl IntoIterator<Item = V>,
    mut key_of: K,
) -> CanonicalJsonMultiMap<V>
where
    K: FnMut(&V) -> Json,
{
    let mut out = CanonicalJsonMultiMap::new();
    for item in items {
        let key = key_of(&item);
        out.add(&key, item);
    }
    out
}

/// First-then-second concatenation; colliding keys concatenate their
/// buckets.
pub fn concat_groups<V: Clone>(
    a: &CanonicalJsonMultiMap<V>,
    b: &CanonicalJsonMultiMap<V>,
) -> CanonicalJsonMultiMap<V> {
    let mut out = CanonicalJsonMultiMap::new();
    for (key, bucket) in a.iter().chain(b.iter()) {
        out.add_all(key, bucket.iter().cloned());
    }
    out
}

/// Union: `a`'s buckets first (in order), then `b`'s new keys. Within each
/// merged bucket, elements deduplicate by `elem_key`, first occurrence
/// winning.
pub fn union_groups_by<V: Clone, K: Eq + Hash>(
    a: &CanonicalJsonMultiMap<V>,
    b: &CanonicalJsonMultiMap<V>,
    mut elem_key: impl FnMut(&V) -> K,
) -> CanonicalJsonMultiMap<V> {
    let mut out = CanonicalJsonMultiMap::new();
    for (key, bucket) in a.iter() {
        let mut seen = HashSet::new();
        let mut merged = Vec::new();
        for value in bucket {
            if seen.insert(elem_key(value)) {
                merged.push(value.clone());
            }
        }
        for value in b.get(key) {
            if seen.insert(elem_key(value)) {
                merged.push(value.clone());
            }
        }
        out.add_all(key, merged);
    }
    for (key, bucket) in b.iter() {
        if a.contains_key(key) {
            continue;
        }
        let mut seen = HashSet::new();
        let mut deduped = Vec::new();
        for value in bucket {
            if seen.insert(elem_key(value)) {
                deduped.push(value.clone());
            }
        }
        out.add_all(key, deduped);
    }
    out
}

/// Intersection: keys present in both maps; per key, `a`'s elements whose
/// `elem_key` also occurs in `b`'s bucket. Buckets that end up empty are
/// dropped.
pub fn intersect_groups_by<V: Clone, K: Eq + Hash>(
    a: &CanonicalJsonMultiMap<V>,
    b: &CanonicalJsonMultiMap<V>,
    mut elem_key: impl FnMut(&V) -> K,
) -> CanonicalJsonMultiMap<V> {
    let mut out = CanonicalJsonMultiMap::new();
    for (key, bucket) in a.iter() {
        if !b.contains_key(key) {
            continue;
        }
        let b_keys: HashSet<K> = b.get(key).iter().map(&mut elem_key).collect();
        let kept: Vec<V> = bucket
            .iter()
            .filter(|value| b_keys.contains(&elem_key(value)))
            .cloned()
            .collect();
        out.add_all(key, kept);
    }
    out
}

/// Difference: per key of `a`, the elements whose `elem_key` does not occur
/// in `b`'s bucket for the same canonical key. Buckets that end up empty
/// are dropped.
pub fn diff_groups_by<V: Clone, K: Eq + Hash>(
    a: &CanonicalJsonMultiMap<V>,
    b: &CanonicalJsonMultiMap<V>,
    mut elem_key: impl FnMut(&V) -> K,
) -> CanonicalJsonMultiMap<V> {
    let mut out = CanonicalJsonMultiMap::new();
    for (key, bucket) in a.iter() {
        let b_keys: HashSet<K> = b.get(key).iter().map(&mut elem_key).collect();
        let kept: Vec<V> = bucket
            .iter()
            .filter(|value| !b_keys.contains(&elem_key(value)))
            .cloned()
            .collect();
        out.add_all(key, kept);
    }
    out
}

/// Per bucket: stable sort descending by score (original index breaks
/// ties), then truncate to `k`. Non-finite score comparisons fall back to
/// the index tiebreak.
pub fn top_k_by<V: Clone>(
    m: &CanonicalJsonMultiMap<V>,
    k: usize,
    mut score_of: impl FnMut(&V) -> f64,
) -> CanonicalJsonMultiMap<V> {
    let mut out = CanonicalJsonMultiMap::new();
    for (key, bucket) in m.iter() {
        let scores: Vec<f64> = bucket.iter().map(&mut score_of).collect();
        let mut order: Vec<usize> = (0..bucket.len()).collect();
        order.sort_by(|&i, &j| {
            scores[j]
                .partial_cmp(&scores[i])
                .unwrap_or(Ordering::Equal)
                .then(i.cmp(&j))
        });
        order.truncate(k);
        out.add_all(key, order.into_iter().map(|i| bucket[i].clone()));
    }
    out
}

/// Reorders the map itself (bucket order) by a per-bucket summary,
/// falling back to canonical-key order on ties.
pub fn sort_groups_by<V: Clone, S>(
    m: &CanonicalJsonMultiMap<V>,
    mut summary: impl FnMut(&Json, &[V]) -> S,
    mut cmp: impl FnMut(&S, &S) -> Ordering,
) -> CanonicalJsonMultiMap<V> {
    let mut rows: Vec<(&str, &Json, &[V], S)> = m
        .iter_full()
        .map(|(key_str, key, bucket)| {
            let s = summary(key, bucket);
            (key_str, key, bucket, s)
        })
        .collect();
    rows.sort_by(|x, y| cmp(&x.3, &y.3).then_with(|| x.0.cmp(y.0)));
    let mut out = CanonicalJsonMultiMap::new();
    for (_, key, bucket, _) in rows {
        out.add_all(key, bucket.iter().cloned());
    }
    out
}

/// [`sort_groups_by`] specialized to a numeric summary, descending.
pub fn sort_groups_by_number_desc<V: Clone>(
    m: &CanonicalJsonMultiMap<V>,
    summary: impl FnMut(&Json, &[V]) -> f64,
) -> CanonicalJsonMultiMap<V> {
    sort_groups_by(m, summary, |a, b| {
        b.partial_cmp(a).unwrap_or(Ordering::Equal)
    })
}

/// Per bucket, the first strictly-minimal value by score.
pub fn min_by_group<V: Clone>(
    m: &CanonicalJsonMultiMap<V>,
    mut score_of: impl FnMut(&V) -> f64,
) -> CanonicalJsonMap<V> {
    let mut out = CanonicalJsonMap::new();
    for (key, bucket) in m.iter() {
        if let Some(best) = pick(bucket, &mut score_of, |s, best| s < best) {
            out.insert(key, best.clone());
        }
    }
    out
}

/// Per bucket, the first strictly-maximal value by score.
pub fn max_by_group<V: Clone>(
    m: &CanonicalJsonMultiMap<V>,
    mut score_of: impl FnMut(&V) -> f64,
) -> CanonicalJsonMap<V> {
    let mut out = CanonicalJsonMap::new();
    for (key, bucket) in m.iter() {
        if let Some(best) = pick(bucket, &mut score_of, |s, best| s > best) {
            out.insert(key, best.clone());
        }
    }
    out
}

/// Single minimal `(key, value)` across all buckets; first wins ties.
pub fn min_by_global<'a, V>(
    m: &'a CanonicalJsonMultiMap<V>,
    mut score_of: impl FnMut(&V) -> f64,
) -> Option<(&'a Json, &'a V)> {
    pick_global(m, &mut score_of, |s, best| s < best)
}

/// Single maximal `(key, value)` across all buckets; first wins ties.
pub fn max_by_global<'a, V>(
    m: &'a CanonicalJsonMultiMap<V>,
    mut score_of: impl FnMut(&V) -> f64,
) -> Option<(&'a Json, &'a V)> {
    pick_global(m, &mut score_of, |s, best| s > best)
}

fn pick<'a, V>(
    bucket: &'a [V],
    score_of: &mut impl FnMut(&V) -> f64,
    better: impl Fn(f64, f64) -> bool,
) -> Option<&'a V> {
    let mut best: Option<(&V, f64)> = None;
    for value in bucket {
        let score = score_of(value);
        match best {
            // Strict comparison: the first encountered extremum wins ties.
            Some((_, best_score)) if !better(score, best_score) => {}
            _ => best = Some((value, score)),
        }
    }
    best.map(|(value, _)| value)
}

fn pick_global<'a, V>(
    m: &'a CanonicalJsonMultiMap<V>,
    score_of: &mut impl FnMut(&V) -> f64,
    better: impl Fn(f64, f64) -> bool,
) -> Option<(&'a Json, &'a V)> {
    let mut best: Option<(&Json, &V, f64)> = None;
    for (key, bucket) in m.iter() {
        for value in bucket {
            let score = score_of(value);
            match best {
                Some((_, _, best_score)) if !better(score, best_score) => {}
                _ => best = Some((key, value, score)),
            }
        }
    }
    best.map(|(key, value, _)| (key, value))
}

/// Per-bucket prefix satisfying the predicate; the predicate receives
/// `(value, key, index)`. Buckets with an empty prefix are dropped.
pub fn take_while_group<V: Clone>(
    m: &CanonicalJsonMultiMap<V>,
    mut pred: impl FnMut(&V, &Json, usize) -> bool,
) -> CanonicalJsonMultiMap<V> {
    let mut out = CanonicalJsonMultiMap::new();
    for (key, bucket) in m.iter() {
        let kept: Vec<V> = bucket
            .iter()
            .enumerate()
            .take_while(|(index, value)| pred(value, key, *index))
            .map(|(_, value)| value.clone())
            .collect();
        out.add_all(key, kept);
    }
    out
}

/// Per-bucket remainder after dropping the prefix satisfying the predicate;
/// the predicate receives `(value, key, index)`. Buckets that end up empty
/// are dropped.
pub fn drop_while_group<V: Clone>(
    m: &CanonicalJsonMultiMap<V>,
    mut pred: impl FnMut(&V, &Json, usize) -> bool,
) -> CanonicalJsonMultiMap<V> {
    let mut out = CanonicalJsonMultiMap::new();
    for (key, bucket) in m.iter() {
        let kept: Vec<V> = bucket
            .iter()
            .enumerate()
            .skip_while(|(index, value)| pred(value, key, *index))
            .map(|(_, value)| value.clone())
            .collect();
        out.add_all(key, kept);
    }
    out
}
