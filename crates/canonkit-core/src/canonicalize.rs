//! Policy-parameterized canonicalization fold.
//!
//! A single bottom-up pass over the value: children are canonical before
//! their parent is normalized, so set dedup/sort can key on the canonical
//! key of each child directly. Total over well-formed input; no error
//! channel.

use canonkit_json::{cata, Json, JsonF};
use std::collections::HashSet;

use crate::key::key_of_canonical;
use crate::policy::Policy;

/// Canonicalizes with the default policy (everything on).
pub fn canonicalize(json: &Json) -> Json {
    canonicalize_with(&Policy::default(), json)
}

/// Canonicalizes with the given policy.
///
/// - `Set`: elements deduplicated by canonical key (first occurrence wins),
///   then sorted by canonical key
/// - `Obj`: entries stable-sorted byte-lexicographically by key; duplicate
///   keys are kept (upstream owns dedup)
/// - `Regex`: flags deduplicated and sorted; empty flags collapse to `None`
/// - `Arr` order and all leaves pass through unchanged
///
/// Idempotent: re-canonicalizing a canonical value yields the same canonical
/// key.
pub fn canonicalize_with(policy: &Policy, json: &Json) -> Json {
    cata(json, &mut |node: JsonF<Json>| match node {
        JsonF::Null => Json::Null,
        JsonF::Undefined => Json::Undefined,
        JsonF::Bool(b) => Json::Bool(b),
        JsonF::Num(n) => Json::Num(n),
        JsonF::Dec(s) => Json::Dec(s),
        JsonF::Str(s) => Json::Str(s),
        JsonF::Binary(b) => Json::Binary(b),
        JsonF::Regex { pattern, flags } => Json::Regex {
            pattern,
            flags: if policy.normalize_regex_flags {
                normalize_flags(flags)
            } else {
                flags
            },
        },
        JsonF::Date(d) => Json::Date(d),
        JsonF::Arr(items) => Json::Arr(items),
        JsonF::Set(mut items) => {
            if policy.dedup_sets {
                let mut seen = HashSet::new();
                items.retain(|item| seen.insert(key_of_canonical(item)));
            }
            if policy.sort_sets {
                items.sort_by_cached_key(key_of_canonical);
            }
            Json::Set(items)
        }
        JsonF::Obj(mut entries) => {
            if policy.sort_objects {
                // Stable, so duplicate keys keep their relative order.
                entries.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
            }
            Json::Obj(entries)
        }
    })
}

fn normalize_flags(flags: Option<String>) -> Option<String> {
    let flags = flags?;
    let mut chars: Vec<char> = flags.chars().collect();
    chars.sort_unstable();
    chars.dedup();
    if chars.is_empty() {
        None
    } else {
        Some(chars.into_iter().collect())
    }
}
