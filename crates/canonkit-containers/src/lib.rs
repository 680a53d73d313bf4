//! Containers and algorithms keyed by canonical Json equality.
//!
//! This crate provides:
//! - [`CanonicalJsonMap`], [`CanonicalJsonSet`], and
//!   [`CanonicalJsonMultiMap`]: Map/Set-like containers whose keys compare
//!   by canonical equality, with first-insertion iteration order
//! - Group algorithms: group-by, set algebra over groups, per-bucket top-K,
//!   bucket reordering, per-bucket and global extrema, prefix operations
//! - Single-pass streaming reducers safe for unbounded input
//! - Flat-array utilities applying the canonical total order directly
//!
//! Core invariants:
//! - Container identity is the canonical key *string*; the 32-bit
//!   fingerprint is never used for identity
//! - Re-inserting an existing canonical key updates in place without moving
//!   its iteration position
//! - Algorithms never mutate their inputs; results are new containers
//! - Everything is single-threaded and synchronous; only the streaming
//!   reducers may be fed unbounded input
//!
#![deny(missing_docs)]

/// Flat-array canonical utilities.
pub mod array;
/// Group algorithms over canonical multimaps.
pub mod group;
/// Map keyed by canonical equality.
pub mod map;
/// Multimap keyed by canonical equality.
pub mod multimap;
/// Set keyed by canonical equality.
pub mod set;
/// Single-pass streaming reducers.
pub mod stream;

pub use array::{
    distinct_by_canonical, distinct_iter_by_canonical, max_by_canonical, min_by_canonical,
    sort_json_by_canonical, unique_json_by_canonical,
};
pub use group::{
    concat_groups, diff_groups_by, drop_while_group, group_by_canonical, intersect_groups_by,
    max_by_global, max_by_group, min_by_global, min_by_group, sort_groups_by,
    sort_groups_by_number_desc, take_while_group, top_k_by, union_groups_by,
};
pub use map::CanonicalJsonMap;
pub use multimap::CanonicalJsonMultiMap;
pub use set::CanonicalJsonSet;
pub use stream::{
    stream_counts_by_canonical, stream_reduce_by_canonical, stream_sum_by_canonical,
    stream_top_k_by_canonical,
};
