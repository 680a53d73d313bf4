//! Canonical representation engine for canonkit.
//!
//! This crate provides:
//! - Policy-parameterized canonicalization of [`Json`](canonkit_json::Json)
//!   values (object key sort, set dedup/sort, regex flag normalization)
//! - The EJSON plain-tree encoding with sigil-tagged non-native kinds
//! - Canonical keys: deterministic compact strings that witness canonical
//!   equality, plus the total order and FNV-1a-32 fingerprint over them
//! - SHA-256 content digests over canonical bytes
//! - An explicit hash-consing pool for structural sharing
//!
//! Core invariants:
//! - Canonicalization is total, idempotent, and deterministic across calls
//! - Two values are canonically equal iff their canonical keys are
//!   byte-identical; the 32-bit fingerprint is a surrogate, never an identity
//! - `Arr` order is never altered; leaves pass through unchanged
//! - Pools are explicit objects with create→use→drop lifecycles; no globals,
//!   no eviction
//!
#![deny(missing_docs)]

/// Policy-parameterized canonicalization fold.
pub mod canonicalize;
/// SHA-256 content digests over canonical bytes.
pub mod digest;
/// EJSON plain tree, compact serializer, and decoder.
pub mod ejson;
/// FNV-1a-32 fingerprint over canonical keys.
pub mod hash;
/// Canonical keys, equality, and total order.
pub mod key;
/// Canonicalization policy options.
pub mod policy;
/// Hash-consing pool.
pub mod pool;

pub use canonicalize::{canonicalize, canonicalize_with};
pub use digest::{content_digest, Digest, DigestAlg};
pub use ejson::{from_ejson, to_ejson, to_ejson_canonical, to_ejson_canonical_with, EJson, EJsonError};
pub use hash::{fnv1a_32, hash_canonical, hash_canonical_num};
pub use key::{canonical_key, canonical_key_with, compare_canonical, equals_canonical};
pub use policy::Policy;
pub use pool::{hash_cons, hash_cons_fresh, HashConsPool};
