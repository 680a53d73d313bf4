//! Recursive Json value model for canonkit.
//!
//! This crate provides:
//! - The closed [`Json`] sum type (JSON-native kinds plus decimal, binary,
//!   regex, date, set, and undefined)
//! - Constructor helpers in [`build`]
//! - The pattern functor [`JsonF`] and the bottom-up fold [`cata`] that every
//!   canonicalization/encoding pass in the workspace is written against
//! - `serde_json::Value` interop for the JSON-native subset
//! - Validated constructors for ingestion edges
//!
//! Core invariants:
//! - `Json` is an owned tree; cycles are unrepresentable
//! - `Arr` is ordered; `Set` is an unordered collection whose order is fixed
//!   only by canonicalization (downstream); `Obj` keys need not be unique
//! - Adding a variant forces a compile error in every `JsonF` algebra
//!
#![deny(missing_docs)]

/// Constructor helpers for building `Json` trees.
pub mod build;
/// Pattern functor and bottom-up fold.
pub mod functor;
/// `serde_json::Value` interop for the JSON-native subset.
pub mod interop;
/// Validated constructors for ingestion edges.
pub mod validation;
/// The recursive `Json` sum type.
pub mod value;

pub use functor::{cata, JsonF};
pub use interop::ValueError;
pub use validation::ValidationError;
pub use value::Json;
