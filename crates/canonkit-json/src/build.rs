//! Constructor helpers for building `Json` trees.
//!
//! These are the unchecked constructors; the checked variants for ingestion
//! edges live in [`crate::validation`].

use crate::value::Json;

/// JSON `null`.
pub fn null() -> Json {
    Json::Null
}

/// Explicitly-undefined value.
pub fn undefined() -> Json {
    Json::Undefined
}

/// Boolean leaf.
pub fn bool(value: bool) -> Json {
    Json::Bool(value)
}

/// Double leaf.
pub fn num(value: f64) -> Json {
    Json::Num(value)
}

/// Decimal leaf from its string form.
pub fn dec(value: impl Into<String>) -> Json {
    Json::Dec(value.into())
}

/// String leaf.
pub fn str(value: impl Into<String>) -> Json {
    Json::Str(value.into())
}

/// Binary leaf from a base64 payload.
pub fn binary(b64: impl Into<String>) -> Json {
    Json::Binary(b64.into())
}

/// Regex leaf. Empty flags are kept as given; canonicalization collapses
/// them to `None`.
pub fn regex(pattern: impl Into<String>, flags: Option<&str>) -> Json {
    Json::Regex {
        pattern: pattern.into(),
        flags: flags.map(str::to_string),
    }
}

/// Date leaf from an ISO-8601 string.
pub fn date(iso: impl Into<String>) -> Json {
    Json::Date(iso.into())
}

/// Ordered sequence.
pub fn arr(items: Vec<Json>) -> Json {
    Json::Arr(items)
}

/// Unordered collection.
pub fn set(items: Vec<Json>) -> Json {
    Json::Set(items)
}

/// Keyed entries (keys need not be unique).
pub fn obj(entries: Vec<(String, Json)>) -> Json {
    Json::Obj(entries)
}
