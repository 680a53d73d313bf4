//! Pattern functor and bottom-up fold.
//!
//! [`JsonF`] is [`Json`](crate::Json) with every child position replaced by a
//! type parameter. Folds written against it are forced, by exhaustive
//! matching, to handle every variant; adding a variant to `Json` breaks every
//! algebra at compile time.

use crate::value::Json;

/// One layer of a `Json` tree with children already replaced by `A`.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonF<A> {
    /// JSON `null`.
    Null,
    /// Explicitly-undefined value.
    Undefined,
    /// Boolean leaf.
    Bool(bool),
    /// Double leaf.
    Num(f64),
    /// Decimal leaf (string form).
    Dec(String),
    /// String leaf.
    Str(String),
    /// Binary leaf (base64).
    Binary(String),
    /// Regex leaf.
    Regex {
        /// Pattern source.
        pattern: String,
        /// Optional flag characters.
        flags: Option<String>,
    },
    /// Date leaf (ISO-8601).
    Date(String),
    /// Ordered sequence of already-folded children.
    Arr(Vec<A>),
    /// Unordered collection of already-folded children.
    Set(Vec<A>),
    /// Keyed entries with already-folded values.
    Obj(Vec<(String, A)>),
}

/// Bottom-up fold: children are folded first, then `alg` is applied to the
/// resulting one-layer [`JsonF`] node.
///
/// Every canonicalization and encoding pass in the workspace is a `cata`
/// algebra; none of them recurse by hand.
pub fn cata<A, F>(json: &Json, alg: &mut F) -> A
where
    F: FnMut(JsonF<A>) -> A,
{
    let node = match json {
        Json::Null => JsonF::Null,
        Json::Undefined => JsonF::Undefined,
        Json::Bool(b) => JsonF::Bool(*b),
        Json::Num(n) => JsonF::Num(*n),
        Json::Dec(s) => JsonF::Dec(s.clone()),
        Json::Str(s) => JsonF::Str(s.clone()),
        Json::Binary(b) => JsonF::Binary(b.clone()),
        Json::Regex { pattern, flags } => JsonF::Regex {
            pattern: pattern.clone(),
            flags: flags.clone(),
        },
        Json::Date(d) => JsonF::Date(d.clone()),
        Json::Arr(items) => {
            let mut folded = Vec::with_capacity(items.len());
            for item in items {
                folded.push(cata(item, alg));
            }
            JsonF::Arr(folded)
        }
        Json::Set(items) => {
            let mut folded = Vec::with_capacity(items.len());
            for item in items {
                folded.push(cata(item, alg));
            }
            JsonF::Set(folded)
        }
        Json::Obj(entries) => {
            let mut folded = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                folded.push((key.clone(), cata(value, alg)));
            }
            JsonF::Obj(folded)
        }
    };
    alg(node)
}
