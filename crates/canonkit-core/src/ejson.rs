//! EJSON plain tree, compact serializer, and decoder.
//!
//! EJSON disambiguates the non-native kinds with sigil-tagged objects:
//!
//! | Kind        | Encoding                                   |
//! |-------------|--------------------------------------------|
//! | `Undefined` | `{"$undefined":true}`                      |
//! | `Dec`       | `{"$decimal":"..."}`                       |
//! | `Binary`    | `{"$binary":"..."}`                        |
//! | `Regex`     | `{"$regex":"...","$flags":"..."}` (flags omitted when `None`) |
//! | `Date`      | `{"$date":"..."}`                          |
//! | `Set`       | `{"$set":[...]}`                           |
//!
//! The tree type deliberately is not `serde_json::Value`: its objects
//! preserve entry order and duplicate keys, both of which the canonical key
//! serializer must see exactly as the canonicalization fold produced them.

use canonkit_json::{cata, Json, JsonF};
use std::fmt::Write as _;
use thiserror::Error;

use crate::canonicalize::{canonicalize, canonicalize_with};
use crate::policy::Policy;

/// A plain JSON tree: only the six native kinds, order- and
/// duplicate-preserving objects.
#[derive(Debug, Clone, PartialEq)]
pub enum EJson {
    /// `null`.
    Null,
    /// Boolean.
    Bool(bool),
    /// Double.
    Num(f64),
    /// String.
    Str(String),
    /// Array.
    Arr(Vec<EJson>),
    /// Ordered key/value entries.
    Obj(Vec<(String, EJson)>),
}

/// Error decoding an EJSON tree back into the model.
#[derive(Debug, Error)]
pub enum EJsonError {
    /// An object key starting with `$` that is not a recognized sigil.
    #[error("unknown sigil key '{0}'")]
    UnknownSigil(String),
    /// A recognized sigil object with the wrong shape.
    #[error("malformed '{sigil}' encoding: {reason}")]
    MalformedSigil {
        /// The sigil whose encoding was malformed.
        sigil: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

fn sigil(key: &'static str, value: EJson) -> EJson {
    EJson::Obj(vec![(key.to_string(), value)])
}

/// Encodes a `Json` value as an EJSON plain tree.
///
/// A pure structural fold, independent of canonicalization; callers that
/// need canonical trees use [`to_ejson_canonical`].
pub fn to_ejson(json: &Json) -> EJson {
    cata(json, &mut |node: JsonF<EJson>| match node {
        JsonF::Null => EJson::Null,
        JsonF::Undefined => sigil("$undefined", EJson::Bool(true)),
        JsonF::Bool(b) => EJson::Bool(b),
        JsonF::Num(n) => EJson::Num(n),
        JsonF::Dec(s) => sigil("$decimal", EJson::Str(s)),
        JsonF::Str(s) => EJson::Str(s),
        JsonF::Binary(b) => sigil("$binary", EJson::Str(b)),
        JsonF::Regex { pattern, flags } => {
            let mut entries = vec![("$regex".to_string(), EJson::Str(pattern))];
            if let Some(flags) = flags {
                entries.push(("$flags".to_string(), EJson::Str(flags)));
            }
            EJson::Obj(entries)
        }
        JsonF::Date(d) => sigil("$date", EJson::Str(d)),
        JsonF::Arr(items) => EJson::Arr(items),
        JsonF::Set(items) => sigil("$set", EJson::Arr(items)),
        JsonF::Obj(entries) => EJson::Obj(entries),
    })
}

/// Canonicalizes with the default policy, then encodes.
pub fn to_ejson_canonical(json: &Json) -> EJson {
    to_ejson(&canonicalize(json))
}

/// Canonicalizes with the given policy, then encodes.
pub fn to_ejson_canonical_with(policy: &Policy, json: &Json) -> EJson {
    to_ejson(&canonicalize_with(policy, json))
}

/// Decodes an EJSON tree back into the model.
///
/// Plain objects whose keys do not start with `$` decode structurally;
/// sigil objects decode to the corresponding extended kind.
///
/// # Errors
///
/// Returns [`EJsonError`] for unrecognized `$`-keys or malformed sigil
/// shapes.
pub fn from_ejson(tree: &EJson) -> Result<Json, EJsonError> {
    match tree {
        EJson::Null => Ok(Json::Null),
        EJson::Bool(b) => Ok(Json::Bool(*b)),
        EJson::Num(n) => Ok(Json::Num(*n)),
        EJson::Str(s) => Ok(Json::Str(s.clone())),
        EJson::Arr(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(from_ejson(item)?);
            }
            Ok(Json::Arr(out))
        }
        EJson::Obj(entries) => from_ejson_obj(entries),
    }
}

fn from_ejson_obj(entries: &[(String, EJson)]) -> Result<Json, EJsonError> {
    match entries {
        [(k, EJson::Bool(true))] if k == "$undefined" => Ok(Json::Undefined),
        [(k, _)] if k == "$undefined" => Err(EJsonError::MalformedSigil {
            sigil: "$undefined",
            reason: "value must be literal true".into(),
        }),
        [(k, EJson::Str(s))] if k == "$decimal" => Ok(Json::Dec(s.clone())),
        [(k, EJson::Str(s))] if k == "$binary" => Ok(Json::Binary(s.clone())),
        [(k, EJson::Str(s))] if k == "$date" => Ok(Json::Date(s.clone())),
        [(k, EJson::Str(p))] if k == "$regex" => Ok(Json::Regex {
            pattern: p.clone(),
            flags: None,
        }),
        [(k, EJson::Str(p)), (f, EJson::Str(flags))] if k == "$regex" && f == "$flags" => {
            Ok(Json::Regex {
                pattern: p.clone(),
                flags: Some(flags.clone()),
            })
        }
        [(k, EJson::Arr(items))] if k == "$set" => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(from_ejson(item)?);
            }
            Ok(Json::Set(out))
        }
        [(k, _)] if matches!(k.as_str(), "$decimal" | "$binary" | "$date" | "$regex" | "$set") => {
            Err(EJsonError::MalformedSigil {
                sigil: match k.as_str() {
                    "$decimal" => "$decimal",
                    "$binary" => "$binary",
                    "$date" => "$date",
                    "$regex" => "$regex",
                    _ => "$set",
                },
                reason: "unexpected value shape".into(),
            })
        }
        _ => {
            if let Some((k, _)) = entries.iter().find(|(k, _)| k.starts_with('$')) {
                return Err(EJsonError::UnknownSigil(k.clone()));
            }
            let mut out = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                out.push((key.clone(), from_ejson(value)?));
            }
            Ok(Json::Obj(out))
        }
    }
}

impl EJson {
    /// Serializes the tree as a compact, deterministic string: no
    /// whitespace, keys in presented order, RFC 8259 escaping, non-ASCII
    /// emitted verbatim as UTF-8.
    pub fn to_compact_string(&self) -> String {
        let mut out = String::new();
        self.write_compact(&mut out);
        out
    }

    fn write_compact(&self, out: &mut String) {
        match self {
            EJson::Null => out.push_str("null"),
            EJson::Bool(true) => out.push_str("true"),
            EJson::Bool(false) => out.push_str("false"),
            EJson::Num(n) => write_num(out, *n),
            EJson::Str(s) => write_escaped(out, s),
            EJson::Arr(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_compact(out);
                }
                out.push(']');
            }
            EJson::Obj(entries) => {
                out.push('{');
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    write_escaped(out, key);
                    out.push(':');
                    value.write_compact(out);
                }
                out.push('}');
            }
        }
    }
}

/// Non-finite numbers serialize as `null`, matching the JavaScript
/// `JSON.stringify` behavior the canonical key format is pinned to.
/// Negative zero collapses to `0` for the same reason.
fn write_num(out: &mut String, n: f64) {
    if !n.is_finite() {
        out.push_str("null");
    } else if n == 0.0 {
        out.push('0');
    } else {
        // Rust's shortest-roundtrip Display: integral doubles print without
        // a fractional part.
        let _ = write!(out, "{}", n);
    }
}

fn write_escaped(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use canonkit_json::build;

    #[test]
    fn compact_string_matches_serde_json_for_plain_trees() {
        let value = serde_json::json!({"a": [1, true, null, "x\n"], "b": 0.5});
        let tree = to_ejson(&Json::from_value(&value));
        assert_eq!(
            tree.to_compact_string(),
            serde_json::to_string(&value).unwrap()
        );
    }

    #[test]
    fn non_finite_numbers_print_null() {
        assert_eq!(EJson::Num(f64::NAN).to_compact_string(), "null");
        assert_eq!(EJson::Num(f64::INFINITY).to_compact_string(), "null");
        assert_eq!(EJson::Num(-0.0).to_compact_string(), "0");
    }

    #[test]
    fn control_characters_escape_as_u00() {
        assert_eq!(
            EJson::Str("\u{01}".into()).to_compact_string(),
            "\"\\u0001\""
        );
        assert_eq!(
            EJson::Str("a\"b\\c".into()).to_compact_string(),
            r#""a\"b\\c""#
        );
    }

    #[test]
    fn encode_decode_round_trips_extended_kinds() {
        let value = build::obj(vec![
            ("u".into(), build::undefined()),
            ("d".into(), build::dec("1.50")),
            ("b".into(), build::binary("Zm9v")),
            ("r".into(), build::regex("a+", Some("gi"))),
            ("t".into(), build::date("2024-01-01T00:00:00Z")),
            ("s".into(), build::set(vec![build::num(1.0)])),
        ]);
        let decoded = from_ejson(&to_ejson(&value)).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn unknown_sigil_is_rejected() {
        let tree = EJson::Obj(vec![("$bogus".into(), EJson::Null)]);
        assert!(matches!(
            from_ejson(&tree),
            Err(EJsonError::UnknownSigil(_))
        ));
    }

    #[test]
    fn malformed_sigil_is_rejected() {
        let tree = EJson::Obj(vec![("$decimal".into(), EJson::Num(1.0))]);
        assert!(matches!(
            from_ejson(&tree),
            Err(EJsonError::MalformedSigil { sigil: "$decimal", .. })
        ));
    }
}
