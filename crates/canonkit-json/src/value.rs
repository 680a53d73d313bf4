//! The recursive `Json` sum type.

/// A JSON-like value extended with the non-native kinds the canonical
/// encoding must disambiguate (decimal, binary, regex, date, set, undefined).
///
/// `Obj` entries are an ordered sequence of `(key, value)` pairs; keys are
/// not required to be unique on input. `Set` is an unordered collection
/// represented as a sequence; canonicalization imposes its element order.
/// `Arr` order is significant and is never altered by any pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Json {
    /// JSON `null`.
    Null,
    /// An explicitly-undefined value (distinct from `Null`).
    Undefined,
    /// A boolean.
    Bool(bool),
    /// An IEEE-754 double. Non-finite values are representable here; they are
    /// rejected only at the `serde_json` boundary.
    Num(f64),
    /// An arbitrary-precision decimal, carried as its string form.
    Dec(String),
    /// A UTF-8 string.
    Str(String),
    /// Binary payload, carried as standard base64.
    Binary(String),
    /// A regular expression pattern with optional flags.
    Regex {
        /// The pattern source.
        pattern: String,
        /// Flag characters; `None` when no flags are set.
        flags: Option<String>,
    },
    /// An instant, carried as an ISO-8601 string.
    Date(String),
    /// An ordered sequence.
    Arr(Vec<Json>),
    /// An unordered collection.
    Set(Vec<Json>),
    /// An ordered sequence of key/value entries.
    Obj(Vec<(String, Json)>),
}

impl Json {
    /// Short kind name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Json::Null => "null",
            Json::Undefined => "undefined",
            Json::Bool(_) => "bool",
            Json::Num(_) => "num",
            Json::Dec(_) => "dec",
            Json::Str(_) => "str",
            Json::Binary(_) => "binary",
            Json::Regex { .. } => "regex",
            Json::Date(_) => "date",
            Json::Arr(_) => "arr",
            Json::Set(_) => "set",
            Json::Obj(_) => "obj",
        }
    }

    /// Returns true for the leaf kinds (no children).
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Json::Arr(_) | Json::Set(_) | Json::Obj(_))
    }
}
