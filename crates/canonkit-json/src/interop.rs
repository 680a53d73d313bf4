//! `serde_json::Value` interop for the JSON-native subset.
//!
//! `from_value` is total: every parsed `serde_json::Value` maps into the
//! model. `to_value` covers only the JSON-native kinds; the extended kinds
//! (decimal, binary, regex, date, set, undefined) cross this boundary through
//! the EJSON encoding, not through plain `Value`.

use crate::value::Json;
use serde_json::Value;
use thiserror::Error;

/// Error converting a `Json` into a plain `serde_json::Value`.
#[derive(Debug, Error)]
pub enum ValueError {
    /// `serde_json::Number` cannot represent NaN or infinities.
    #[error("non-finite number {0} has no serde_json representation")]
    NonFiniteNumber(f64),
    /// The variant has no plain-JSON representation; use the EJSON encoding.
    #[error("variant '{0}' has no plain-JSON representation")]
    UnsupportedVariant(&'static str),
}

impl Json {
    /// Converts a parsed `serde_json::Value` into the model.
    ///
    /// Numbers become `Num` (large u64 values lose precision past 2^53, as
    /// they would in any double-based JSON host). Object entries are taken in
    /// map iteration order.
    pub fn from_value(value: &Value) -> Json {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => Json::Num(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Json::Str(s.clone()),
            Value::Array(items) => Json::Arr(items.iter().map(Json::from_value).collect()),
            Value::Object(map) => Json::Obj(
                map.iter()
                    .map(|(k, v)| (k.clone(), Json::from_value(v)))
                    .collect(),
            ),
        }
    }

    /// Converts the JSON-native subset of the model back into a `Value`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] for non-finite numbers and for the extended
    /// kinds that plain JSON cannot carry.
    pub fn to_value(&self) -> Result<Value, ValueError> {
        match self {
            Json::Null => Ok(Value::Null),
            Json::Bool(b) => Ok(Value::Bool(*b)),
            Json::Num(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .ok_or(ValueError::NonFiniteNumber(*n)),
            Json::Str(s) => Ok(Value::String(s.clone())),
            Json::Arr(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(item.to_value()?);
                }
                Ok(Value::Array(out))
            }
            Json::Obj(entries) => {
                let mut map = serde_json::Map::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key.clone(), value.to_value()?);
                }
                Ok(Value::Object(map))
            }
            other => Err(ValueError::UnsupportedVariant(other.kind())),
        }
    }
}
