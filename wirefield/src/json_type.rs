//! JSON value kinds as reported to parse exception handlers

use serde::Serialize;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

/// The kind of JSON value found where a field expected something else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// `null`
    Null,
    /// `true` or `false`
    Bool,
    /// Any JSON number
    Number,
    /// A JSON string
    String,
    /// A JSON array
    Array,
    /// A JSON object
    Object,
}

impl JsonType {
    /// Classify a JSON value
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl From<JsonType> for Value {
    fn from(json_type: JsonType) -> Self { Self::String(json_type.as_ref().to_string()) }
}
