//! Canonical serialization for [`Value`].
//!
//! The canonical form mirrors `JSON.stringify`: undefined values and functions
//! are dropped from mappings and written as `null` inside sequences, numbers
//! that are not finite become `null`, and native objects become `{}`. The
//! emptiness predicates in [`crate::assert`] compare against this form.

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};
use serde_json::Value as JsonValue;

use super::{Map, Value};

/// Largest integer a double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Returns true if the value has no canonical form inside a mapping.
fn is_skipped(value: &Value) -> bool {
    matches!(value, Value::Undefined | Value::Function(_))
}

fn number_to_json(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        JsonValue::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
    }
}

impl Value {
    /// Converts to the canonical JSON form.
    ///
    /// Returns `None` for values with no JSON representation at the top level
    /// (undefined and functions).
    ///
    /// ```
    /// # use dark_fns::{Function, Value};
    /// let value = Value::from(vec![Value::Undefined, Value::from(1)]);
    /// assert_eq!(value.to_json(), Some(serde_json::json!([null, 1])));
    ///
    /// assert_eq!(Value::Undefined.to_json(), None);
    /// assert_eq!(Value::from(Function::from_fn(|_| Value::Null)).to_json(), None);
    /// ```
    pub fn to_json(&self) -> Option<JsonValue> {
        match self {
            Value::Undefined | Value::Function(_) => None,
            Value::Null => Some(JsonValue::Null),
            Value::Bool(b) => Some(JsonValue::Bool(*b)),
            Value::Number(n) => Some(number_to_json(*n)),
            Value::String(s) => Some(JsonValue::String(s.clone())),
            Value::Array(items) => Some(JsonValue::Array(
                items
                    .iter()
                    .map(|item| item.to_json().unwrap_or(JsonValue::Null))
                    .collect(),
            )),
            Value::Object(map) => Some(JsonValue::Object(
                map.iter()
                    .filter_map(|(key, value)| value.to_json().map(|json| (key.clone(), json)))
                    .collect(),
            )),
            Value::Native(_) => Some(JsonValue::Object(serde_json::Map::new())),
        }
    }

    /// Converts to a canonical JSON string, or `None` when [`Value::to_json`]
    /// has no representation.
    pub fn to_json_string(&self) -> Option<String> {
        self.to_json().map(|json| json.to_string())
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // No top-level representation; null is the closest serde has
            Value::Undefined | Value::Function(_) | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
                    serializer.serialize_i64(*n as i64)
                } else if n.is_finite() {
                    serializer.serialize_f64(*n)
                } else {
                    serializer.serialize_unit()
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(None)?;
                for (key, value) in map.iter().filter(|(_, value)| !is_skipped(value)) {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Value::Native(_) => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonValue::deserialize(deserializer).map(Value::from)
    }
}
