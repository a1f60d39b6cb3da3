//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! JSON has no binary, undefined or non-finite number, so the conversion to
//! JSON is lossy: bytes become an array of numbers, undefined and non-finite
//! floats become `null`, and integers outside the `i64`/`u64` range become
//! floats.

use serde_json::Number;

use crate::{Map, Value};

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::from(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Nil | Value::Undefined => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Integer(i) => integer_to_json(i),
            Value::Float(f) => float_to_json(f),
            Value::Bytes(b) => {
                serde_json::Value::Array(b.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Str(s) => serde_json::Value::String(s),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

fn integer_to_json(i: i128) -> serde_json::Value {
    if let Ok(i) = i64::try_from(i) {
        serde_json::Value::from(i)
    } else if let Ok(u) = u64::try_from(i) {
        serde_json::Value::from(u)
    } else {
        float_to_json(i as f64)
    }
}

fn float_to_json(f: f64) -> serde_json::Value {
    Number::from_f64(f)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl Value {
    /// Converts to a JSON value without consuming `self`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_object_keeps_key_order() {
        let value = Value::from(json!({"z": 1, "a": [true, null, "x"], "m": -2.5}));
        let map = value.as_map().unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(map["z"], Value::Integer(1));
        assert_eq!(
            map["a"],
            Value::Array(vec![Value::Bool(true), Value::Nil, Value::from("x")])
        );
        assert_eq!(map["m"], Value::Float(-2.5));
    }

    #[test]
    fn from_json_large_unsigned() {
        assert_eq!(
            Value::from(json!(u64::MAX)),
            Value::Integer(u64::MAX as i128)
        );
        assert_eq!(
            Value::from(json!(i64::MIN)),
            Value::Integer(i64::MIN as i128)
        );
    }

    #[test]
    fn to_json_lossy_cases() {
        assert_eq!(Value::Undefined.to_json(), json!(null));
        assert_eq!(Value::Float(f64::NAN).to_json(), json!(null));
        assert_eq!(Value::Float(f64::INFINITY).to_json(), json!(null));
        assert_eq!(Value::bytes(vec![1u8, 2, 255]).to_json(), json!([1, 2, 255]));
        assert_eq!(Value::Integer(u64::MAX as i128).to_json(), json!(u64::MAX));
        assert_eq!(
            Value::Integer(u64::MAX as i128 + 1).to_json(),
            json!(18446744073709551616.0)
        );
    }

    #[test]
    fn json_roundtrip() {
        let doc = json!({"name": "test", "tags": ["a", "b"], "n": 3, "ok": false});
        assert_eq!(Value::from(doc.clone()).to_json(), doc);
    }
}
