//! Conversions to and from `serde_json::Value`.

use crate::{VArray, VNumber, VObject, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Value::Number(VNumber::from_u64(u))
                } else if let Some(i) = n.as_i64() {
                    Value::Number(VNumber::from_i64(i))
                } else {
                    n.as_f64().map_or(Value::Null, Value::from)
                }
            }
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect::<VArray>())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<VObject>(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => {
                if n.is_integer() {
                    match (n.to_u64(), n.to_i64()) {
                        (Some(u), _) => serde_json::Value::from(u),
                        (None, Some(i)) => serde_json::Value::from(i),
                        (None, None) => serde_json::Value::Null,
                    }
                } else {
                    serde_json::Number::from_f64(n.to_f64_lossy())
                        .map_or(serde_json::Value::Null, serde_json::Value::Number)
                }
            }
            Value::String(s) => serde_json::Value::String(s.as_str().to_owned()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(obj) => serde_json::Value::Object(
                obj.iter()
                    .map(|(k, v)| (k.to_owned(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn round_trips_through_serde_json() {
        let json = serde_json::json!({
            "name": "widget",
            "count": 3,
            "delta": -2,
            "ratio": 0.25,
            "tags": ["a", null, true],
            "nested": { "empty": {} }
        });
        let v = Value::from(json.clone());
        assert_eq!(
            v,
            value!({
                "name": "widget",
                "count": 3,
                "delta": -2,
                "ratio": 0.25,
                "tags": ["a", null, true],
                "nested": { "empty": {} }
            })
        );
        assert_eq!(serde_json::Value::from(&v), json);
    }
}
