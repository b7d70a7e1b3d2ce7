// serde_json values -> nullable trees
use serde_json::Value as JsonValue;

use crate::core::types::{Number, NullableItem, Scalar};

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            return Number::Int(i);
        }
        if let Some(u) = n.as_u64() {
            return Number::UInt(u);
        }
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

//object key order is kept (serde_json is built with preserve_order)
impl From<JsonValue> for NullableItem {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => NullableItem::Null,
            JsonValue::Bool(b) => NullableItem::Scalar(Scalar::Bool(b)),
            JsonValue::Number(n) => NullableItem::Scalar(Scalar::Number(Number::from(&n))),
            JsonValue::String(s) => NullableItem::Scalar(Scalar::Text(s)),
            JsonValue::Array(items) => {
                NullableItem::Sequence(items.into_iter().map(NullableItem::from).collect())
            }
            JsonValue::Object(fields) => NullableItem::Mapping(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, NullableItem::from(v)))
                    .collect(),
            ),
        }
    }
}
