// Deserialize for NullableItem, for any self-describing serde format
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::core::types::{Blob, Number, NullableItem, NullableRecord, Scalar};

struct NullableItemVisitor;

impl<'de> Visitor<'de> for NullableItemVisitor {
    type Value = NullableItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar, sequence, mapping, or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<NullableItem, E> {
        Ok(NullableItem::Scalar(Scalar::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<NullableItem, E> {
        Ok(NullableItem::Scalar(Scalar::Number(Number::Int(v))))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<NullableItem, E> {
        let number = i64::try_from(v).map_or(Number::UInt(v), Number::Int);
        Ok(NullableItem::Scalar(Scalar::Number(number)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<NullableItem, E> {
        Ok(NullableItem::Scalar(Scalar::Number(Number::Float(v))))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<NullableItem, E> {
        Ok(NullableItem::Scalar(Scalar::Text(v.to_string())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<NullableItem, E> {
        Ok(NullableItem::Scalar(Scalar::Text(v)))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<NullableItem, E> {
        Ok(NullableItem::Scalar(Scalar::Binary(Blob::new(v.to_vec()))))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<NullableItem, E> {
        Ok(NullableItem::Scalar(Scalar::Binary(Blob::new(v))))
    }

    fn visit_none<E: de::Error>(self) -> Result<NullableItem, E> {
        Ok(NullableItem::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<NullableItem, E> {
        Ok(NullableItem::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<NullableItem, D::Error> {
        NullableItem::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<NullableItem, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(NullableItem::Sequence(items))
    }

    //a repeated key keeps its first position and its last value
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<NullableItem, A::Error> {
        let mut fields = NullableRecord::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, NullableItem>()? {
            fields.insert(key, value);
        }
        Ok(NullableItem::Mapping(fields))
    }
}

impl<'de> Deserialize<'de> for NullableItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NullableItemVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_nested_json_text() {
        let item: NullableItem = serde_json::from_str(r#"{"b":"test","a":1,"r":null,"e":[1,2.5,true]}"#).unwrap();
        let fields = item.as_mapping().unwrap();

        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a", "r", "e"]);
        assert_eq!(fields["a"], NullableItem::from(1));
        assert!(fields["r"].is_null());
        assert_eq!(
            fields["e"],
            NullableItem::sequence([NullableItem::from(1), NullableItem::from(2.5), NullableItem::from(true)])
        );
    }

    #[test]
    fn empty_sequence_and_null_roots() {
        let item: NullableItem = serde_json::from_str("[]").unwrap();
        assert_eq!(item, NullableItem::Sequence(vec![]));

        let item: NullableItem = serde_json::from_str("null").unwrap();
        assert!(item.is_null());
    }
}
