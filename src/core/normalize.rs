// null markers -> explicit optional wrappers
use crate::core::types::{Item, ItemRecord, NullableItem, NullableRecord, OptionalItem};

/// Rewrap a nullable tree so every absence is an explicit `None`.
///
/// The shape of the tree is unchanged: `Null` becomes `None`, everything else
/// becomes `Some`, and sequences/mappings are rebuilt element by element.
/// Scalars and blobs are leaves and are carried over as-is.
pub fn normalize(item: &NullableItem) -> OptionalItem {
    match item {
        NullableItem::Null => None,
        NullableItem::Scalar(scalar) => Some(Item::Scalar(scalar.clone())),
        NullableItem::Sequence(items) => Some(Item::Sequence(normalize_sequence(items))),
        NullableItem::Mapping(fields) => Some(Item::Mapping(normalize_record(fields))),
    }
}

pub fn normalize_sequence(items: &[NullableItem]) -> Vec<OptionalItem> {
    items.iter().map(normalize).collect()
}

//keys are kept even when their value is null, flattening decides what to drop
pub fn normalize_record(fields: &NullableRecord) -> ItemRecord {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), normalize(value)))
        .collect()
}
