//! Property-based tests for elision, ordering and numeric rendering.

use formdata_core::{
    FieldValue, FormEntry, NullableItem, NullableRecord, encode_nullable, encode_nullable_with, encode_optional,
    normalize_record,
};
use proptest::prelude::*;

/// Strategy for leaves, including the null marker.
fn arb_leaf() -> impl Strategy<Value = NullableItem> {
    prop_oneof![
        Just(NullableItem::Null),
        any::<bool>().prop_map(NullableItem::from),
        any::<i64>().prop_map(NullableItem::from),
        "[a-z0-9 ]{0,8}".prop_map(NullableItem::from),
    ]
}

/// Strategy for arbitrary nested trees. Field names never contain brackets.
fn arb_item() -> impl Strategy<Value = NullableItem> {
    arb_leaf().prop_recursive(
        4,  // depth
        64, // size
        6,  // items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(NullableItem::Sequence),
                prop::collection::vec(("[a-z]{1,4}", inner), 0..6).prop_map(NullableItem::mapping),
            ]
        },
    )
}

fn arb_record() -> impl Strategy<Value = NullableRecord> {
    prop::collection::vec(("[a-z]{1,4}", arb_item()), 0..8).prop_map(|fields| fields.into_iter().collect())
}

fn present_leaves(item: &NullableItem) -> usize {
    match item {
        NullableItem::Null => 0,
        NullableItem::Scalar(_) => 1,
        NullableItem::Sequence(items) => items.iter().map(present_leaves).sum(),
        NullableItem::Mapping(fields) => fields.values().map(present_leaves).sum(),
    }
}

proptest! {
    #[test]
    fn encoding_is_deterministic(data in arb_record()) {
        let first: Vec<(String, FieldValue)> = encode_nullable_with(Some(&data), Vec::new);
        let second: Vec<(String, FieldValue)> = encode_nullable_with(Some(&data), Vec::new);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_pair_per_present_leaf(data in arb_record()) {
        let expected: usize = data.values().map(present_leaves).sum();
        let form = encode_nullable(Some(&data));
        prop_assert_eq!(form.len(), expected);
    }

    #[test]
    fn nullable_and_optional_entry_points_agree(data in arb_record()) {
        let via_nullable = encode_nullable(Some(&data));
        let via_optional = encode_optional(Some(&normalize_record(&data)));
        prop_assert_eq!(via_nullable, via_optional);
    }

    #[test]
    fn nulled_field_leaves_no_trace(mut data in arb_record()) {
        prop_assume!(!data.is_empty());

        let key = data.keys().next().cloned().unwrap_or_default();
        data.insert(key.clone(), NullableItem::Null);

        let form = encode_nullable(Some(&data));
        let prefix = format!("{key}[");
        prop_assert!(form.iter().all(|(k, _)| k != key && !k.starts_with(&prefix)));
    }

    #[test]
    fn integer_arrays_repeat_in_order(values in prop::collection::vec(any::<i64>(), 0..12)) {
        let data = NullableItem::mapping([("n", NullableItem::sequence(values.clone()))]);
        let form = encode_nullable(data.as_mapping());

        let rendered: Vec<&str> = form.get_all("n[]").into_iter().filter_map(FormEntry::as_text).collect();
        let expected: Vec<String> = values.iter().map(i64::to_string).collect();
        prop_assert_eq!(rendered, expected);
    }
}
