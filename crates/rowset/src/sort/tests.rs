use crate::{
    error::SortError,
    key::RowKey,
    order::{OrderSpec, SortOrder},
    record,
    record::Record,
    rows::{Reindex, Rows},
    sort::{by_field, by_fields, by_key},
    value::Value,
};
use proptest::prelude::*;

// ---- helpers -----------------------------------------------------------

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn mapping(name: &str, weight: i64) -> Value {
    Value::from_map(vec![
        ("name", v_txt(name)),
        ("weight", Value::Int(weight)),
    ])
}

fn keys_of<T>(rows: &Rows<T>) -> Vec<RowKey> {
    rows.keys().cloned().collect()
}

// ---- by_key ------------------------------------------------------------

#[test]
fn sorts_mappings_by_the_named_key() {
    let rows = Rows::from_values([mapping("c", 3), mapping("a", 1), mapping("b", 2)]);

    let sorted = by_key(&rows, "name", SortOrder::Asc, Reindex::Preserve);

    let names: Vec<&Value> = sorted.values().map(|row| row.get("name").unwrap()).collect();
    assert_eq!(names, vec![&v_txt("a"), &v_txt("b"), &v_txt("c")]);
    assert_eq!(
        keys_of(&sorted),
        vec![RowKey::Index(1), RowKey::Index(2), RowKey::Index(0)]
    );
}

#[test]
fn sorts_scalars_by_their_own_value() {
    let rows = Rows::from_values([Value::Int(30), Value::Int(10), Value::Int(20)]);

    let sorted = by_key(&rows, "ignored", SortOrder::Asc, Reindex::Renumber);

    let values: Vec<&Value> = sorted.values().collect();
    assert_eq!(values, vec![&Value::Int(10), &Value::Int(20), &Value::Int(30)]);
    assert_eq!(
        keys_of(&sorted),
        vec![RowKey::Index(0), RowKey::Index(1), RowKey::Index(2)]
    );
}

#[test]
fn mixed_shapes_sort_against_each_other() {
    let rows = Rows::from_values([mapping("b", 2), v_txt("a"), v_txt("c")]);

    let sorted = by_key(&rows, "name", SortOrder::Asc, Reindex::Renumber);

    assert_eq!(sorted.len(), 3);
    assert_eq!(sorted.values().next(), Some(&v_txt("a")));
}

#[test]
fn mappings_without_the_key_are_dropped_from_the_result() {
    let rows = Rows::from_values([
        mapping("b", 2),
        Value::from_map(vec![("other", 1i64)]),
        mapping("a", 1),
    ]);

    let sorted = by_key(&rows, "name", SortOrder::Asc, Reindex::Preserve);

    assert_eq!(sorted.len(), 2);
    assert_eq!(keys_of(&sorted), vec![RowKey::Index(2), RowKey::Index(0)]);
}

#[test]
fn descending_reverses_the_order_but_not_tie_order() {
    let rows = Rows::from_values([mapping("a", 1), mapping("b", 2), mapping("a", 3)]);

    let sorted = by_key(&rows, "name", SortOrder::Desc, Reindex::Preserve);

    // "b" first, then the two "a" ties in original relative order
    assert_eq!(
        keys_of(&sorted),
        vec![RowKey::Index(1), RowKey::Index(0), RowKey::Index(2)]
    );
}

#[test]
fn empty_input_yields_empty_output() {
    let rows: Rows<Value> = Rows::new();

    assert!(by_key(&rows, "name", SortOrder::Asc, Reindex::Preserve).is_empty());
}

#[test]
fn named_keys_survive_preserve_and_vanish_under_renumber() {
    let mut rows = Rows::new();
    rows.push("second", mapping("b", 2));
    rows.push("first", mapping("a", 1));

    let preserved = by_key(&rows, "name", SortOrder::Asc, Reindex::Preserve);
    assert_eq!(
        keys_of(&preserved),
        vec![RowKey::from("first"), RowKey::from("second")]
    );

    let renumbered = by_key(&rows, "name", SortOrder::Asc, Reindex::Renumber);
    assert_eq!(
        keys_of(&renumbered),
        vec![RowKey::Index(0), RowKey::Index(1)]
    );
}

// ---- by_field ----------------------------------------------------------

#[test]
fn falsy_field_values_are_excluded_from_the_sortable_set() {
    let rows = Rows::from_values([
        record! { "size" => 2i64 },
        record! { "size" => 0i64 },
        record! { "size" => "" },
        record! { "size" => 1i64 },
        record! { "other" => 9i64 },
    ]);

    let sorted = by_field(&rows, "size", SortOrder::Asc, Reindex::Preserve, 0);

    assert_eq!(keys_of(&sorted), vec![RowKey::Index(3), RowKey::Index(0)]);
}

#[test]
fn limit_truncates_after_sorting() {
    let rows = Rows::from_values([
        record! { "size" => 3i64 },
        record! { "size" => 1i64 },
        record! { "size" => 2i64 },
    ]);

    let top_two = by_field(&rows, "size", SortOrder::Asc, Reindex::Renumber, 2);
    assert_eq!(top_two.len(), 2);
    assert_eq!(
        top_two.values().map(|r| r.get("size").unwrap()).collect::<Vec<_>>(),
        vec![&Value::Int(1), &Value::Int(2)]
    );

    // limit past the sortable subset is harmless
    let all = by_field(&rows, "size", SortOrder::Asc, Reindex::Renumber, 50);
    assert_eq!(all.len(), 3);
}

#[test]
fn order_literals_parse_to_the_same_two_members() {
    let rows = Rows::from_values([record! { "size" => 2i64 }, record! { "size" => 1i64 }]);

    let via_literal = by_field(&rows, "size", "desc".parse().unwrap(), Reindex::Renumber, 0);
    let via_token = by_field(&rows, "size", SortOrder::Desc, Reindex::Renumber, 0);

    assert_eq!(via_literal, via_token);
}

// ---- by_fields ---------------------------------------------------------

#[test]
fn multi_key_sort_is_lexicographic_not_sequential() {
    let mut rows = Rows::from_values([
        record! { "a" => "b", "b" => 2i64 },
        record! { "a" => "a", "b" => 1i64 },
        record! { "a" => "a", "b" => 0i64 },
    ]);

    let spec = OrderSpec::new()
        .field("a", SortOrder::Asc)
        .field("b", SortOrder::Asc);
    by_fields(&mut rows, &spec).unwrap();

    // rows with a="a" (b=0 then b=1) before a="b"
    assert_eq!(
        keys_of(&rows),
        vec![RowKey::Index(2), RowKey::Index(1), RowKey::Index(0)]
    );
}

#[test]
fn comparison_folds_case_but_output_preserves_it() {
    let mut rows = Rows::from_values([
        record! { "city" => "berlin" },
        record! { "city" => "AMSTERDAM" },
    ]);

    by_fields(&mut rows, &OrderSpec::new().field("city", SortOrder::Asc)).unwrap();

    let cities: Vec<&Value> = rows.values().map(|r| r.get("city").unwrap()).collect();
    assert_eq!(cities, vec![&v_txt("AMSTERDAM"), &v_txt("berlin")]);
}

#[test]
fn secondary_field_may_reverse_independently() {
    let mut rows = Rows::from_values([
        record! { "group" => "x", "rank" => 1i64 },
        record! { "group" => "x", "rank" => 3i64 },
        record! { "group" => "w", "rank" => 2i64 },
    ]);

    let spec = OrderSpec::new()
        .field("group", SortOrder::Asc)
        .field("rank", SortOrder::Desc);
    by_fields(&mut rows, &spec).unwrap();

    assert_eq!(
        keys_of(&rows),
        vec![RowKey::Index(2), RowKey::Index(1), RowKey::Index(0)]
    );
}

#[test]
fn resorting_by_fields_is_identity() {
    let mut rows = Rows::from_values([
        record! { "a" => "b" },
        record! { "a" => "a" },
        record! { "a" => "c" },
    ]);

    let spec = OrderSpec::new().field("a", SortOrder::Asc);
    by_fields(&mut rows, &spec).unwrap();
    let once = rows.clone();
    by_fields(&mut rows, &spec).unwrap();

    assert_eq!(rows, once);
}

#[test]
fn missing_field_fails_and_leaves_the_order_untouched() {
    let mut rows = Rows::from_values([
        record! { "a" => "z", "b" => 1i64 },
        record! { "a" => "y" },
    ]);
    let original = rows.clone();

    let spec = OrderSpec::new()
        .field("a", SortOrder::Asc)
        .field("b", SortOrder::Asc);
    let err = by_fields(&mut rows, &spec).unwrap_err();

    assert_eq!(
        err,
        SortError::MissingField {
            key: RowKey::Index(1),
            field: "b".to_string(),
        }
    );
    assert_eq!(rows, original);
}

// ---- properties --------------------------------------------------------

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::Uint),
        "[a-z0-9]{0,6}".prop_map(Value::Text),
    ]
}

fn arb_weight_record() -> impl Strategy<Value = Record> {
    (1u64..50).prop_map(|weight| record! { "weight" => weight })
}

proptest! {
    #[test]
    fn resorting_a_sorted_collection_is_identity(
        values in prop::collection::vec(arb_scalar(), 0..24),
    ) {
        let rows = Rows::from_values(values);
        let sorted = by_key(&rows, "x", SortOrder::Asc, Reindex::Preserve);
        let resorted = by_key(&sorted, "x", SortOrder::Asc, Reindex::Preserve);

        prop_assert_eq!(&sorted, &resorted);
    }

    #[test]
    fn renumbered_keys_are_exactly_zero_to_k(
        values in prop::collection::vec(arb_scalar(), 0..24),
    ) {
        let rows = Rows::from_values(values);
        let sorted = by_key(&rows, "x", SortOrder::Desc, Reindex::Renumber);

        for (expected, (key, _)) in sorted.iter().enumerate() {
            prop_assert_eq!(key, &RowKey::Index(expected));
        }
    }

    #[test]
    fn limited_result_is_a_prefix_of_the_unlimited_order(
        records in prop::collection::vec(arb_weight_record(), 0..24),
        limit in 1usize..30,
    ) {
        let rows = Rows::from_values(records);
        let unlimited = by_field(&rows, "weight", SortOrder::Asc, Reindex::Preserve, 0);
        let limited = by_field(&rows, "weight", SortOrder::Asc, Reindex::Preserve, limit);

        prop_assert_eq!(limited.len(), limit.min(unlimited.len()));
        prop_assert_eq!(&limited[..], &unlimited[..limited.len()]);
    }

    #[test]
    fn ties_preserve_original_relative_order(count in 0usize..24) {
        let rows = Rows::from_values(
            (0..count).map(|position| record! { "name" => "same", "position" => position as u64 }),
        );
        let sorted = by_field(&rows, "name", SortOrder::Asc, Reindex::Preserve, 0);

        prop_assert_eq!(&sorted, &rows);
    }
}
