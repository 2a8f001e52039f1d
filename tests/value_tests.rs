//! Unit tests for the dynamic value universe.
//!
//! This module covers kind classification, the accessors and conversions on
//! `Value`, its equality semantics, and its JSON `Display` rendering.

use indexmap::IndexMap;
use polyseq::value::{Value, ValueKind};
use rstest::rstest;

// =============================================================================
// Kind classification
// =============================================================================

#[rstest]
#[case(Value::Nil, ValueKind::Nil, "nil")]
#[case(Value::from(true), ValueKind::Bool, "boolean")]
#[case(Value::from(2.5), ValueKind::Number, "number")]
#[case(Value::from("text"), ValueKind::Str, "string")]
#[case(Value::List(Vec::new()), ValueKind::List, "list")]
#[case(Value::Map(IndexMap::new()), ValueKind::Map, "mapping")]
fn test_kind_and_name(#[case] value: Value, #[case] kind: ValueKind, #[case] name: &str) {
    assert_eq!(value.kind(), kind);
    assert_eq!(value.kind().name(), name);
    assert_eq!(value.kind().to_string(), name);
}

#[rstest]
fn test_default_value_is_nil() {
    assert_eq!(Value::default(), Value::Nil);
    assert!(Value::default().is_nil());
}

// =============================================================================
// Accessors
// =============================================================================

#[rstest]
fn test_accessors_return_some_for_matching_kind() {
    assert_eq!(Value::from(false).as_bool(), Some(false));
    assert_eq!(Value::from(1.5).as_number(), Some(1.5));
    assert_eq!(Value::from("abc").as_str(), Some("abc"));

    let list = Value::List(vec![Value::Nil]);
    assert_eq!(list.as_list().map(<[Value]>::len), Some(1));

    let entries: IndexMap<String, Value> =
        std::iter::once((String::from("k"), Value::Nil)).collect();
    let map = Value::Map(entries);
    assert!(map.as_map().is_some_and(|inner| inner.contains_key("k")));
}

#[rstest]
fn test_accessors_return_none_for_other_kinds() {
    assert_eq!(Value::Nil.as_bool(), None);
    assert_eq!(Value::from("5").as_number(), None);
    assert_eq!(Value::from(5).as_str(), None);
    assert_eq!(Value::from(true).as_list(), None);
    assert_eq!(Value::from(1).as_map(), None);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_from_integer_widens_to_number() {
    assert_eq!(Value::from(7), Value::Number(7.0));
    assert_eq!(Value::from(-3), Value::Number(-3.0));
}

#[rstest]
fn test_collecting_values_builds_a_list() {
    let collected: Value = (1..=3).map(Value::from).collect();
    assert_eq!(
        collected,
        Value::List(vec![Value::from(1), Value::from(2), Value::from(3)])
    );
}

#[rstest]
fn test_collecting_pairs_builds_a_mapping_in_insertion_order() {
    let collected: Value = vec![
        (String::from("z"), Value::from(1)),
        (String::from("a"), Value::from(2)),
    ]
    .into_iter()
    .collect();

    let Some(entries) = collected.as_map() else {
        panic!("expected a mapping");
    };
    let keys: Vec<&String> = entries.keys().collect();
    assert_eq!(keys, vec!["z", "a"]);
}

// =============================================================================
// Equality semantics
// =============================================================================

#[rstest]
fn test_nan_is_not_equal_to_itself() {
    assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));

    let holder = Value::List(vec![Value::from(f64::NAN)]);
    assert_ne!(holder.clone(), holder);
}

#[rstest]
fn test_mapping_equality_ignores_insertion_order() {
    let forward: Value = vec![
        (String::from("a"), Value::from(1)),
        (String::from("b"), Value::from(2)),
    ]
    .into_iter()
    .collect();
    let backward: Value = vec![
        (String::from("b"), Value::from(2)),
        (String::from("a"), Value::from(1)),
    ]
    .into_iter()
    .collect();

    assert_eq!(forward, backward);
}

// =============================================================================
// Display
// =============================================================================

#[rstest]
#[case(Value::Nil, "null")]
#[case(Value::from(true), "true")]
#[case(Value::from(1), "1.0")]
#[case(Value::from("hi"), "\"hi\"")]
fn test_display_renders_scalars_as_json(#[case] value: Value, #[case] rendered: &str) {
    assert_eq!(value.to_string(), rendered);
}

#[rstest]
fn test_display_renders_nested_structures() {
    let inner: Value = vec![(String::from("ok"), Value::from(true))]
        .into_iter()
        .collect();
    let outer = Value::List(vec![Value::from(1), inner, Value::Nil]);

    assert_eq!(outer.to_string(), r#"[1.0,{"ok":true},null]"#);
}

#[rstest]
fn test_display_renders_mapping_in_insertion_order() {
    let value: Value = vec![
        (String::from("zebra"), Value::from(1)),
        (String::from("apple"), Value::from(2)),
    ]
    .into_iter()
    .collect();

    assert_eq!(value.to_string(), r#"{"zebra":1.0,"apple":2.0}"#);
}
