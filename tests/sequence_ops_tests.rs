//! Unit tests for the polymorphic sequence operations.
//!
//! This module exercises `drop_first`, `take`, `drop_while`, `take_while`,
//! `each`, and `filter` across all three representations, the clamping and
//! empty-result edge cases, and the refusal behavior on unsupported input.

use polyseq::predicate;
use polyseq::seq::{Element, Sequence, UnsupportedError};
use polyseq::value::{Value, ValueKind};
use rstest::rstest;

fn numbers(range: impl IntoIterator<Item = i32>) -> Sequence {
    range.into_iter().map(Value::from).collect()
}

fn mapping(entries: &[(&str, i32)]) -> Sequence {
    entries
        .iter()
        .map(|&(key, value)| (String::from(key), Value::from(value)))
        .collect()
}

fn item_below(limit: f64) -> impl FnMut(Element<'_>) -> bool {
    move |element| matches!(element, Element::Item { value, .. } if value.as_number() < Some(limit))
}

fn digit_character(element: Element<'_>) -> bool {
    matches!(element, Element::Character { value, .. } if predicate::is_digit(value))
}

// =============================================================================
// drop_first
// =============================================================================

#[rstest]
fn test_drop_first_list_removes_prefix() {
    let result = numbers(1..=5).drop_first(2).unwrap();
    assert_eq!(result, numbers(3..=5));
}

#[rstest]
#[case(0, 5)]
#[case(3, 2)]
#[case(5, 0)] // Exactly the length
#[case(9, 0)] // Past the end clamps to empty
fn test_drop_first_list_clamps(#[case] count: usize, #[case] remaining: usize) {
    let result = numbers(1..=5).drop_first(count).unwrap();
    assert_eq!(result.len(), remaining);
    assert!(matches!(result, Sequence::List(_)));
}

#[rstest]
fn test_drop_first_zero_returns_equal_sequence() {
    let original = numbers(1..=4);
    assert_eq!(original.drop_first(0).unwrap(), original);
}

#[rstest]
fn test_drop_first_chars_counts_characters_not_bytes() {
    let text = Sequence::from("héllo");
    assert_eq!(text.drop_first(2).unwrap(), Sequence::from("llo"));

    let wide = Sequence::from("日本語abc");
    assert_eq!(wide.drop_first(3).unwrap(), Sequence::from("abc"));
}

#[rstest]
fn test_drop_first_chars_past_end_is_empty() {
    let result = Sequence::from("ab").drop_first(10).unwrap();
    assert_eq!(result, Sequence::from(""));
}

#[rstest]
fn test_drop_first_does_not_mutate_input() {
    let original = numbers(1..=3);
    let _ = original.drop_first(2).unwrap();
    assert_eq!(original, numbers(1..=3));
}

#[rstest]
fn test_drop_first_mapping_is_refused() {
    let error = mapping(&[("a", 1)]).drop_first(1).unwrap_err();
    assert_eq!(
        error,
        UnsupportedError {
            operation: "drop_first",
            kind: ValueKind::Map,
        }
    );
}

#[rstest]
#[case(Value::Nil, ValueKind::Nil)]
#[case(Value::from(true), ValueKind::Bool)]
#[case(Value::from(4), ValueKind::Number)]
fn test_drop_first_unsupported_reports_kind(#[case] input: Value, #[case] kind: ValueKind) {
    let error = Sequence::from(input).drop_first(1).unwrap_err();
    assert_eq!(error.operation, "drop_first");
    assert_eq!(error.kind, kind);
}

// =============================================================================
// take
// =============================================================================

#[rstest]
fn test_take_list_keeps_prefix() {
    let result = numbers(1..=5).take(3).unwrap();
    assert_eq!(result, numbers(1..=3));
}

#[rstest]
#[case(0, 0)]
#[case(2, 2)]
#[case(5, 5)] // Exactly the length
#[case(9, 5)] // Past the end clamps to the whole sequence
fn test_take_list_clamps(#[case] count: usize, #[case] kept: usize) {
    let result = numbers(1..=5).take(count).unwrap();
    assert_eq!(result.len(), kept);
    assert!(matches!(result, Sequence::List(_)));
}

#[rstest]
fn test_take_zero_is_empty_in_same_representation() {
    assert_eq!(numbers(1..=3).take(0).unwrap(), Sequence::List(Vec::new()));
    assert_eq!(Sequence::from("abc").take(0).unwrap(), Sequence::from(""));
}

#[rstest]
fn test_take_chars_counts_characters_not_bytes() {
    let text = Sequence::from("日本語abc");
    assert_eq!(text.take(2).unwrap(), Sequence::from("日本"));
}

#[rstest]
fn test_take_past_end_returns_whole_sequence() {
    let text = Sequence::from("abc");
    assert_eq!(text.take(100).unwrap(), text);
}

#[rstest]
fn test_take_then_drop_reassembles() {
    let original = numbers(1..=6);
    let taken = original.take(2).unwrap();
    let dropped = original.drop_first(2).unwrap();
    assert_eq!(Sequence::concat([&taken, &dropped]).unwrap(), original);
}

#[rstest]
fn test_take_mapping_is_refused() {
    let error = mapping(&[("a", 1)]).take(1).unwrap_err();
    assert_eq!(error.operation, "take");
    assert_eq!(error.kind, ValueKind::Map);
}

// =============================================================================
// drop_while
// =============================================================================

#[rstest]
fn test_drop_while_list_stops_at_first_rejection() {
    let sequence = numbers([1, 2, 3, 4, 1]);
    let result = sequence.drop_while(item_below(3.0)).unwrap();
    // The trailing 1 survives: scanning stopped at the 3.
    assert_eq!(result, numbers([3, 4, 1]));
}

#[rstest]
fn test_drop_while_chars_strips_digit_prefix() {
    let text = Sequence::from("42nd street");
    assert_eq!(
        text.drop_while(digit_character).unwrap(),
        Sequence::from("nd street")
    );
}

#[rstest]
fn test_drop_while_all_accepted_is_empty() {
    assert_eq!(
        numbers(1..=4).drop_while(|_| true).unwrap(),
        Sequence::List(Vec::new())
    );
    assert_eq!(
        Sequence::from("aaa").drop_while(|_| true).unwrap(),
        Sequence::from("")
    );
}

#[rstest]
fn test_drop_while_first_rejected_returns_whole_sequence() {
    let original = numbers(5..=8);
    assert_eq!(original.drop_while(|_| false).unwrap(), original);
}

#[rstest]
fn test_drop_while_stops_calling_after_rejection() {
    let mut calls = 0;
    let result = numbers(1..=6)
        .drop_while(|element| {
            calls += 1;
            matches!(element, Element::Item { value, .. } if value.as_number() < Some(3.0))
        })
        .unwrap();

    assert_eq!(result, numbers(3..=6));
    // Two accepted elements plus the one rejection.
    assert_eq!(calls, 3);
}

#[rstest]
fn test_drop_while_passes_ascending_indices() {
    let mut seen = Vec::new();
    let _ = Sequence::from("abc")
        .drop_while(|element| {
            if let Element::Character { index, .. } = element {
                seen.push(index);
            }
            true
        })
        .unwrap();
    assert_eq!(seen, vec![0, 1, 2]);
}

#[rstest]
fn test_drop_while_mapping_is_refused() {
    let error = mapping(&[("a", 1)]).drop_while(|_| true).unwrap_err();
    assert_eq!(error.operation, "drop_while");
    assert_eq!(error.kind, ValueKind::Map);
}

// =============================================================================
// take_while
// =============================================================================

#[rstest]
fn test_take_while_list_keeps_accepted_prefix() {
    let sequence = numbers([1, 2, 3, 4, 1]);
    let result = sequence.take_while(item_below(3.0)).unwrap();
    assert_eq!(result, numbers([1, 2]));
}

#[rstest]
fn test_take_while_chars_keeps_digit_prefix() {
    let text = Sequence::from("42nd street");
    assert_eq!(text.take_while(digit_character).unwrap(), Sequence::from("42"));
}

#[rstest]
fn test_take_while_all_accepted_returns_whole_sequence() {
    let original = Sequence::from("9876");
    assert_eq!(original.take_while(digit_character).unwrap(), original);
}

#[rstest]
fn test_take_while_first_rejected_is_empty() {
    assert_eq!(
        numbers(1..=4).take_while(|_| false).unwrap(),
        Sequence::List(Vec::new())
    );
}

#[rstest]
fn test_take_while_partitions_with_drop_while() {
    let original = Sequence::from("127 apples");
    let prefix = original.take_while(digit_character).unwrap();
    let rest = original.drop_while(digit_character).unwrap();
    assert_eq!(Sequence::concat([&prefix, &rest]).unwrap(), original);
}

#[rstest]
fn test_take_while_number_is_refused() {
    let error = Sequence::from(Value::from(7))
        .take_while(|_| true)
        .unwrap_err();
    assert_eq!(error.operation, "take_while");
    assert_eq!(error.kind, ValueKind::Number);
}

// =============================================================================
// each
// =============================================================================

#[rstest]
fn test_each_list_pairs_values_with_indices() {
    let mut calls = Vec::new();
    numbers(1..=3).each(|element| {
        if let Element::Item { value, index } = element {
            calls.push((value.clone(), index));
        }
    });

    assert_eq!(
        calls,
        vec![
            (Value::from(1), 0),
            (Value::from(2), 1),
            (Value::from(3), 2),
        ]
    );
}

#[rstest]
fn test_each_chars_indexes_characters_not_bytes() {
    let mut calls = Vec::new();
    Sequence::from("日本a").each(|element| {
        if let Element::Character { value, index } = element {
            calls.push((value, index));
        }
    });

    assert_eq!(calls, vec![('日', 0), ('本', 1), ('a', 2)]);
}

#[rstest]
fn test_each_mapping_visits_in_insertion_order() {
    let mut keys = Vec::new();
    mapping(&[("zebra", 1), ("apple", 2), ("mango", 3)]).each(|element| {
        if let Element::Binding { key, .. } = element {
            keys.push(String::from(key));
        }
    });

    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
}

#[rstest]
fn test_each_visits_every_element_exactly_once() {
    let mut count = 0;
    numbers(1..=7).each(|_| count += 1);
    assert_eq!(count, 7);
}

#[rstest]
#[case(Sequence::List(Vec::new()))]
#[case(Sequence::from(""))]
#[case(Sequence::from(Value::Nil))]
#[case(Sequence::from(Value::from(9)))]
fn test_each_never_invokes_on_empty_or_unsupported(#[case] sequence: Sequence) {
    let mut count = 0;
    sequence.each(|_| count += 1);
    assert_eq!(count, 0);
}

// =============================================================================
// filter
// =============================================================================

#[rstest]
fn test_filter_excludes_matching_list_items() {
    let sequence = numbers(1..=6);
    let kept = sequence
        .filter(|element| {
            matches!(
                element,
                Element::Item { value, .. }
                    if value.as_number().is_some_and(|number| number % 2.0 == 0.0)
            )
        })
        .unwrap();

    // Matching elements are removed, not kept.
    assert_eq!(kept, numbers([1, 3, 5]));
}

#[rstest]
fn test_filter_excludes_matching_characters() {
    let text = Sequence::from("a1b2c3");
    let kept = text.filter(digit_character).unwrap();
    assert_eq!(kept, Sequence::from("abc"));
}

#[rstest]
fn test_filter_excludes_matching_bindings() {
    let stock = mapping(&[("apples", 0), ("pears", 7), ("plums", 0)]);
    let in_stock = stock
        .filter(|element| {
            matches!(element, Element::Binding { value, .. } if value.as_number() == Some(0.0))
        })
        .unwrap();

    assert_eq!(in_stock, mapping(&[("pears", 7)]));
}

#[rstest]
fn test_filter_preserves_relative_order() {
    let sequence = numbers([5, 1, 4, 2, 3]);
    let kept = sequence.filter(item_below(3.0)).unwrap();
    assert_eq!(kept, numbers([5, 4, 3]));
}

#[rstest]
fn test_filter_mapping_preserves_insertion_order() {
    let original = mapping(&[("z", 1), ("a", 2), ("m", 3)]);
    let kept = original
        .filter(|element| matches!(element, Element::Binding { key, .. } if key == "a"))
        .unwrap();

    let mut keys = Vec::new();
    kept.each(|element| {
        if let Element::Binding { key, .. } = element {
            keys.push(String::from(key));
        }
    });
    assert_eq!(keys, vec!["z", "m"]);
}

#[rstest]
fn test_filter_nothing_excluded_equals_original() {
    let original = mapping(&[("a", 1), ("b", 2)]);
    assert_eq!(original.filter(|_| false).unwrap(), original);
}

#[rstest]
fn test_filter_everything_excluded_is_empty_same_representation() {
    assert!(matches!(
        numbers(1..=3).filter(|_| true).unwrap(),
        Sequence::List(items) if items.is_empty()
    ));
    assert!(matches!(
        Sequence::from("abc").filter(|_| true).unwrap(),
        Sequence::Chars(text) if text.is_empty()
    ));
    assert!(matches!(
        mapping(&[("a", 1)]).filter(|_| true).unwrap(),
        Sequence::Mapping(entries) if entries.is_empty()
    ));
}

#[rstest]
fn test_filter_unsupported_is_refused() {
    let error = Sequence::from(Value::from(false)).filter(|_| true).unwrap_err();
    assert_eq!(
        error,
        UnsupportedError {
            operation: "filter",
            kind: ValueKind::Bool,
        }
    );
}

// =============================================================================
// Error display
// =============================================================================

#[rstest]
fn test_unsupported_error_display_names_operation_and_kind() {
    let error = mapping(&[("a", 1)]).take(1).unwrap_err();
    assert_eq!(
        error.to_string(),
        "take: unsupported sequence representation: mapping"
    );

    let error = Sequence::from(Value::Nil).drop_first(0).unwrap_err();
    assert_eq!(
        error.to_string(),
        "drop_first: unsupported sequence representation: nil"
    );
}

#[rstest]
fn test_unsupported_error_is_std_error() {
    let error: Box<dyn std::error::Error> =
        Box::new(mapping(&[("a", 1)]).drop_first(1).unwrap_err());
    assert!(error.to_string().contains("unsupported"));
}
