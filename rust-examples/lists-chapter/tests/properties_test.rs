//! Laws the list operations are expected to obey, checked on small inputs.

use lists_common::flatten::{flatten, flatten_all};
use lists_common::json::from_json_str;
use lists_common::map::{map_chr, map_int};
use lists_common::predicate::{detect, detect_index, discard, every, keep, some};
use lists_common::transpose::transpose;
use lists_common::{Container, Element, Value, list, path};
use rstest::rstest;

fn is_even(value: &Value) -> bool {
    value.as_int().is_some_and(|n| n % 2 == 0)
}

fn ints(list: &Container) -> Vec<i64> {
    map_int(list, &path![]).unwrap()
}

#[rstest]
#[case::flat(list![1, 2, 3])]
#[case::one_level(list![list![1, 2], list![3, 4]])]
#[case::ragged(list![1, list![2, list![3, list![4]]], list![], 5])]
#[case::named(list!["a" => list!["b" => list![1]], "c" => 2])]
#[case::empty(list![])]
fn given_any_list_when_flattening_once_first_then_flatten_all_is_unchanged(#[case] x: Container) {
    assert_eq!(flatten_all(&flatten(&x)).unwrap(), flatten_all(&x).unwrap());
}

#[test]
fn given_list_of_pairs_when_flattening_then_one_level_is_removed() {
    assert_eq!(flatten(&list![list![1, 2], list![3, 4]]), list![1, 2, 3, 4]);
    assert_eq!(flatten(&list![]), list![]);
}

#[rstest]
#[case::positional(list![list![1, 2, 3], list![4, 5, 6]])]
#[case::keyed(list!["x" => list!["a" => 1, "b" => 3], "y" => list!["a" => 2, "b" => 4]])]
#[case::single_row(list![list!["a" => "only"]])]
#[case::partly_named(list![list!["a" => 1, 2], list!["a" => 3, 4]])]
#[case::repeated_outer_names(list!["x" => list!["a" => 1, "b" => 2], "x" => list!["a" => 3, "b" => 4]])]
#[case::repeated_inner_names(list![list!["a" => 1, "a" => 2], list!["a" => 3, "a" => 4]])]
fn given_rectangular_list_when_transposing_twice_then_original_returns(#[case] x: Container) {
    assert_eq!(transpose(&transpose(&x).unwrap()).unwrap(), x);
}

#[test]
fn given_named_records_when_transposing_then_keys_and_names_swap() {
    // Arrange
    let x = list![
        "x" => list!["a" => 1, "b" => 3],
        "y" => list!["a" => 2, "b" => 4],
    ];

    // Act
    let t = transpose(&x).unwrap();

    // Assert
    assert_eq!(
        t,
        list![
            "a" => list!["x" => 1, "y" => 2],
            "b" => list!["x" => 3, "y" => 4],
        ]
    );
}

#[test]
fn given_ragged_records_when_transposing_then_shape_mismatch() {
    let err = transpose(&list![list![1, 2], list![3]]).unwrap_err();
    assert!(err.to_string().starts_with("shape mismatch"));
}

#[rstest]
#[case::mixed(list![0, 1, 2, 3, 4, 5, 6])]
#[case::unsorted(list![5, 2, 7, 4])]
#[case::descending(list![9, 8, 6, 3, 2])]
#[case::all_even(list![2, 4])]
#[case::none_even(list![1, 3])]
#[case::empty(list![])]
fn given_predicate_when_keeping_and_discarding_then_partition_is_exact(#[case] x: Container) {
    // Arrange: name every element after its position so the halves can be merged back
    let tagged = x
        .set_names((0..x.len()).map(|i| Some(i.to_string())))
        .unwrap();

    // Act
    let kept = keep(&tagged, is_even);
    let dropped = discard(&tagged, is_even);
    let mut merged: Vec<Element> = kept.iter().chain(dropped.iter()).cloned().collect();
    merged.sort_by_key(|el| el.name().and_then(|n| n.parse::<usize>().ok()));

    // Assert
    assert_eq!(kept.len() + dropped.len(), x.len());
    assert_eq!(merged.into_iter().collect::<Container>(), tagged);
    assert!(every(&kept, is_even));
    assert!(!some(&dropped, is_even));
}

#[test]
fn given_unsorted_list_when_keeping_then_relative_order_is_preserved() {
    let x = list![5, 2, 7, 4];
    assert_eq!(ints(&keep(&x, is_even)), vec![2, 4]);
    assert_eq!(ints(&discard(&x, is_even)), vec![5, 7]);
}

#[test]
fn given_empty_list_when_quantifying_then_every_holds_and_some_does_not() {
    let empty = Container::new();
    assert!(every(&empty, |_| false));
    assert!(!some(&empty, |_| true));
}

#[test]
fn given_numbers_when_detecting_first_even_then_index_and_value_agree() {
    let x = list![1, 3, 5, 4, 7];
    assert_eq!(detect_index(&x, is_even), Some(3));
    assert_eq!(detect(&x, is_even), Some(&Value::Int(4)));
}

#[test]
fn given_json_records_when_extracting_path_then_leaves_in_order() {
    // Arrange
    let records = from_json_str(r#"[{"user": {"login": "bob", "id": 7}}]"#).unwrap();
    let records = records.as_list().unwrap();

    // Act
    let logins = map_chr(records, &path!["user", "login"]).unwrap();
    let ids = map_int(records, &path!["user", "id"]).unwrap();

    // Assert
    assert_eq!(logins, vec!["bob"]);
    assert_eq!(ids, vec![7]);
}
