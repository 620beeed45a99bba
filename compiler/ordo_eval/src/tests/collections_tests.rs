//! Tests for set and map construction.

use crate::{build_frozen_set, build_map, build_set, compare};
use ordo_ir::CmpOp;
use ordo_value::{CompareErrorKind, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_set_collapses_equal_numbers() {
    let set = build_set(vec![
        Value::int(1),
        Value::float(1.0),
        Value::Bool(true),
        Value::int(2),
    ])
    .unwrap();
    // First occurrence wins
    assert_eq!(set.to_string(), "{1, 2}");
}

#[test]
fn test_frozen_set_of_tuples() {
    let set = build_frozen_set(vec![
        Value::tuple(vec![Value::int(1), Value::string("a")]),
        Value::tuple(vec![Value::float(1.0), Value::string("a")]),
    ])
    .unwrap();
    assert_eq!(set.to_string(), "frozenset({(1, \"a\")})");
}

#[test]
fn test_set_rejects_unhashable() {
    let err = build_set(vec![Value::int(1), Value::list(vec![])]).unwrap_err();
    assert_eq!(
        err.kind,
        CompareErrorKind::Unhashable {
            type_name: "list".into()
        }
    );
    // Found inside a tuple too
    let nested = Value::tuple(vec![Value::int(1), build_set(vec![]).unwrap()]);
    assert_eq!(build_set(vec![nested]).unwrap_err().message, "unhashable type: 'set'");
}

#[test]
fn test_map_keeps_first_key_and_last_value() {
    let map = build_map(vec![
        (Value::int(1), Value::string("first")),
        (Value::string("x"), Value::None),
        (Value::float(1.0), Value::string("last")),
    ])
    .unwrap();
    assert_eq!(map.to_string(), "{1: \"last\", \"x\": None}");
}

#[test]
fn test_map_rejects_unhashable_key() {
    let err = build_map(vec![(Value::list(vec![]), Value::int(1))]).unwrap_err();
    assert!(matches!(err.kind, CompareErrorKind::Unhashable { .. }));
    // Values may be anything
    assert!(build_map(vec![(Value::int(1), Value::list(vec![]))]).is_ok());
}

#[test]
fn test_nan_elements_stay_distinct() {
    let set = build_set(vec![Value::float(f64::NAN), Value::float(f64::NAN)]).unwrap();
    assert_eq!(set.to_string(), "{nan, nan}");
    let same = build_set(vec![Value::float(f64::NAN), Value::float(f64::NAN)]).unwrap();
    assert!(!compare(&set, &same, CmpOp::Eq).unwrap());
}
