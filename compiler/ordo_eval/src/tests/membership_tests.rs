//! Tests for `in` / `not in`.

use crate::{build_map, build_set, contains, compare};
use ordo_ir::CmpOp;
use ordo_value::{CompareErrorKind, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_substring() {
    let text = Value::string("hello world");
    assert!(contains(&Value::string("lo w"), &text).unwrap());
    assert!(contains(&Value::string(""), &text).unwrap());
    assert!(contains(&Value::string(""), &Value::string("")).unwrap());
    assert!(!contains(&Value::string("xyz"), &text).unwrap());
}

#[test]
fn test_substring_requires_str() {
    let err = contains(&Value::int(1), &Value::string("1")).unwrap_err();
    assert_eq!(err.message, "'in <str>' requires str as left operand, not int");
    assert!(matches!(err.kind, CompareErrorKind::InvalidMembership { .. }));
}

#[test]
fn test_bytes_membership() {
    let data = Value::bytes(b"\x00abc".to_vec());
    assert!(contains(&Value::bytes(b"bc".to_vec()), &data).unwrap());
    assert!(contains(&Value::bytes(Vec::new()), &data).unwrap());
    assert!(!contains(&Value::bytes(b"ca".to_vec()), &data).unwrap());
    assert!(contains(&Value::int(97), &data).unwrap());
    assert!(contains(&Value::Bool(false), &data).unwrap());
    assert!(!contains(&Value::int(255), &data).unwrap());
}

#[test]
fn test_bytes_membership_errors() {
    let data = Value::bytes(b"abc".to_vec());
    assert_eq!(
        contains(&Value::int(256), &data).unwrap_err().kind,
        CompareErrorKind::ByteOutOfRange { value: 256 }
    );
    assert_eq!(
        contains(&Value::int(-1), &data).unwrap_err().kind,
        CompareErrorKind::ByteOutOfRange { value: -1 }
    );
    assert!(matches!(
        contains(&Value::string("a"), &data).unwrap_err().kind,
        CompareErrorKind::InvalidMembership { .. }
    ));
}

#[test]
fn test_sequence_membership() {
    let items = Value::tuple(vec![Value::int(1), Value::string("two"), Value::None]);
    assert!(contains(&Value::float(1.0), &items).unwrap());
    assert!(contains(&Value::string("two"), &items).unwrap());
    assert!(contains(&Value::None, &items).unwrap());
    assert!(!contains(&Value::int(2), &items).unwrap());
}

#[test]
fn test_nan_membership() {
    let nan = Value::float(f64::NAN);
    // NaN is never found by value
    assert!(!contains(&nan, &Value::list(vec![nan.clone()])).unwrap());
    // A shared container is found by storage
    let inner = Value::list(vec![nan]);
    assert!(contains(&inner, &Value::list(vec![inner.clone()])).unwrap());
}

#[test]
fn test_set_membership() {
    let set = build_set(vec![Value::int(1), Value::string("a")]).unwrap();
    assert!(contains(&Value::Bool(true), &set).unwrap());
    assert!(!contains(&Value::string("b"), &set).unwrap());
    assert_eq!(
        contains(&Value::list(vec![]), &set).unwrap_err().kind,
        CompareErrorKind::Unhashable {
            type_name: "list".into()
        }
    );
}

#[test]
fn test_map_membership_checks_keys() {
    let map = build_map(vec![(Value::string("k"), Value::string("v"))]).unwrap();
    assert!(contains(&Value::string("k"), &map).unwrap());
    assert!(!contains(&Value::string("v"), &map).unwrap());
}

#[test]
fn test_not_iterable() {
    let err = contains(&Value::int(1), &Value::int(1)).unwrap_err();
    assert_eq!(
        err.kind,
        CompareErrorKind::NotIterable {
            type_name: "int".into()
        }
    );
    assert!(contains(&Value::None, &Value::None).is_err());
}

#[test]
fn test_not_in_negates() {
    let list = Value::list(vec![Value::int(1)]);
    assert!(!compare(&Value::int(1), &list, CmpOp::NotIn).unwrap());
    assert!(compare(&Value::int(2), &list, CmpOp::NotIn).unwrap());
    // Errors are not negated into answers
    assert!(compare(&Value::int(1), &Value::int(1), CmpOp::NotIn).is_err());
}
