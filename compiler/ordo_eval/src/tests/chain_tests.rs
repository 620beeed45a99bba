//! Tests for chained comparisons.

use std::cell::Cell;

use crate::{chain_evaluate, ChainExpression, Comparator, Operand};
use ordo_ir::CmpOp;
use ordo_value::{not_iterable, CompareErrorKind, Value};

/// Operand that counts how often it is evaluated.
fn counted(counter: &Cell<u32>, value: Value) -> Operand<'_> {
    Operand::deferred(move || {
        counter.set(counter.get() + 1);
        Ok(value)
    })
}

#[test]
fn test_empty_chain_is_true() {
    assert!(chain_evaluate(Value::int(1), Vec::<(CmpOp, Operand)>::new()).unwrap());
    let expr = ChainExpression::new(Value::None);
    assert!(expr.is_empty());
    assert!(expr.evaluate(&Comparator::default()).unwrap());
}

#[test]
fn test_all_links_hold() {
    let expr = ChainExpression::new(Value::int(1))
        .then(CmpOp::Lt, Value::float(2.5))
        .then(CmpOp::LtEq, Value::rational(5, 2).unwrap())
        .then(CmpOp::NotEq, Value::int(3));
    assert_eq!(expr.len(), 3);
    assert!(expr.evaluate(&Comparator::default()).unwrap());
}

#[test]
fn test_middle_operand_evaluated_once() {
    let y_count = Cell::new(0);
    let z_count = Cell::new(0);
    let result = chain_evaluate(
        Value::int(1),
        [
            (CmpOp::Lt, counted(&y_count, Value::int(2))),
            (CmpOp::Lt, counted(&z_count, Value::int(3))),
        ],
    )
    .unwrap();
    assert!(result);
    assert_eq!(y_count.get(), 1);
    assert_eq!(z_count.get(), 1);
}

#[test]
fn test_short_circuit_skips_later_operands() {
    let y_count = Cell::new(0);
    let z_count = Cell::new(0);
    let result = chain_evaluate(
        Value::int(5),
        [
            (CmpOp::Lt, counted(&y_count, Value::int(2))),
            (CmpOp::Lt, counted(&z_count, Value::int(3))),
        ],
    )
    .unwrap();
    assert!(!result);
    assert_eq!(y_count.get(), 1);
    assert_eq!(z_count.get(), 0);
}

#[test]
fn test_short_circuit_skips_later_errors() {
    // `1 > 2 < "a"` is false before the unsupported link is reached
    let expr = ChainExpression::new(Value::int(1))
        .then(CmpOp::Gt, Value::int(2))
        .then(CmpOp::Lt, Value::string("a"));
    assert!(!expr.evaluate(&Comparator::default()).unwrap());
}

#[test]
fn test_comparison_error_propagates() {
    let expr = ChainExpression::new(Value::int(1))
        .then(CmpOp::Lt, Value::int(2))
        .then(CmpOp::Lt, Value::string("a"));
    let err = expr.evaluate(&Comparator::default()).unwrap_err();
    assert!(matches!(err.kind, CompareErrorKind::NotSupported { .. }));
}

#[test]
fn test_operand_error_propagates() {
    let later = Cell::new(0);
    let result = chain_evaluate(
        Value::int(1),
        [
            (CmpOp::Lt, Operand::deferred(|| Err(not_iterable("int")))),
            (CmpOp::Lt, counted(&later, Value::int(3))),
        ],
    );
    assert_eq!(
        result.unwrap_err().kind,
        CompareErrorKind::NotIterable {
            type_name: "int".into()
        }
    );
    assert_eq!(later.get(), 0);
}

#[test]
fn test_mixed_operators() {
    // 1 in [1, 2] is not [1, 2]: the right operand of `in` is the left of `is not`
    let target = Value::list(vec![Value::int(1), Value::int(2)]);
    let expr = ChainExpression::new(Value::int(1))
        .then(CmpOp::In, target)
        .then(CmpOp::IsNot, Value::list(vec![Value::int(1), Value::int(2)]));
    assert!(expr.evaluate(&Comparator::default()).unwrap());
}

#[test]
fn test_nan_breaks_chain() {
    let expr = ChainExpression::new(Value::int(1))
        .then(CmpOp::Lt, Value::float(f64::NAN))
        .then(CmpOp::Lt, Value::int(3));
    assert!(!expr.evaluate(&Comparator::default()).unwrap());
}
