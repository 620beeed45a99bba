#![allow(
    clippy::result_large_err,
    reason = "CompareError is returned by every comparison; boxing it would touch every call site"
)]
//! Ordo Value - runtime operands for the comparison engine.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`, `Rational`, `Complex`, `SetValue`, `MapValue`)
//! - The closed operand type tag set (`TypeTag`)
//! - Comparison error types (`CompareError`, `CompareResult`)
//!
//! # Value Types
//!
//! The value module provides runtime values with enforced Arc usage:
//! - All heap allocations go through `Value::` factory methods
//! - `Heap<T>` wrapper enforces this invariant
//! - Identity (`is`) observes `Heap` storage, never contents

mod errors;
mod value;

pub use errors::{
    byte_out_of_range, conversion_failed, invalid_membership, not_iterable, not_supported,
    recursion_limit_exceeded, unhashable, CompareError, CompareErrorKind, CompareResult,
};
pub use value::{Complex, Heap, MapValue, Rational, SetValue, TypeTag, Value};

pub use rust_decimal::Decimal;
