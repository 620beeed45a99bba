//! Type coercion for binary comparisons.
//!
//! `resolve` looks only at the two type tags and picks how the pair is
//! compared. For numeric pairs it picks a `NumericDomain`, and
//! `to_canonical` converts each operand into that domain exactly, or fails.
//!
//! # Numeric lattice
//!
//! ```text
//!   Integer  (bool, int)
//!      |
//!   Real     (+ float, rational)        exact fractions, +-inf endpoints
//!      |
//!   Decimal  (+ decimal)                28-digit base-10, +-inf beyond range
//! ```
//!
//! `complex` sits beside the lattice: it compares part-wise and never orders.

use std::cmp::Ordering;

use ordo_value::{conversion_failed, CompareError, Decimal, TypeTag, Value};

use crate::exact::{self, DecimalPoint, ExactReal};

/// Where a numeric comparison is carried out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericDomain {
    /// Both operands are `bool`/`int`.
    Integer,
    /// Exact fractions with infinities.
    Real,
    /// Base-10 decimals with infinities.
    Decimal,
}

impl NumericDomain {
    /// Name used in conversion errors.
    pub const fn name(self) -> &'static str {
        match self {
            NumericDomain::Integer => "int",
            NumericDomain::Real => "exact real",
            NumericDomain::Decimal => "decimal",
        }
    }
}

/// How a pair of operand types is compared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    Numeric(NumericDomain),
    /// At least one complex operand, the other numeric.
    Complex,
    /// A NaN float against any numeric operand.
    NotANumber,
    Text,
    Binary,
    /// Two lists or two tuples.
    Sequence,
    /// Any mix of set and frozen set.
    Set,
    Map,
    /// `None` against `None`.
    Singleton,
    /// Unrelated types: equality is false, ordering unsupported.
    Incomparable,
}

/// Pick the comparison strategy for a pair of operand types.
pub fn resolve(left: TypeTag, right: TypeTag) -> Resolution {
    use TypeTag as T;

    let numeric = left.is_numeric() && right.is_numeric();
    match (left, right) {
        (T::NaN, _) | (_, T::NaN) if numeric => Resolution::NotANumber,
        (T::Complex, _) | (_, T::Complex) if numeric => Resolution::Complex,
        (T::Decimal, _) | (_, T::Decimal) if numeric => {
            Resolution::Numeric(NumericDomain::Decimal)
        }
        _ if left.is_integral() && right.is_integral() => {
            Resolution::Numeric(NumericDomain::Integer)
        }
        _ if numeric => Resolution::Numeric(NumericDomain::Real),
        (T::Str, T::Str) => Resolution::Text,
        (T::Bytes, T::Bytes) => Resolution::Binary,
        (T::List, T::List) | (T::Tuple, T::Tuple) => Resolution::Sequence,
        (T::Set | T::FrozenSet, T::Set | T::FrozenSet) => Resolution::Set,
        (T::Map, T::Map) => Resolution::Map,
        (T::None, T::None) => Resolution::Singleton,
        _ => Resolution::Incomparable,
    }
}

/// An operand converted into its comparison domain.
#[derive(Clone, Debug)]
pub enum Canonical {
    Integer(i64),
    Real(ExactReal),
    Decimal(DecimalPoint),
}

impl PartialEq for Canonical {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// Only values of the same domain are ordered.
impl PartialOrd for Canonical {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Canonical::Integer(a), Canonical::Integer(b)) => Some(a.cmp(b)),
            (Canonical::Real(a), Canonical::Real(b)) => Some(a.cmp(b)),
            (Canonical::Decimal(a), Canonical::Decimal(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Convert a numeric operand into `domain`, exactly or not at all.
pub fn to_canonical(value: &Value, domain: NumericDomain) -> Result<Canonical, CompareError> {
    let converted = match domain {
        NumericDomain::Integer => value.as_integral().map(Canonical::Integer),
        NumericDomain::Real => to_exact_real(value).map(Canonical::Real),
        NumericDomain::Decimal => to_decimal_point(value).map(Canonical::Decimal),
    };
    converted.ok_or_else(|| {
        tracing::debug!(
            from = value.type_name(),
            to = domain.name(),
            %value,
            "no exact conversion"
        );
        conversion_failed(value.type_name(), domain.name(), &value.to_string())
    })
}

fn to_exact_real(value: &Value) -> Option<ExactReal> {
    match value {
        Value::Bool(_) | Value::Int(_) => value
            .as_integral()
            .map(|n| ExactReal::Finite(exact::integer(n))),
        Value::Float(f) => ExactReal::from_f64(*f),
        Value::Rational(r) => Some(ExactReal::Finite(exact::rational(*r))),
        Value::Decimal(d) => Some(ExactReal::Finite(exact::decimal(*d))),
        _ => None,
    }
}

fn to_decimal_point(value: &Value) -> Option<DecimalPoint> {
    match value {
        Value::Bool(_) | Value::Int(_) => value
            .as_integral()
            .map(|n| DecimalPoint::Finite(Decimal::from(n))),
        Value::Decimal(d) => Some(DecimalPoint::Finite(*d)),
        Value::Float(f) if *f == f64::INFINITY => Some(DecimalPoint::PosInf),
        Value::Float(f) if *f == f64::NEG_INFINITY => Some(DecimalPoint::NegInf),
        Value::Float(f) => exact::float(*f).and_then(|r| exact::decimal_point(&r)),
        Value::Rational(r) => exact::decimal_point(&exact::rational(*r)),
        _ => None,
    }
}
