//! Exact canonical forms for numeric comparison.
//!
//! Every finite binary float, every decimal and every rational is a ratio of
//! integers, so comparing through `BigRational` never rounds. Infinities sit
//! outside the ratios as the two ends of `ExactReal` and `DecimalPoint`.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use ordo_value::{Decimal, Rational};

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

pub fn integer(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

pub fn rational(r: Rational) -> BigRational {
    // Already reduced with a positive denominator
    BigRational::new_raw(BigInt::from(r.numer()), BigInt::from(r.denom()))
}

pub fn decimal(d: Decimal) -> BigRational {
    BigRational::new(
        BigInt::from(d.mantissa()),
        BigInt::from(10u8).pow(d.scale()),
    )
}

/// Exact value of a finite float; `None` for infinities and NaN.
pub fn float(f: f64) -> Option<BigRational> {
    BigRational::from_float(f)
}

/// The same value as a `Decimal`, if one represents it exactly.
///
/// Requires the denominator to have no prime factors other than 2 and 5, a
/// scale of at most 28 and a mantissa within 96 bits.
pub fn to_decimal(value: &BigRational) -> Option<Decimal> {
    let (scale, multiplier) = decimal_scale_for(value.denom())?;
    if scale > MAX_DECIMAL_SCALE {
        return None;
    }
    let mantissa = (value.numer() * multiplier).to_i128()?;
    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}

/// Position of a finite value among decimals.
///
/// Values beyond the decimal range order past every decimal, so they become
/// the matching infinity. Values inside the range must convert exactly.
pub fn decimal_point(value: &BigRational) -> Option<DecimalPoint> {
    if *value > decimal(Decimal::MAX) {
        Some(DecimalPoint::PosInf)
    } else if *value < decimal(Decimal::MIN) {
        Some(DecimalPoint::NegInf)
    } else {
        to_decimal(value).map(DecimalPoint::Finite)
    }
}

/// For a reduced denominator `2^a * 5^b`, the scale `max(a, b)` and the
/// factor that lifts the denominator to `10^scale`.
fn decimal_scale_for(den: &BigInt) -> Option<(u32, BigInt)> {
    let two = BigInt::from(2u8);
    let five = BigInt::from(5u8);
    let mut rest = den.clone();
    let mut twos = 0u32;
    let mut fives = 0u32;
    while (&rest % &two).is_zero() {
        rest /= &two;
        twos += 1;
    }
    while (&rest % &five).is_zero() {
        rest /= &five;
        fives += 1;
    }
    if !rest.is_one() {
        return None;
    }
    let scale = twos.max(fives);
    let multiplier = two.pow(scale - twos) * five.pow(scale - fives);
    Some((scale, multiplier))
}

/// An extended real: a ratio or one of the two infinities.
///
/// Variant order is the numeric order, so the derived `Ord` is correct.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExactReal {
    NegInf,
    Finite(BigRational),
    PosInf,
}

impl ExactReal {
    /// Exact value of a float; `None` for NaN.
    pub fn from_f64(f: f64) -> Option<Self> {
        if f.is_nan() {
            None
        } else if f == f64::INFINITY {
            Some(Self::PosInf)
        } else if f == f64::NEG_INFINITY {
            Some(Self::NegInf)
        } else {
            float(f).map(Self::Finite)
        }
    }
}

/// A decimal or one of the two infinities.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DecimalPoint {
    NegInf,
    Finite(Decimal),
    PosInf,
}
