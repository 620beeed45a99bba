//! Numeric payloads that do not fit a machine scalar: exact fractions and
//! complex numbers.

use std::fmt;

use num_rational::{Ratio, Rational64};

/// An exact fraction, always reduced with a positive denominator.
///
/// Construction normalizes, so two rationals with the same value have the
/// same fields and derived equality is numeric equality within this type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational(Rational64);

impl Rational {
    /// Create a reduced fraction.
    ///
    /// Returns `None` for a zero denominator, or when the reduced fraction
    /// does not fit in `i64` once its sign is moved to the numerator
    /// (`i64::MIN` over `-1`, or `i64::MIN` as the denominator).
    pub fn new(num: i64, den: i64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        // Reduce in i128 so i64::MIN can be negated without overflow
        let wide = Ratio::new(i128::from(num), i128::from(den));
        let num = i64::try_from(*wide.numer()).ok()?;
        let den = i64::try_from(*wide.denom()).ok()?;
        Some(Self(Ratio::new_raw(num, den)))
    }

    /// Numerator (carries the sign).
    #[inline]
    pub fn numer(self) -> i64 {
        *self.0.numer()
    }

    /// Denominator (always positive).
    #[inline]
    pub fn denom(self) -> i64 {
        *self.0.denom()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A complex number with binary floating-point parts.
#[derive(Copy, Clone, Debug)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() && !self.im.is_nan() {
            '-'
        } else {
            '+'
        };
        write!(
            f,
            "({}{sign}{}j)",
            super::format_float(self.re),
            super::format_float(self.im.abs())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rational_reduces() {
        let r = Rational::new(6, 8).unwrap();
        assert_eq!((r.numer(), r.denom()), (3, 4));
    }

    #[test]
    fn rational_normalizes_sign() {
        let r = Rational::new(3, -9).unwrap();
        assert_eq!((r.numer(), r.denom()), (-1, 3));
        let r = Rational::new(-3, -9).unwrap();
        assert_eq!((r.numer(), r.denom()), (1, 3));
    }

    #[test]
    fn rational_zero_denominator() {
        assert_eq!(Rational::new(1, 0), None);
    }

    #[test]
    fn rational_zero_numerator() {
        let r = Rational::new(0, -5).unwrap();
        assert_eq!((r.numer(), r.denom()), (0, 1));
    }

    #[test]
    fn rational_extremes() {
        assert_eq!(Rational::new(i64::MIN, i64::MIN), Rational::new(1, 1));
        let r = Rational::new(i64::MIN, 2).unwrap();
        assert_eq!((r.numer(), r.denom()), (i64::MIN / 2, 1));
        // Negating the numerator to move the sign would overflow
        assert_eq!(Rational::new(i64::MIN, -1), None);
        // Denominator cannot be made positive
        assert_eq!(Rational::new(1, i64::MIN), None);
    }

    #[test]
    fn rational_equality_is_numeric() {
        assert_eq!(Rational::new(1, 2), Rational::new(2, 4));
        assert_eq!(Rational::new(4, 2).map(Rational::denom), Some(1));
    }

    #[test]
    fn rational_display() {
        assert_eq!(Rational::new(-1, 3).unwrap().to_string(), "-1/3");
        assert_eq!(Rational::new(14, 2).unwrap().to_string(), "7");
    }

    #[test]
    fn complex_display() {
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "(1.0+2.0j)");
        assert_eq!(Complex::new(0.5, -1.5).to_string(), "(0.5-1.5j)");
    }
}
