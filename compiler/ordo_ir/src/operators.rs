//! Comparison Operators
//!
//! Every operator that may appear between two operands of a comparison
//! chain: ordering, equality, identity and membership.

use std::cmp::Ordering;
use std::fmt;

/// Comparison operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CmpOp {
    // Equality
    Eq,
    NotEq,

    // Ordering
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Identity
    Is,
    IsNot,

    // Membership
    In,
    NotIn,
}

/// Broad operator family, used by the evaluator to pick a dispatch path.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpClass {
    Equality,
    Ordering,
    Identity,
    Membership,
}

impl CmpOp {
    /// All operators, in declaration order.
    pub const ALL: [CmpOp; 10] = [
        Self::Eq,
        Self::NotEq,
        Self::Lt,
        Self::LtEq,
        Self::Gt,
        Self::GtEq,
        Self::Is,
        Self::IsNot,
        Self::In,
        Self::NotIn,
    ];

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Is => "is",
            Self::IsNot => "is not",
            Self::In => "in",
            Self::NotIn => "not in",
        }
    }

    /// The family this operator belongs to.
    pub const fn class(self) -> OpClass {
        match self {
            Self::Eq | Self::NotEq => OpClass::Equality,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => OpClass::Ordering,
            Self::Is | Self::IsNot => OpClass::Identity,
            Self::In | Self::NotIn => OpClass::Membership,
        }
    }

    /// Whether this is one of `<`, `<=`, `>`, `>=`.
    #[inline]
    pub const fn is_ordering(self) -> bool {
        matches!(self.class(), OpClass::Ordering)
    }

    /// Whether this is `==` or `!=`.
    #[inline]
    pub const fn is_equality(self) -> bool {
        matches!(self.class(), OpClass::Equality)
    }

    /// Whether this is the negated half of a pair (`!=`, `is not`, `not in`).
    #[inline]
    pub const fn is_negated(self) -> bool {
        matches!(self, Self::NotEq | Self::IsNot | Self::NotIn)
    }

    /// The operator with its operands swapped: `a < b` is `b > a`.
    ///
    /// Membership has no mirror image (`a in b` says nothing about `b in a`),
    /// so it returns `None`.
    pub const fn reflected(self) -> Option<Self> {
        match self {
            Self::Lt => Some(Self::Gt),
            Self::LtEq => Some(Self::GtEq),
            Self::Gt => Some(Self::Lt),
            Self::GtEq => Some(Self::LtEq),
            Self::Eq | Self::NotEq | Self::Is | Self::IsNot => Some(self),
            Self::In | Self::NotIn => None,
        }
    }

    /// Whether a total-order outcome satisfies this operator.
    ///
    /// Only meaningful for equality and ordering operators; identity and
    /// membership never hold for a bare ordering.
    pub const fn holds_for(self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => matches!(ordering, Ordering::Equal),
            Self::NotEq => !matches!(ordering, Ordering::Equal),
            Self::Lt => matches!(ordering, Ordering::Less),
            Self::LtEq => matches!(ordering, Ordering::Less | Ordering::Equal),
            Self::Gt => matches!(ordering, Ordering::Greater),
            Self::GtEq => matches!(ordering, Ordering::Greater | Ordering::Equal),
            Self::Is | Self::IsNot | Self::In | Self::NotIn => false,
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn symbols_are_distinct() {
        let mut symbols: Vec<_> = CmpOp::ALL.iter().map(|op| op.as_symbol()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), CmpOp::ALL.len());
    }

    #[test]
    fn reflected_is_an_involution() {
        for op in CmpOp::ALL {
            if let Some(mirror) = op.reflected() {
                assert_eq!(mirror.reflected(), Some(op));
            }
        }
        assert_eq!(CmpOp::In.reflected(), None);
    }

    #[test]
    fn holds_for_matches_ordering() {
        assert!(CmpOp::Lt.holds_for(Ordering::Less));
        assert!(!CmpOp::Lt.holds_for(Ordering::Equal));
        assert!(CmpOp::LtEq.holds_for(Ordering::Equal));
        assert!(CmpOp::GtEq.holds_for(Ordering::Greater));
        assert!(CmpOp::NotEq.holds_for(Ordering::Less));
        assert!(!CmpOp::Is.holds_for(Ordering::Equal));
    }

    #[test]
    fn classes() {
        assert_eq!(CmpOp::Is.class(), OpClass::Identity);
        assert_eq!(CmpOp::NotIn.class(), OpClass::Membership);
        assert!(CmpOp::Gt.is_ordering());
        assert!(CmpOp::NotEq.is_equality());
        assert!(CmpOp::IsNot.is_negated());
        assert!(!CmpOp::In.is_negated());
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(CmpOp::NotIn.to_string(), "not in");
        assert_eq!(format!("{}", CmpOp::LtEq), "<=");
    }
}
