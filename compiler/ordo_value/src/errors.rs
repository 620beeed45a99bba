//! Error types for comparison evaluation.
//!
//! # Structured Error Categories
//!
//! `CompareErrorKind` provides typed error categories so callers can match on
//! the failure instead of parsing messages. Factory functions (e.g.
//! `not_supported()`) are the public API; they populate both `kind` and
//! `message`.
//!
//! Only conditions the comparison rules call errors live here. An equality
//! test between unrelated types is `false`, and anything involving
//! not-a-number is `false`; neither reaches this module.

use ordo_ir::CmpOp;
use thiserror::Error;

/// Result of a single operator application.
pub type CompareResult = Result<bool, CompareError>;

/// Typed error category for structured diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompareErrorKind {
    /// Ordering requested between types with no ordering relation.
    #[error("'{op}' not supported between instances of '{left}' and '{right}'")]
    NotSupported {
        op: CmpOp,
        left: String,
        right: String,
    },

    /// A numeric operand has no exact representation in the comparison domain.
    #[error("cannot compare {from} {value} exactly as {to}: no exact conversion exists")]
    ConversionFailed {
        from: String,
        to: String,
        value: String,
    },

    /// Membership test whose candidate type the container cannot search for.
    #[error("'in <{container}>' requires {expected} as left operand, not {got}")]
    InvalidMembership {
        container: String,
        expected: String,
        got: String,
    },

    /// Integer candidate outside the byte range, tested against bytes.
    #[error("byte must be in range(0, 256), got {value}")]
    ByteOutOfRange { value: i64 },

    /// Membership test against a value that is not a container.
    #[error("argument of type '{type_name}' is not iterable")]
    NotIterable { type_name: String },

    /// Set element or map key that cannot be hashed.
    #[error("unhashable type: '{type_name}'")]
    Unhashable { type_name: String },

    /// Nested containers deeper than the configured limit.
    #[error("maximum recursion depth exceeded in comparison (limit: {depth})")]
    RecursionLimit { depth: usize },
}

/// Comparison error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CompareError {
    /// Structured error category.
    pub kind: CompareErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
}

impl CompareError {
    fn from_kind(kind: CompareErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Whether this error is a type error (as opposed to a resource limit).
    pub fn is_type_error(&self) -> bool {
        !matches!(self.kind, CompareErrorKind::RecursionLimit { .. })
    }
}

// Operator Errors

/// Ordering operator applied to types without an ordering relation.
#[cold]
pub fn not_supported(op: CmpOp, left: &str, right: &str) -> CompareError {
    CompareError::from_kind(CompareErrorKind::NotSupported {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

/// Numeric value with no exact mapping into the comparison domain.
#[cold]
pub fn conversion_failed(from: &str, to: &str, value: &str) -> CompareError {
    CompareError::from_kind(CompareErrorKind::ConversionFailed {
        from: from.to_string(),
        to: to.to_string(),
        value: value.to_string(),
    })
}

// Membership Errors

/// Candidate of the wrong type for a text or binary container.
#[cold]
pub fn invalid_membership(container: &str, expected: &str, got: &str) -> CompareError {
    CompareError::from_kind(CompareErrorKind::InvalidMembership {
        container: container.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Integer candidate outside 0..=255 tested against bytes.
#[cold]
pub fn byte_out_of_range(value: i64) -> CompareError {
    CompareError::from_kind(CompareErrorKind::ByteOutOfRange { value })
}

/// Membership test on a non-container.
#[cold]
pub fn not_iterable(type_name: &str) -> CompareError {
    CompareError::from_kind(CompareErrorKind::NotIterable {
        type_name: type_name.to_string(),
    })
}

// Construction Errors

/// Unhashable set element or map key.
#[cold]
pub fn unhashable(type_name: &str) -> CompareError {
    CompareError::from_kind(CompareErrorKind::Unhashable {
        type_name: type_name.to_string(),
    })
}

// Resource Errors

/// Maximum container nesting depth exceeded.
#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> CompareError {
    CompareError::from_kind(CompareErrorKind::RecursionLimit { depth: limit })
}
