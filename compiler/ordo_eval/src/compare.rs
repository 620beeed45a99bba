//! Binary comparison of runtime values.
//!
//! `Comparator::compare` evaluates every `CmpOp`. Identity and membership are
//! dispatched by operator class; equality and ordering go through the
//! coercion resolver and one relation function per resolution.
//!
//! Container comparison recurses. Every level passes through
//! `ensure_sufficient_stack` and counts against `CompareMode::max_depth`.

use ordo_ir::{CmpOp, OpClass};
use ordo_value::{
    not_supported, recursion_limit_exceeded, CompareError, CompareResult, MapValue, SetValue,
    Value,
};

use crate::coercion::{resolve, to_canonical, NumericDomain, Resolution};
use crate::compare_mode::CompareMode;
use crate::stack::ensure_sufficient_stack;

/// Comparison engine configured by a `CompareMode`.
///
/// Stateless apart from the mode, so it is `Copy` and may be shared freely.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparator {
    mode: CompareMode,
}

impl Comparator {
    pub fn new(mode: CompareMode) -> Self {
        Self { mode }
    }

    /// Apply `op` to `left` and `right`.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(op = %op, left = left.type_name(), right = right.type_name())
    )]
    pub fn compare(&self, left: &Value, right: &Value, op: CmpOp) -> CompareResult {
        self.apply(left, right, op, 0)
    }

    pub(crate) fn apply(&self, left: &Value, right: &Value, op: CmpOp, depth: usize) -> CompareResult {
        match op.class() {
            OpClass::Identity => Ok(left.is_same(right) != op.is_negated()),
            // `x in c`: the container is the right operand
            OpClass::Membership => Ok(self.contains_at(left, right, depth)? != op.is_negated()),
            OpClass::Equality | OpClass::Ordering => self.relate(left, right, op, depth),
        }
    }

    /// Value equality.
    pub(crate) fn equals(&self, left: &Value, right: &Value, depth: usize) -> CompareResult {
        self.relate(left, right, CmpOp::Eq, depth)
    }

    /// Element equality inside containers: shared storage short-circuits.
    pub(crate) fn element_eq(&self, left: &Value, right: &Value, depth: usize) -> CompareResult {
        if left.shares_storage(right) {
            return Ok(true);
        }
        self.equals(left, right, depth)
    }

    /// Enter one level of container nesting.
    pub(crate) fn descend(&self, depth: usize) -> Result<usize, CompareError> {
        let next = depth.saturating_add(1);
        match self.mode.max_depth() {
            Some(limit) if next > limit => {
                tracing::debug!(limit, "comparison nesting limit reached");
                Err(recursion_limit_exceeded(limit))
            }
            _ => Ok(next),
        }
    }

    /// Equality and ordering operators.
    fn relate(&self, left: &Value, right: &Value, op: CmpOp, depth: usize) -> CompareResult {
        match (resolve(left.type_tag(), right.type_tag()), left, right) {
            (Resolution::Numeric(domain), _, _) => relate_numbers(left, right, domain, op),
            (Resolution::Complex, _, _) => self.relate_complex(left, right, op, depth),
            // NaN: only `!=` holds
            (Resolution::NotANumber, _, _) => Ok(op == CmpOp::NotEq),
            (Resolution::Text, Value::Str(a), Value::Str(b)) => {
                Ok(op.holds_for(a.chars().cmp(b.chars())))
            }
            (Resolution::Binary, Value::Bytes(a), Value::Bytes(b)) => {
                Ok(op.holds_for(a.as_slice().cmp(b.as_slice())))
            }
            (Resolution::Sequence, Value::List(a), Value::List(b))
            | (Resolution::Sequence, Value::Tuple(a), Value::Tuple(b)) => {
                self.relate_sequences(a, b, op, depth)
            }
            (
                Resolution::Set,
                Value::Set(a) | Value::FrozenSet(a),
                Value::Set(b) | Value::FrozenSet(b),
            ) => self.relate_sets(a, b, op, depth),
            // Maps and `None` have equality but no order
            (Resolution::Map, Value::Map(a), Value::Map(b)) if op.is_equality() => {
                let depth = self.descend(depth)?;
                let equal = ensure_sufficient_stack(|| self.maps_equal(a, b, depth))?;
                Ok(equal != op.is_negated())
            }
            (Resolution::Singleton, _, _) if op.is_equality() => Ok(op == CmpOp::Eq),
            _ => unrelated(left, right, op),
        }
    }

    /// Part-wise equality; real operands have a zero imaginary part.
    fn relate_complex(&self, left: &Value, right: &Value, op: CmpOp, depth: usize) -> CompareResult {
        if !op.is_equality() {
            return Err(unsupported(op, left, right));
        }
        let (left_re, left_im) = complex_parts(left);
        let (right_re, right_im) = complex_parts(right);
        let equal = self.equals(&left_re, &right_re, depth)?
            && self.equals(&left_im, &right_im, depth)?;
        Ok(equal != op.is_negated())
    }

    /// Lexicographic comparison of two lists or two tuples.
    fn relate_sequences(&self, a: &[Value], b: &[Value], op: CmpOp, depth: usize) -> CompareResult {
        if op.is_equality() && a.len() != b.len() {
            return Ok(op == CmpOp::NotEq);
        }
        let depth = self.descend(depth)?;
        ensure_sufficient_stack(|| {
            for (x, y) in a.iter().zip(b) {
                if !self.element_eq(x, y, depth)? {
                    return match op {
                        CmpOp::Eq => Ok(false),
                        CmpOp::NotEq => Ok(true),
                        _ => self.relate(x, y, op, depth),
                    };
                }
            }
            Ok(op.holds_for(a.len().cmp(&b.len())))
        })
    }

    /// Subset relations between two sets.
    fn relate_sets(&self, a: &SetValue, b: &SetValue, op: CmpOp, depth: usize) -> CompareResult {
        // Superset tests are subset tests with the operands swapped
        if let (CmpOp::Gt | CmpOp::GtEq, Some(mirror)) = (op, op.reflected()) {
            return self.relate_sets(b, a, mirror, depth);
        }
        let depth = self.descend(depth)?;
        ensure_sufficient_stack(|| match op {
            CmpOp::Eq => Ok(a.len() == b.len() && self.is_subset(a, b, depth)?),
            CmpOp::NotEq => Ok(a.len() != b.len() || !self.is_subset(a, b, depth)?),
            CmpOp::LtEq => self.is_subset(a, b, depth),
            CmpOp::Lt => Ok(a.len() < b.len() && self.is_subset(a, b, depth)?),
            // Gt/GtEq were swapped above, the rest are routed by operator class
            CmpOp::Gt | CmpOp::GtEq | CmpOp::Is | CmpOp::IsNot | CmpOp::In | CmpOp::NotIn => {
                Ok(false)
            }
        })
    }

    fn is_subset(&self, a: &SetValue, b: &SetValue, depth: usize) -> CompareResult {
        if a.len() > b.len() {
            return Ok(false);
        }
        for item in a {
            if self.position(b.iter(), item, depth)?.is_none() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn maps_equal(&self, a: &MapValue, b: &MapValue, depth: usize) -> CompareResult {
        if a.len() != b.len() {
            return Ok(false);
        }
        for (key, value) in a.iter() {
            let Some(other) = self.lookup(b, key, depth)? else {
                return Ok(false);
            };
            if !self.element_eq(value, other, depth)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Value stored under a key equal to `key`.
    fn lookup<'m>(
        &self,
        map: &'m MapValue,
        key: &Value,
        depth: usize,
    ) -> Result<Option<&'m Value>, CompareError> {
        for (candidate, value) in map.iter() {
            if self.element_eq(candidate, key, depth)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Index of the first item equal to `needle` (shared storage counts).
    pub(crate) fn position<'v>(
        &self,
        items: impl IntoIterator<Item = &'v Value>,
        needle: &Value,
        depth: usize,
    ) -> Result<Option<usize>, CompareError> {
        for (index, item) in items.into_iter().enumerate() {
            if self.element_eq(item, needle, depth)? {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }
}

/// Numbers compare through their exact canonical forms.
fn relate_numbers(left: &Value, right: &Value, domain: NumericDomain, op: CmpOp) -> CompareResult {
    let a = to_canonical(left, domain)?;
    let b = to_canonical(right, domain)?;
    Ok(a.partial_cmp(&b).is_some_and(|ordering| op.holds_for(ordering)))
}

fn complex_parts(value: &Value) -> (Value, Value) {
    match value {
        Value::Complex(c) => (Value::Float(c.re), Value::Float(c.im)),
        other => (other.clone(), Value::Int(0)),
    }
}

/// Operands of unrelated types are never equal and never ordered.
fn unrelated(left: &Value, right: &Value, op: CmpOp) -> CompareResult {
    match op {
        CmpOp::Eq => Ok(false),
        CmpOp::NotEq => Ok(true),
        _ => Err(unsupported(op, left, right)),
    }
}

#[cold]
fn unsupported(op: CmpOp, left: &Value, right: &Value) -> CompareError {
    tracing::debug!(
        %op,
        left = left.type_name(),
        right = right.type_name(),
        "unsupported comparison"
    );
    not_supported(op, left.type_name(), right.type_name())
}
