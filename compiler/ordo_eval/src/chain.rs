//! Chained comparisons: `a < b <= c` means `a < b and b <= c`, with each
//! operand evaluated at most once and evaluation stopping at the first
//! false link.

use smallvec::SmallVec;

use ordo_ir::CmpOp;
use ordo_value::{CompareError, CompareResult, Value};

use crate::compare::Comparator;

/// Right-hand operand of a chain link.
///
/// `Deferred` operands run only when the chain reaches them, which makes
/// short-circuiting observable.
pub enum Operand<'a> {
    Value(Value),
    Deferred(Box<dyn FnOnce() -> Result<Value, CompareError> + 'a>),
}

impl<'a> Operand<'a> {
    /// Operand produced by `f` when needed.
    pub fn deferred(f: impl FnOnce() -> Result<Value, CompareError> + 'a) -> Self {
        Operand::Deferred(Box::new(f))
    }

    fn evaluate(self) -> Result<Value, CompareError> {
        match self {
            Operand::Value(value) => Ok(value),
            Operand::Deferred(f) => f(),
        }
    }
}

impl From<Value> for Operand<'_> {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

impl std::fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Operand::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// `first (op operand)*`, built link by link.
///
/// Most chains in source have two or three links.
#[derive(Debug)]
pub struct ChainExpression<'a> {
    first: Value,
    links: SmallVec<[(CmpOp, Operand<'a>); 3]>,
}

impl<'a> ChainExpression<'a> {
    pub fn new(first: impl Into<Value>) -> Self {
        Self {
            first: first.into(),
            links: SmallVec::new(),
        }
    }

    /// Append `op operand`.
    #[must_use]
    pub fn then(mut self, op: CmpOp, operand: impl Into<Operand<'a>>) -> Self {
        self.links.push((op, operand.into()));
        self
    }

    /// Number of comparisons in the chain.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Evaluate with `comparator`, consuming the chain.
    pub fn evaluate(self, comparator: &Comparator) -> CompareResult {
        comparator.chain(self.first, self.links)
    }
}

enum ChainState {
    /// Every link so far held; `left` is the last operand evaluated.
    Active { left: Value },
    Done(bool),
}

impl Comparator {
    /// Evaluate `first op1 x1 op2 x2 ...` left to right.
    ///
    /// Stops pulling links after the first false comparison, so later
    /// operands are never evaluated. An empty chain is true.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn chain<'a, I>(&self, first: Value, links: I) -> CompareResult
    where
        I: IntoIterator<Item = (CmpOp, Operand<'a>)>,
    {
        let mut links = links.into_iter().enumerate();
        let mut state = ChainState::Active { left: first };
        loop {
            state = match state {
                ChainState::Done(result) => return Ok(result),
                ChainState::Active { left } => match links.next() {
                    None => ChainState::Done(true),
                    Some((index, (op, operand))) => {
                        let right = operand.evaluate()?;
                        if self.compare(&left, &right, op)? {
                            ChainState::Active { left: right }
                        } else {
                            tracing::trace!(index, %op, "chain short-circuited");
                            ChainState::Done(false)
                        }
                    }
                },
            };
        }
    }
}
