//! Ordo Eval - comparison semantics for Ordo runtime values.
//!
//! # Architecture
//!
//! - `coercion`: picks how a pair of operand types is compared and converts
//!   numbers into an exact canonical form
//! - `Comparator::compare`: every `CmpOp` on two values, recursing into
//!   containers under a `CompareMode` depth limit
//! - `Comparator::chain`: chained comparisons with lazy operands
//! - `Comparator::contains`: `in` / `not in`
//! - `Comparator::build_set` / `build_map`: hashability and deduplication
//!
//! The free functions use `Comparator::default()`.
//!
//! # Re-exports
//!
//! Value and error types come from `ordo_value`, operators from `ordo_ir`.

mod chain;
pub mod coercion;
mod collections;
mod compare;
mod compare_mode;
pub mod exact;
mod membership;
mod stack;

#[cfg(test)]
mod tests;

use std::sync::Once;

pub use chain::{ChainExpression, Operand};
pub use compare::Comparator;
pub use compare_mode::CompareMode;
pub use stack::ensure_sufficient_stack;

pub use ordo_ir::{CmpOp, OpClass};
pub use ordo_value::{CompareError, CompareErrorKind, CompareResult, Value};

/// Apply `op` to `left` and `right` in the default mode.
pub fn compare(left: &Value, right: &Value, op: CmpOp) -> CompareResult {
    Comparator::default().compare(left, right, op)
}

/// Evaluate the chain `first op1 x1 op2 x2 ...` in the default mode.
pub fn chain_evaluate<'a>(
    first: Value,
    links: impl IntoIterator<Item = (CmpOp, Operand<'a>)>,
) -> CompareResult {
    Comparator::default().chain(first, links)
}

/// `candidate in container` in the default mode.
pub fn contains(candidate: &Value, container: &Value) -> CompareResult {
    Comparator::default().contains(candidate, container)
}

/// Build a deduplicated set in the default mode.
pub fn build_set(items: Vec<Value>) -> Result<Value, CompareError> {
    Comparator::default().build_set(items)
}

/// Build a deduplicated frozen set in the default mode.
pub fn build_frozen_set(items: Vec<Value>) -> Result<Value, CompareError> {
    Comparator::default().build_frozen_set(items)
}

/// Build a map with unique keys in the default mode.
pub fn build_map(entries: Vec<(Value, Value)>) -> Result<Value, CompareError> {
    Comparator::default().build_map(entries)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=ordo_eval=debug` or
/// `RUST_LOG=ordo_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let tree = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            if let Err(err) = tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(tree)
                .try_init()
            {
                // The embedding host owns the global subscriber
                tracing::debug!(%err, "keeping existing global subscriber");
            }
        }
    });
}
