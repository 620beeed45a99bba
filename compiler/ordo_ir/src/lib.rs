//! Ordo IR - operator vocabulary shared by the value and evaluator crates.
//!
//! The comparison engine has no front end, so the only IR it needs is the
//! closed set of comparison operators a chained relational expression can
//! contain.

mod operators;

pub use operators::{CmpOp, OpClass};
