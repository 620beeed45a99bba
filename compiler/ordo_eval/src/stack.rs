//! Stack headroom for recursive container comparison.
//!
//! Comparing two nested lists, tuples, sets or maps recurses once per level
//! of nesting, and each level may also run coercion and element lookups.
//! Every level enters through `ensure_sufficient_stack`, which moves the rest
//! of the comparison onto a fresh segment when the current one runs short.
//! `CompareMode::max_depth` bounds how deep this can go.

/// Headroom kept below each container level before its elements compare.
#[cfg(not(target_arch = "wasm32"))]
const CONTAINER_RED_ZONE: usize = 100 * 1024;

/// Segment size for the levels that follow once headroom runs out.
#[cfg(not(target_arch = "wasm32"))]
const CONTAINER_SEGMENT: usize = 1024 * 1024;

/// Run one level of container comparison with enough stack for its elements.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(compare_level: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(CONTAINER_RED_ZONE, CONTAINER_SEGMENT, compare_level)
}

/// Without `stacker` the level runs in place and only `max_depth` guards it.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(compare_level: impl FnOnce() -> R) -> R {
    compare_level()
}
