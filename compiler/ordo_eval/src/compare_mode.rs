//! Comparison modes.
//!
//! The mode decides how deep container comparison may recurse before it
//! gives up with a recursion error. Enum dispatch keeps `Comparator` a plain
//! `Copy` value.

/// Comparison mode, determines the nesting limit via `max_depth`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompareMode {
    /// Runtime comparison: nesting is only bounded by memory on native targets.
    #[default]
    Interpret,
    /// Compile-time evaluation of constant comparisons, tightly bounded.
    ConstEval,
    /// Caller-chosen nesting limit.
    Bounded {
        /// Maximum container nesting depth.
        max_depth: usize,
    },
}

impl CompareMode {
    /// Maximum nesting depth, or `None` for unlimited (native `stacker` fallback).
    ///
    /// - `Interpret`: `None` on native, 200 on WASM
    /// - `ConstEval`: always 64
    /// - `Bounded`: the configured limit
    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        match self {
            Self::Interpret => {
                #[cfg(target_arch = "wasm32")]
                {
                    Some(200)
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    None
                }
            }
            Self::ConstEval => Some(64),
            Self::Bounded { max_depth } => Some(*max_depth),
        }
    }
}
