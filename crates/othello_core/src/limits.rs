//! Search limits passed explicitly into every decision.
//!
//! There is no process-wide depth setting: each call carries its own limits,
//! so decisions running side by side (for instance in tests) never interfere.

use serde::{Deserialize, Serialize};

/// Default horizon in plies.
pub const DEFAULT_MAX_DEPTH: u32 = 7;

/// Limits that bound a single search.
///
/// Depth is counted from `root_depth` at the decision root and grows by one
/// per ply. A node whose depth exceeds `max_depth` is scored by the evaluator
/// instead of being expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Deepest depth that is still expanded
    pub max_depth: u32,
    /// Depth assigned to the root node
    pub root_depth: u32,
    /// Alpha-beta cutoffs; when false the search is plain minimax
    pub pruning: bool,
}

impl SearchLimits {
    /// Alpha-beta search with the given horizon.
    pub fn depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Plain minimax with the given horizon.
    pub fn unpruned(max_depth: u32) -> Self {
        Self {
            max_depth,
            pruning: false,
            ..Self::default()
        }
    }

    pub fn with_pruning(self, pruning: bool) -> Self {
        Self { pruning, ..self }
    }

    pub fn with_root_depth(self, root_depth: u32) -> Self {
        Self { root_depth, ..self }
    }

    /// True if a node at `depth` lies beyond the horizon.
    #[inline]
    pub fn beyond_horizon(&self, depth: u32) -> bool {
        depth > self.max_depth
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            root_depth: 0,
            pruning: true,
        }
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
