//! Alpha-Beta Othello Engine
//!
//! Depth-limited minimax with alpha-beta pruning over a positional evaluation.
//! This is the reference engine the baselines are measured against.

mod eval;
mod search;

use othello_core::{Engine, GameState, Position, SearchError, SearchLimits, SearchResult};

/// Othello engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax with alpha-beta pruning, moves in natural row-major order
/// - Exact win/loss/draw scores at finished positions
/// - Material with an opening inversion plus corner, X-square and edge terms
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaEngine {
    /// Node counter for statistics
    nodes: u64,
    /// Ignore the pruning flag of incoming limits and run plain minimax
    unpruned: bool,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            unpruned: false,
        }
    }

    /// Same search without cutoffs. Much slower, same moves.
    pub fn unpruned() -> Self {
        Self {
            nodes: 0,
            unpruned: true,
        }
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> Result<SearchResult, SearchError> {
        let limits = if self.unpruned {
            limits.with_pruning(false)
        } else {
            limits
        };

        self.nodes = 0;
        let outcome = search::decide(state, limits)?;
        self.nodes = outcome.nodes;

        Ok(SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: limits.max_depth,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        if self.unpruned {
            "Minimax v1.0"
        } else {
            "AlphaBeta v1.0"
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Chooses a move for the side to move with the default search limits.
///
/// Must only be called on a position where the side to move has a legal move.
pub fn decide_move(state: &GameState) -> Result<Position, SearchError> {
    search::decide(state, SearchLimits::default()).map(|outcome| outcome.best_move)
}

// Re-export for direct use if needed
pub use eval::{evaluate, material_differential, positional_score, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use search::{decide, decide_move as decide_move_for, SearchOutcome, Searcher, UtilMove, NEG_INFINITY, POS_INFINITY};
