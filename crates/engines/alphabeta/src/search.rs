//! Depth-limited minimax with alpha-beta pruning.
//!
//! A single recursive procedure plays both roles. At every node the role is
//! derived from whether the side to move is the engine itself (maximizing) or
//! its opponent (minimizing), so consecutive moves by the same side after a
//! pass are handled without special cases.

use std::fmt;

use othello_core::{notation::position_to_notation, Player, Position, Rules, SearchError, SearchLimits};
use tracing::{debug, trace};

use crate::eval::evaluate;

/// Lower search bound. Symmetric with `POS_INFINITY` so negating either is safe.
pub const NEG_INFINITY: i32 = -i32::MAX;
/// Upper search bound.
pub const POS_INFINITY: i32 = i32::MAX;

/// Utility backed up from a subtree, with the move that achieves it.
/// `mv` is `None` only for leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilMove {
    pub utility: i32,
    pub mv: Option<Position>,
}

impl UtilMove {
    fn leaf(utility: i32) -> Self {
        Self { utility, mv: None }
    }
}

impl fmt::Display for UtilMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mv {
            Some(mv) => write!(f, "utility {}, move {}", self.utility, position_to_notation(mv)),
            None => write!(f, "utility {}, move none", self.utility),
        }
    }
}

/// The result of a complete decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Position,
    /// Backed-up utility of `best_move` from the engine's perspective
    pub score: i32,
    /// Nodes visited, root included
    pub nodes: u64,
    /// Beta and alpha cutoffs taken
    pub cutoffs: u64,
}

/// Picks a move for the side to move, searching on its behalf.
pub fn decide<S: Rules>(state: &S, limits: SearchLimits) -> Result<SearchOutcome, SearchError> {
    decide_move(state, state.current_mover(), limits)
}

/// Picks a move for the side to move in `state`, scoring every leaf from
/// `engine`'s perspective.
///
/// # Errors
/// * `NoLegalMoves` if the side to move cannot play.
/// * `RulesInconsistency` if the rules engine rejects one of its own moves.
/// * `NoMoveSelected` if the root produced no move (for example when
///   `limits.root_depth` is already past the horizon).
pub fn decide_move<S: Rules>(
    state: &S,
    engine: Player,
    limits: SearchLimits,
) -> Result<SearchOutcome, SearchError> {
    if state.legal_moves().is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let mut searcher = Searcher::new(limits);
    let root = searcher.search(state, NEG_INFINITY, POS_INFINITY, limits.root_depth, engine)?;
    let best_move = root.mv.ok_or(SearchError::NoMoveSelected)?;

    debug!(
        engine = %engine,
        nodes = searcher.nodes(),
        cutoffs = searcher.cutoffs(),
        "decided on {}",
        root
    );

    Ok(SearchOutcome {
        best_move,
        score: root.utility,
        nodes: searcher.nodes(),
        cutoffs: searcher.cutoffs(),
    })
}

/// Search state for one decision: the limits it runs under and its counters.
#[derive(Debug, Clone)]
pub struct Searcher {
    limits: SearchLimits,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            nodes: 0,
            cutoffs: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// Recursive minimax with alpha-beta bounds.
    ///
    /// Every child is explored on its own clone of `state`, so siblings never
    /// see each other's moves. Moves are tried in the order the rules engine
    /// lists them and a later move only replaces the current best when it is
    /// strictly better, so ties go to the earliest move.
    pub fn search<S: Rules>(
        &mut self,
        state: &S,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
        engine: Player,
    ) -> Result<UtilMove, SearchError> {
        self.nodes += 1;

        if state.is_finished() || self.limits.beyond_horizon(depth) {
            return Ok(UtilMove::leaf(evaluate(state, engine)));
        }

        let maximizing = state.current_mover() == engine;
        let mut best = UtilMove::leaf(if maximizing { NEG_INFINITY } else { POS_INFINITY });

        for mv in state.legal_moves() {
            let mut child = state.clone();
            if !child.apply_move(mv) {
                return Err(SearchError::RulesInconsistency { position: mv });
            }

            let reply = self.search(&child, alpha, beta, depth + 1, engine)?;

            if maximizing {
                if reply.utility > best.utility || best.mv.is_none() {
                    best = UtilMove {
                        utility: reply.utility,
                        mv: Some(mv),
                    };
                    alpha = alpha.max(best.utility);
                }
                if self.limits.pruning && best.utility >= beta {
                    self.cutoffs += 1;
                    trace!(depth, "beta cutoff: {}", best);
                    return Ok(best);
                }
            } else {
                if reply.utility < best.utility || best.mv.is_none() {
                    best = UtilMove {
                        utility: reply.utility,
                        mv: Some(mv),
                    };
                    beta = beta.min(best.utility);
                }
                if self.limits.pruning && best.utility <= alpha {
                    self.cutoffs += 1;
                    trace!(depth, "alpha cutoff: {}", best);
                    return Ok(best);
                }
            }
        }

        trace!(depth, maximizing, "{}", best);
        Ok(best)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
