pub mod board;
pub mod config;
pub mod error;
pub mod limits;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use config::*;
pub use error::*;
pub use limits::*;
pub use notation::*;
pub use perft::perft;
pub use rules::Rules;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every Othello engine (alpha-beta, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The move chosen for the side to move
    pub best_move: Position,
    /// Backed-up utility from the engine's perspective
    pub score: i32,
    /// Horizon the search ran with
    pub depth: u32,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Trait that all engines must implement.
///
/// This allows the match runner and the line protocol to swap between the
/// alpha-beta engine and baselines without knowing which one they drive.
pub trait Engine: Send {
    /// Chooses a move for the side to move in `state`.
    ///
    /// # Errors
    /// `SearchError::NoLegalMoves` when the side to move has nothing to play;
    /// the other variants signal a broken rules engine.
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> Result<SearchResult, SearchError>;

    /// Returns the engine's name for protocol identification
    fn name(&self) -> &str;

    /// Returns the engine's author for protocol identification
    fn author(&self) -> &str {
        "othello-lab"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a protocol option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
