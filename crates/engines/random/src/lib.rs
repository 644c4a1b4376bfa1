//! Random Move Othello Engine
//!
//! Picks uniformly among the legal moves. Used as the floor in tournaments
//! (any searching engine should beat it) and to drive random games in tests.

use othello_core::{Engine, GameState, SearchError, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An Othello engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Reproducible move choices: the same seed replays the same games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState, _limits: SearchLimits) -> Result<SearchResult, SearchError> {
        let moves = state.legal_moves();
        let best_move = *moves.choose(&mut self.rng).ok_or(SearchError::NoLegalMoves)?;

        Ok(SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes: 1,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}
