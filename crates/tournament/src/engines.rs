//! Engine registry for the command line.

use alphabeta_engine::AlphaBetaEngine;
use othello_core::Engine;
use random_engine::RandomEngine;

use crate::error::TournamentError;

/// Engine names accepted by [`create_engine`].
pub const KNOWN_ENGINES: [&str; 3] = ["alphabeta", "minimax", "random"];

/// Builds an engine by name. `seed` only affects engines that use randomness.
pub fn create_engine(name: &str, seed: Option<u64>) -> Result<Box<dyn Engine>, TournamentError> {
    match name.to_lowercase().as_str() {
        "alphabeta" | "ab" => Ok(Box::new(AlphaBetaEngine::new())),
        "minimax" => Ok(Box::new(AlphaBetaEngine::unpruned())),
        "random" => Ok(match seed {
            Some(seed) => Box::new(RandomEngine::seeded(seed)),
            None => Box::new(RandomEngine::new()),
        }),
        _ => Err(TournamentError::UnknownEngine {
            name: name.to_string(),
            known: KNOWN_ENGINES.join(", "),
        }),
    }
}
