use std::path::PathBuf;

use othello_core::{ConfigError, Position, SearchError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("unknown engine {name:?} (expected one of: {known})")]
    UnknownEngine { name: String, known: String },

    #[error("{engine} failed to move in game {game}")]
    Search {
        engine: String,
        game: u32,
        #[source]
        source: SearchError,
    },

    #[error("{engine} played illegal move {position} in game {game}")]
    IllegalMove {
        engine: String,
        game: u32,
        position: Position,
    },

    #[error("opening move {position} was rejected in game {game}")]
    OpeningRejected { game: u32, position: Position },

    #[error("invalid board size {size}")]
    BoardSize { size: usize },

    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
