//! Error types shared by the rules engine, the engines and the front ends.

use thiserror::Error;

use crate::types::Position;

/// Failures of a move decision. None of these are recoverable: re-running the
/// same decision reproduces them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no legal moves in the position to decide on")]
    NoLegalMoves,

    #[error("rules engine rejected move {position} taken from its own legal moves")]
    RulesInconsistency { position: Position },

    #[error("search finished without selecting a move")]
    NoMoveSelected,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square '{text}'")]
    InvalidSquare { text: String },

    #[error("square {position} is outside a {rows}x{cols} board")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("expected a number, got '{text}'")]
    InvalidNumber { text: String },

    #[error("unsupported board size {size} (expected an even size between 4 and 26)")]
    InvalidSize { size: usize },

    #[error("board diagram row {row} has {got} cells, expected {expected}")]
    RaggedDiagram {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("invalid character '{character}' in board diagram row {row}")]
    InvalidCellCharacter { character: char, row: usize },

    #[error("illegal move {position}")]
    IllegalMove { position: Position },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}
