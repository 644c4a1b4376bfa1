//! The capability set a search needs from a rules engine.
//!
//! Engines are written against this trait rather than `GameState` directly so
//! they can be driven by any rules implementation, including hand-built game
//! trees in tests. `Clone` must produce an independent snapshot with the same
//! position and player in turn.

use crate::board::{Board, GameState};
use crate::types::{Player, Position};

pub trait Rules: Clone {
    /// True iff neither side has a legal move.
    fn is_finished(&self) -> bool;

    /// Legal moves for the side to move. The order is the enumeration order
    /// engines must respect.
    fn legal_moves(&self) -> Vec<Position>;

    /// Disc counts as `(black, white)`.
    fn count_tokens(&self) -> (u32, u32);

    fn current_mover(&self) -> Player;

    /// Plays `pos` for the side to move. Returns false if the move is not
    /// presently legal.
    fn apply_move(&mut self, pos: Position) -> bool;

    fn board(&self) -> &Board;
}

impl Rules for GameState {
    fn is_finished(&self) -> bool {
        GameState::is_finished(self)
    }

    fn legal_moves(&self) -> Vec<Position> {
        GameState::legal_moves(self)
    }

    fn count_tokens(&self) -> (u32, u32) {
        GameState::count_tokens(self)
    }

    fn current_mover(&self) -> Player {
        GameState::current_mover(self)
    }

    fn apply_move(&mut self, pos: Position) -> bool {
        GameState::apply_move(self, pos)
    }

    fn board(&self) -> &Board {
        GameState::board(self)
    }
}
