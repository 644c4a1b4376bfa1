//! Static evaluation of Othello positions.
//!
//! Scores are always from the point of view of a fixed engine identity,
//! whoever is to move. Finished games get exact outcome scores; everything
//! else gets a material term (inverted in the opening) plus positional terms
//! built from the board's corners and edges.

use othello_core::{Board, Player, Position, Rules};

/// Score of a finished game the engine has won.
pub const WIN_SCORE: i32 = 1_000_000;
/// Score of a finished game the engine has lost.
pub const LOSS_SCORE: i32 = -WIN_SCORE;
/// Score of a finished game with equal disc counts.
pub const DRAW_SCORE: i32 = 0;

const CORNER_WEIGHT: i32 = 9;
const X_SQUARE_PENALTY: i32 = 6;
const EDGE_WEIGHT: i32 = 2;
const CORNER_FLANK_BONUS: i32 = 2;

/// Evaluates `state` from `engine`'s perspective.
///
/// Returns one of `WIN_SCORE`, `LOSS_SCORE`, `DRAW_SCORE` when the game is
/// over, otherwise a heuristic score far smaller in magnitude than the
/// outcome scores.
pub fn evaluate<S: Rules>(state: &S, engine: Player) -> i32 {
    let material = material_differential(state, engine);
    if state.is_finished() {
        return outcome_score(material);
    }

    let board = state.board();
    let (black, white) = state.count_tokens();
    let placed = (black + white) as usize;

    // Fewer discs is better while less than a third of the board is filled
    let material = if 3 * placed < board.cell_count() {
        -material
    } else {
        material
    };

    material + positional_score(board, engine)
}

/// Own discs minus opponent discs.
pub fn material_differential<S: Rules>(state: &S, engine: Player) -> i32 {
    let (black, white) = state.count_tokens();
    let diff = black as i32 - white as i32;
    match engine {
        Player::Black => diff,
        Player::White => -diff,
    }
}

fn outcome_score(differential: i32) -> i32 {
    match differential.cmp(&0) {
        std::cmp::Ordering::Greater => WIN_SCORE,
        std::cmp::Ordering::Less => LOSS_SCORE,
        std::cmp::Ordering::Equal => DRAW_SCORE,
    }
}

/// A corner cell and the direction pointing into the board from it.
#[derive(Clone, Copy, Debug)]
struct Corner {
    pos: Position,
    dr: isize,
    dc: isize,
}

impl Corner {
    /// The two orthogonal neighbours and the diagonal one.
    fn x_squares(self) -> impl Iterator<Item = Position> {
        [
            self.pos.offset(self.dr, 0),
            self.pos.offset(0, self.dc),
            self.pos.offset(self.dr, self.dc),
        ]
        .into_iter()
        .flatten()
    }

    /// The two edge cells touching the corner.
    fn flanks(self) -> impl Iterator<Item = Position> {
        [self.pos.offset(self.dr, 0), self.pos.offset(0, self.dc)]
            .into_iter()
            .flatten()
    }
}

fn corners(board: &Board) -> [Corner; 4] {
    let last_row = board.rows() - 1;
    let last_col = board.cols() - 1;
    [
        Corner {
            pos: Position::new(0, 0),
            dr: 1,
            dc: 1,
        },
        Corner {
            pos: Position::new(0, last_col),
            dr: 1,
            dc: -1,
        },
        Corner {
            pos: Position::new(last_row, 0),
            dr: -1,
            dc: 1,
        },
        Corner {
            pos: Position::new(last_row, last_col),
            dr: -1,
            dc: -1,
        },
    ]
}

fn is_edge(board: &Board, pos: Position) -> bool {
    pos.row == 0 || pos.col == 0 || pos.row + 1 == board.rows() || pos.col + 1 == board.cols()
}

fn is_corner(board: &Board, pos: Position) -> bool {
    (pos.row == 0 || pos.row + 1 == board.rows()) && (pos.col == 0 || pos.col + 1 == board.cols())
}

/// Corner, X-square and edge terms: engine total minus opponent total.
pub fn positional_score(board: &Board, engine: Player) -> i32 {
    if board.rows() < 2 || board.cols() < 2 {
        return 0;
    }

    let mut totals = [0i32; 2];
    let mut credit = |pos: Position, weight: i32| {
        if let Some(owner) = board.owner(pos) {
            totals[owner.idx()] += weight;
        }
    };

    for corner in corners(board) {
        let corner_owner = board.owner(corner.pos);
        credit(corner.pos, CORNER_WEIGHT);

        // Next to a corner the engine does not hold yet
        if corner_owner != Some(engine) {
            for pos in corner.x_squares() {
                credit(pos, -X_SQUARE_PENALTY);
            }
        }

        // A taken corner makes the cells beside it safe
        if corner_owner.is_some() {
            for pos in corner.flanks() {
                credit(pos, CORNER_FLANK_BONUS);
            }
        }
    }

    for pos in board.positions() {
        if is_edge(board, pos) && !is_corner(board, pos) {
            credit(pos, EDGE_WEIGHT);
        }
    }

    totals[engine.idx()] - totals[engine.opponent().idx()]
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
