use crate::error::ParseError;
use crate::types::*;

/// Smallest and largest supported board edge. Columns are lettered, so 26 is the cap.
pub const MIN_SIZE: usize = 4;
pub const MAX_SIZE: usize = 26;

/// Rectangular grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Cell at `pos`; out-of-bounds addresses read as empty.
    #[inline]
    pub fn get(&self, pos: Position) -> Cell {
        if self.in_bounds(pos) {
            self.cells[pos.row * self.cols + pos.col]
        } else {
            Cell::Empty
        }
    }

    pub fn owner(&self, pos: Position) -> Option<Player> {
        self.get(pos).owner()
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        debug_assert!(self.in_bounds(pos), "set outside board: {pos:?}");
        if self.in_bounds(pos) {
            self.cells[pos.row * self.cols + pos.col] = cell;
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    pub fn count(&self, player: Player) -> u32 {
        let target = player.cell();
        self.cells.iter().filter(|&&c| c == target).count() as u32
    }

    /// The same board with every disc changed to the other color.
    pub fn with_colors_swapped(&self) -> Board {
        let cells = self
            .cells
            .iter()
            .map(|c| match c {
                Cell::Empty => Cell::Empty,
                Cell::Black => Cell::White,
                Cell::White => Cell::Black,
            })
            .collect();
        Board {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

/// A game in progress: the board plus the player in turn.
///
/// After every move the turn goes to the opponent unless the opponent has no
/// legal move, in which case it comes straight back (a pass). As a result
/// `legal_moves` is empty exactly when the game is finished.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    player_in_turn: Player,
}

impl GameState {
    /// Standard opening position on a `size` x `size` board.
    pub fn new(size: usize) -> Result<Self, ParseError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) || size % 2 != 0 {
            return Err(ParseError::InvalidSize { size });
        }
        let mut board = Board::empty(size, size);
        let m = size / 2;
        board.set(Position::new(m - 1, m - 1), Cell::White);
        board.set(Position::new(m - 1, m), Cell::Black);
        board.set(Position::new(m, m - 1), Cell::Black);
        board.set(Position::new(m, m), Cell::White);
        Ok(GameState {
            board,
            player_in_turn: Player::Black,
        })
    }

    /// 8x8 opening position, Black to move.
    pub fn startpos() -> Self {
        let size = 8;
        let mut board = Board::empty(size, size);
        board.set(Position::new(3, 3), Cell::White);
        board.set(Position::new(3, 4), Cell::Black);
        board.set(Position::new(4, 3), Cell::Black);
        board.set(Position::new(4, 4), Cell::White);
        GameState {
            board,
            player_in_turn: Player::Black,
        }
    }

    /// Wraps an arbitrary board. If `to_move` cannot move but the opponent
    /// can, the turn is passed immediately.
    pub fn with_board(board: Board, to_move: Player) -> Self {
        let mut state = GameState {
            board,
            player_in_turn: to_move,
        };
        state.settle_turn();
        state
    }

    /// Parses a board diagram: one line (or `/`-separated group) per row,
    /// `X`/`B` for black, `O`/`W` for white, `.`/`-` for empty. Whitespace
    /// inside a row is ignored.
    pub fn from_diagram(diagram: &str, to_move: Player) -> Result<Self, ParseError> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for line in diagram.split(['\n', '/']) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row_idx = rows.len();
            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let cell = Cell::from_char(ch).ok_or(ParseError::InvalidCellCharacter {
                    character: ch,
                    row: row_idx,
                })?;
                row.push(cell);
            }
            rows.push(row);
        }

        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height < MIN_SIZE || height > MAX_SIZE {
            return Err(ParseError::InvalidSize { size: height });
        }
        if width < MIN_SIZE || width > MAX_SIZE {
            return Err(ParseError::InvalidSize { size: width });
        }

        let mut board = Board::empty(height, width);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::RaggedDiagram {
                    row: r,
                    got: row.len(),
                    expected: width,
                });
            }
            for (c, &cell) in row.iter().enumerate() {
                board.set(Position::new(r, c), cell);
            }
        }

        Ok(GameState::with_board(board, to_move))
    }

    /// Renders the board in the diagram format accepted by `from_diagram`.
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(self.board.cell_count() + self.board.rows());
        for row in 0..self.board.rows() {
            for col in 0..self.board.cols() {
                out.push(self.board.get(Position::new(row, col)).to_char());
            }
            out.push('\n');
        }
        out
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mover(&self) -> Player {
        self.player_in_turn
    }

    /// Disc counts as `(black, white)`.
    pub fn count_tokens(&self) -> (u32, u32) {
        (self.board.count(Player::Black), self.board.count(Player::White))
    }

    /// True iff neither side has a legal move.
    pub fn is_finished(&self) -> bool {
        !self.has_legal_move(self.player_in_turn) && !self.has_legal_move(self.player_in_turn.opponent())
    }

    /// Winner of a finished game, `None` for a draw or a game still running.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_finished() {
            return None;
        }
        let (black, white) = self.count_tokens();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Legal moves for the player in turn, in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.legal_moves_for(self.player_in_turn)
    }

    pub fn legal_moves_for(&self, player: Player) -> Vec<Position> {
        self.board
            .positions()
            .filter(|&pos| self.is_legal_for(pos, player))
            .collect()
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        self.board.positions().any(|pos| self.is_legal_for(pos, player))
    }

    pub fn is_legal(&self, pos: Position) -> bool {
        self.is_legal_for(pos, self.player_in_turn)
    }

    fn is_legal_for(&self, pos: Position, player: Player) -> bool {
        if !self.board.in_bounds(pos) || self.board.get(pos) != Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.flips_in_direction(pos, player, dr, dc) > 0)
    }

    /// Number of opponent discs bracketed between `pos` and a disc of
    /// `player` along (dr, dc). Zero when the line is not closed.
    fn flips_in_direction(&self, pos: Position, player: Player, dr: isize, dc: isize) -> usize {
        let own = player.cell();
        let other = player.opponent().cell();
        let mut run = 0;
        let mut cur = pos;
        loop {
            cur = match cur.offset(dr, dc) {
                Some(p) if self.board.in_bounds(p) => p,
                _ => return 0,
            };
            match self.board.get(cur) {
                c if c == other => run += 1,
                c if c == own => return run,
                _ => return 0,
            }
        }
    }

    /// Places a disc for the player in turn and flips every bracketed line.
    /// Returns false, leaving the state untouched, if the move is not legal.
    pub fn apply_move(&mut self, pos: Position) -> bool {
        if !self.is_legal(pos) {
            return false;
        }
        let player = self.player_in_turn;

        for (dr, dc) in DIRECTIONS {
            let run = self.flips_in_direction(pos, player, dr, dc);
            let mut cur = pos;
            for _ in 0..run {
                // run > 0 guarantees every step stays on the board
                if let Some(next) = cur.offset(dr, dc) {
                    self.board.set(next, player.cell());
                    cur = next;
                }
            }
        }
        self.board.set(pos, player.cell());

        self.player_in_turn = player.opponent();
        self.settle_turn();
        true
    }

    /// Hands the turn to the opponent without placing a disc.
    pub fn pass_turn(&mut self) {
        self.player_in_turn = self.player_in_turn.opponent();
    }

    fn settle_turn(&mut self) {
        if !self.has_legal_move(self.player_in_turn)
            && self.has_legal_move(self.player_in_turn.opponent())
        {
            self.pass_turn();
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
