use crate::{board::GameState, error::ParseError, types::*};

/// Column letter followed by the 1-based row: `(2, 3)` is `d3`.
pub fn position_to_notation(pos: Position) -> String {
    let col = if pos.col < 26 {
        (b'a' + pos.col as u8) as char
    } else {
        '?'
    };
    format!("{}{}", col, pos.row + 1)
}

/// Parses a square such as `d3` (case-insensitive). Bounds are not checked.
pub fn parse_position(text: &str) -> Result<Position, ParseError> {
    let invalid = || ParseError::InvalidSquare {
        text: text.to_string(),
    };
    let mut chars = text.trim().chars();
    let letter = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
    if !letter.is_ascii_lowercase() {
        return Err(invalid());
    }
    let row: usize = chars.as_str().parse().map_err(|_| invalid())?;
    if row == 0 {
        return Err(invalid());
    }
    Ok(Position::new(row - 1, (letter as u8 - b'a') as usize))
}

/// Parses a square and checks it lies on the board of `state`.
pub fn parse_move(state: &GameState, text: &str) -> Result<Position, ParseError> {
    let pos = parse_position(text)?;
    let board = state.board();
    if !board.in_bounds(pos) {
        return Err(ParseError::OutOfBounds {
            position: pos,
            rows: board.rows(),
            cols: board.cols(),
        });
    }
    Ok(pos)
}

/// Builds a position from protocol arguments:
/// `startpos [size N] [moves m1 m2 ...]`.
///
/// Every move must be legal when it is replayed; the first illegal one
/// aborts with an error.
pub fn position_from_args(args: &[&str]) -> Result<GameState, ParseError> {
    let mut i = 0;
    if args.first() == Some(&"startpos") {
        i += 1;
    }

    let mut size = 8;
    if args.get(i) == Some(&"size") {
        let raw = args.get(i + 1).copied().unwrap_or("");
        size = raw.parse().map_err(|_| ParseError::InvalidNumber {
            text: raw.to_string(),
        })?;
        i += 2;
    }
    let mut state = GameState::new(size)?;

    if args.get(i) == Some(&"moves") {
        for txt in &args[i + 1..] {
            let pos = parse_move(&state, txt)?;
            if !state.apply_move(pos) {
                return Err(ParseError::IllegalMove { position: pos });
            }
        }
    }
    Ok(state)
}
