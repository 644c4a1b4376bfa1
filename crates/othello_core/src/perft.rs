use crate::board::GameState;

/// Pure perft node count.
/// Counts the leaves of the legal-move tree `depth` plies below `state`.
/// Passes are folded into the move that caused them, and finished games
/// count as a single leaf.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        return 1;
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut child = state.clone();
            if child.apply_move(mv) {
                perft(&child, depth - 1)
            } else {
                0
            }
        })
        .sum()
}
