use super::*;
use othello_core::GameState;

fn state(diagram: &str, to_move: Player) -> GameState {
    GameState::from_diagram(diagram, to_move).unwrap()
}

/// The 8x8 opening plus extra discs given as (row, col, player).
fn opening_with(extra: &[(usize, usize, Player)]) -> GameState {
    let mut board = GameState::startpos().board().clone();
    for &(row, col, player) in extra {
        board.set(Position::new(row, col), player.cell());
    }
    GameState::with_board(board, Player::Black)
}

#[test]
fn test_startpos_is_balanced() {
    let start = GameState::startpos();
    assert_eq!(evaluate(&start, Player::Black), 0);
    assert_eq!(evaluate(&start, Player::White), 0);
    assert_eq!(positional_score(start.board(), Player::Black), 0);
}

#[test]
fn test_material_is_inverted_in_the_opening() {
    let mut s = GameState::startpos();
    assert!(s.apply_move(Position::new(2, 3)));
    // Black 4, White 1: ahead on discs, which the opening heuristic dislikes
    assert_eq!(material_differential(&s, Player::Black), 3);
    assert_eq!(evaluate(&s, Player::Black), -3);
    assert_eq!(evaluate(&s, Player::White), 3);
}

#[test]
fn test_phase_threshold_is_one_third_of_the_board() {
    let twenty_one = state(
        "
        ........
        ...O....
        ..XXXX..
        ..XOOX..
        ..XOOX..
        ..XXXX..
        ..OOOO..
        ........
        ",
        Player::Black,
    );
    assert_eq!(twenty_one.count_tokens(), (12, 9));
    assert_eq!(evaluate(&twenty_one, Player::Black), -3);

    let twenty_two = state(
        "
        ........
        ...OO...
        ..XXXX..
        ..XOOX..
        ..XOOX..
        ..XXXX..
        ..OOOO..
        ........
        ",
        Player::Black,
    );
    assert_eq!(twenty_two.count_tokens(), (12, 10));
    assert_eq!(evaluate(&twenty_two, Player::Black), 2);
}

#[test]
fn test_finished_game_scores() {
    let black_wins = state("XXXX/XXXX/XXXX/XXXX", Player::White);
    assert!(black_wins.is_finished());
    assert_eq!(evaluate(&black_wins, Player::Black), WIN_SCORE);
    assert_eq!(evaluate(&black_wins, Player::White), LOSS_SCORE);

    let draw = state("XXXX/XXXX/OOOO/OOOO", Player::Black);
    assert!(draw.is_finished());
    assert_eq!(evaluate(&draw, Player::Black), DRAW_SCORE);
    assert_eq!(evaluate(&draw, Player::White), DRAW_SCORE);
}

#[test]
fn test_corner_bonus() {
    let s = opening_with(&[(0, 0, Player::Black)]);
    assert_eq!(positional_score(s.board(), Player::Black), 9);
    // Material 3-2 is inverted in the opening
    assert_eq!(evaluate(&s, Player::Black), 8);
    assert_eq!(evaluate(&s, Player::White), -8);
}

#[test]
fn test_x_square_penalty_next_to_open_corner() {
    let s = opening_with(&[(1, 1, Player::Black)]);
    assert_eq!(positional_score(s.board(), Player::Black), -6);
    assert_eq!(evaluate(&s, Player::Black), -7);
}

#[test]
fn test_x_square_penalty_lifted_once_engine_holds_corner() {
    let s = opening_with(&[(0, 0, Player::Black), (0, 1, Player::Black)]);
    // corner 9 + edge 2 + flank 2, no penalty from Black's point of view
    assert_eq!(positional_score(s.board(), Player::Black), 13);
    assert_eq!(evaluate(&s, Player::Black), 11);
    // From White's point of view the corner is not its own, so b1 is penalised
    assert_eq!(positional_score(s.board(), Player::White), -7);
    assert_eq!(evaluate(&s, Player::White), -5);
}

#[test]
fn test_edge_bonus() {
    let s = opening_with(&[(0, 3, Player::White)]);
    assert_eq!(positional_score(s.board(), Player::White), 2);
    assert_eq!(positional_score(s.board(), Player::Black), -2);
    assert_eq!(evaluate(&s, Player::White), 1);
}

#[test]
fn test_flank_bonus_needs_an_occupied_corner() {
    let open = opening_with(&[(0, 6, Player::White)]);
    // g1 is an edge cell and an X-square of the empty h1 corner
    assert_eq!(positional_score(open.board(), Player::White), 2 - 6);

    let taken = opening_with(&[(0, 6, Player::White), (0, 7, Player::Black)]);
    // h1 belongs to Black: 9 for Black; g1 earns edge + flank and still the
    // X-square penalty since the corner is not White's
    assert_eq!(positional_score(taken.board(), Player::White), (2 + 2 - 6) - 9);
}

#[test]
fn test_outcome_scores_dominate_heuristics() {
    let full_edges = state(
        "
        OXXXXXXO
        X......X
        X..XO..X
        X..OX..X
        X......X
        X......X
        X......X
        OXXXXXXO
        ",
        Player::Black,
    );
    let heuristic = evaluate(&full_edges, Player::Black);
    assert!(heuristic.abs() < WIN_SCORE / 100);
}
