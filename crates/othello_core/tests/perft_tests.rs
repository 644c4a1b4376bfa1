use std::time::Instant;

use rayon::prelude::*;

use othello_core::{perft, GameState};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 100_000;

/// Published node counts from the standard 8x8 opening.
const STARTPOS_COUNTS: &[(u8, u64)] = &[
    (1, 4),
    (2, 12),
    (3, 56),
    (4, 244),
    (5, 1_396),
    (6, 8_200),
    (7, 55_092),
    (8, 390_216),
];

#[test]
fn perft_from_startpos() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let start = GameState::startpos();

    STARTPOS_COUNTS.par_iter().for_each(|&(depth, expected)| {
        if !full && expected > NODE_LIMIT {
            eprintln!(
                "Skipping depth {} (expected {} nodes); set {}=1 to run all.",
                depth, expected, FULL_PERFT_ENV
            );
            return;
        }
        let case_start = Instant::now();
        let got = perft(&start, depth);
        assert!(
            got == expected,
            "Perft mismatch at depth {}: expected {}, got {}",
            depth,
            expected,
            got
        );
        println!(
            "depth {} done: {} nodes in {:.3?}",
            depth,
            got,
            case_start.elapsed()
        );
    });
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&GameState::startpos(), 0), 1);
}

#[test]
fn perft_of_finished_game_is_one_leaf() {
    let finished = GameState::from_diagram(
        "
        XXXX
        XXXX
        XXXX
        XXXX
        ",
        othello_core::Player::White,
    )
    .unwrap();
    assert!(finished.is_finished());
    assert_eq!(perft(&finished, 3), 1);
}

#[test]
fn perft_small_board_is_symmetric_under_first_move() {
    // On a 6x6 board the four opening moves are symmetric, so the total is a
    // multiple of four at every depth.
    let start = GameState::new(6).unwrap();
    for depth in 1..=4 {
        assert_eq!(perft(&start, depth) % 4, 0, "depth {}", depth);
    }
}
