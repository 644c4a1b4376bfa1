use super::*;
use crate::match_runner::GameRecord;
use othello_core::{Player, SearchLimits};

fn scratch_file(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("othello-elo-{}-{}.json", name, std::process::id()))
}

fn config(board_size: usize, depth: u32) -> MatchConfig {
    MatchConfig {
        board_size,
        limits: SearchLimits::depth(depth),
        ..Default::default()
    }
}

fn game(black: u32, white: u32) -> GameRecord {
    let winner = match black.cmp(&white) {
        std::cmp::Ordering::Greater => Some(Player::Black),
        std::cmp::Ordering::Less => Some(Player::White),
        std::cmp::Ordering::Equal => None,
    };
    GameRecord {
        moves: Vec::new(),
        black_discs: black,
        white_discs: white,
        winner,
    }
}

/// A match in which the first entrant plays Black in every game.
fn match_of(games: &[(u32, u32)]) -> MatchResult {
    let mut result = MatchResult::new();
    for &(black, white) in games {
        result.record(&game(black, white), Player::Black);
    }
    result
}

#[test]
fn test_expected_score() {
    assert!((expected_score(DEFAULT_ELO, DEFAULT_ELO) - 0.5).abs() < 1e-9);
    assert!(expected_score(1900.0, 1500.0) > 0.9);
    let sum = expected_score(1620.0, 1480.0) + expected_score(1480.0, 1620.0);
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn test_entrants_are_keyed_by_board_and_depth() {
    let six = Entrant::new("AlphaBeta", &config(6, 3));
    let eight = Entrant::new("alphabeta", &config(8, 3));
    let deeper = Entrant::new("alphabeta", &config(6, 5));
    assert_ne!(six, eight);
    assert_ne!(six, deeper);
    assert_eq!(six.to_string(), "alphabeta@6x6:d3");

    let random = Entrant::new("random", &config(6, 3));
    assert_eq!(random.depth, None);
    assert_eq!(random, Entrant::new("random", &config(6, 7)));
    assert_eq!(random.to_string(), "random@6x6");
}

#[test]
fn test_sweep_moves_ratings_and_margins() {
    let mut tracker = EloTracker::new();
    let searcher = Entrant::new("alphabeta", &config(6, 3));
    let random = Entrant::new("random", &config(6, 3));

    tracker.update_ratings(&searcher, &random, &match_of(&[(30, 6), (20, 16)]));

    let a = tracker.rating(&searcher);
    let b = tracker.rating(&random);
    assert!(a.elo > DEFAULT_ELO);
    assert!((a.elo + b.elo - 2.0 * DEFAULT_ELO).abs() < 1e-9);
    assert_eq!(a.games, 2);
    assert_eq!(b.games, 2);
    assert_eq!(a.disc_margin, 28);
    assert_eq!(b.disc_margin, -28);
    assert!((a.average_margin() - 14.0).abs() < 1e-9);
    assert_eq!(tracker.history.len(), 1);
    assert!((tracker.history[0].elo_change - (a.elo - DEFAULT_ELO)).abs() < 1e-9);
}

#[test]
fn test_each_further_win_gains_less() {
    let mut tracker = EloTracker::new();
    let a = Entrant::new("alphabeta", &config(8, 4));
    let b = Entrant::new("random", &config(8, 4));

    tracker.update_ratings(&a, &b, &match_of(&[(40, 24)]));
    let first_gain = tracker.rating(&a).elo - DEFAULT_ELO;
    let before = tracker.rating(&a).elo;
    tracker.update_ratings(&a, &b, &match_of(&[(40, 24)]));
    let second_gain = tracker.rating(&a).elo - before;

    assert!((first_gain - K_FACTOR / 2.0).abs() < 1e-9);
    assert!(second_gain < first_gain);
}

#[test]
fn test_drawn_games_between_equals_change_nothing() {
    let mut tracker = EloTracker::new();
    let a = Entrant::new("alphabeta", &config(4, 2));
    let b = Entrant::new("minimax", &config(4, 2));
    tracker.update_ratings(&a, &b, &match_of(&[(8, 8), (8, 8)]));

    assert!((tracker.rating(&a).elo - DEFAULT_ELO).abs() < 1e-9);
    assert!((tracker.rating(&b).elo - DEFAULT_ELO).abs() < 1e-9);
    assert_eq!(tracker.rating(&a).disc_margin, 0);
}

#[test]
fn test_same_engine_on_two_boards_is_rated_separately() {
    let mut tracker = EloTracker::new();
    let small = Entrant::new("alphabeta", &config(6, 3));
    let large = Entrant::new("alphabeta", &config(8, 3));
    let random_small = Entrant::new("random", &config(6, 3));

    tracker.update_ratings(&small, &random_small, &match_of(&[(25, 11)]));

    assert!(tracker.rating(&small).elo > DEFAULT_ELO);
    assert_eq!(tracker.rating(&large), Rating::default());
    assert_eq!(tracker.entries.len(), 2);
}

#[test]
fn test_leaderboard_is_sorted_and_formatted() {
    let mut tracker = EloTracker::new();
    let a = Entrant::new("alphabeta", &config(6, 3));
    let b = Entrant::new("random", &config(6, 3));
    tracker.update_ratings(&b, &a, &match_of(&[(10, 26), (12, 24)]));

    let board = tracker.leaderboard();
    assert_eq!(board[0].entrant, a);
    assert_eq!(board[1].entrant, b);

    let text = tracker.format_leaderboard();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[3].starts_with("alphabeta"));
    assert!(lines[3].contains("6x6"));
    assert!(lines[3].contains("+14.0"));
    assert!(lines[4].starts_with("random"));
    assert!(lines[4].contains(" - "));
    assert!(lines[4].contains("-14.0"));
}

#[test]
fn test_save_and_load() {
    let path = scratch_file("roundtrip");
    let mut tracker = EloTracker::new();
    let a = Entrant::new("random", &config(8, 4));
    let b = Entrant::new("alphabeta", &config(8, 4));
    let result = match_of(&[(30, 34), (33, 31), (20, 44)]);
    tracker.update_ratings(&a, &b, &result);

    tracker.save(&path).unwrap();
    let loaded = EloTracker::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    for entrant in [&a, &b] {
        let (saved, read) = (tracker.rating(entrant), loaded.rating(entrant));
        assert!((saved.elo - read.elo).abs() < 1e-6);
        assert_eq!(saved.games, read.games);
        assert_eq!(saved.disc_margin, read.disc_margin);
    }
    assert_eq!(loaded.history[0].result, result);
    assert_eq!(loaded.history[0].first, a);
}

#[test]
fn test_missing_file_starts_fresh() {
    let path = scratch_file("missing");
    assert!(matches!(EloTracker::load(&path), Err(TournamentError::Io { .. })));
    assert!(EloTracker::load_or_default(&path).unwrap().entries.is_empty());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let path = scratch_file("corrupt");
    std::fs::write(&path, "{ not json").unwrap();
    let loaded = EloTracker::load_or_default(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(loaded, Err(TournamentError::Json { .. })));
}
