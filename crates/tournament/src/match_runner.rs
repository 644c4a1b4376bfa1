//! Match runner for playing games between engines

use othello_core::{Engine, GameState, Player, Position, Rules, SearchLimits};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::TournamentError;

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Board edge length
    pub board_size: usize,
    /// Limits handed to both engines on every move. Set from the `[search]`
    /// table of a settings file, not from the `[match]` table.
    #[serde(skip)]
    pub limits: SearchLimits,
    /// Random legal moves played before the engines take over
    pub opening_plies: u32,
    /// Seed for the opening plies; `None` draws fresh entropy
    pub seed: Option<u64>,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            board_size: 8,
            limits: SearchLimits::depth(4),
            opening_plies: 0,
            seed: None,
            alternate_colors: true,
        }
    }
}

/// Result of a single game for one of the engines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// 1 for a win, 0.5 for a draw, 0 for a loss
    pub fn points(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Loss => 0.0,
        }
    }
}

/// A finished game, seen from the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Position>,
    pub black_discs: u32,
    pub white_discs: u32,
    pub winner: Option<Player>,
}

impl GameRecord {
    /// Result for the player on `side`.
    pub fn result_for(&self, side: Player) -> GameResult {
        match self.winner {
            Some(winner) if winner == side => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }

    /// Final disc count of `side` minus its opponent's.
    pub fn margin_for(&self, side: Player) -> i32 {
        let diff = self.black_discs as i32 - self.white_discs as i32;
        match side {
            Player::Black => diff,
            Player::White => -diff,
        }
    }
}

/// One game of a match, from the first engine's side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub side: Player,
    pub result: GameResult,
    pub disc_margin: i32,
}

/// Every game of a match, from the first engine's perspective.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub games: Vec<GameOutcome>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finished game in which the first engine played `side`.
    pub fn record(&mut self, game: &GameRecord, side: Player) -> GameOutcome {
        let outcome = GameOutcome {
            side,
            result: game.result_for(side),
            disc_margin: game.margin_for(side),
        };
        self.games.push(outcome);
        outcome
    }

    fn count(&self, result: GameResult) -> u32 {
        self.games.iter().filter(|g| g.result == result).count() as u32
    }

    pub fn wins(&self) -> u32 {
        self.count(GameResult::Win)
    }

    pub fn losses(&self) -> u32 {
        self.count(GameResult::Loss)
    }

    pub fn draws(&self) -> u32 {
        self.count(GameResult::Draw)
    }

    pub fn total_games(&self) -> u32 {
        self.games.len() as u32
    }

    /// Points per game, 0.5 for an empty match
    pub fn score(&self) -> f64 {
        if self.games.is_empty() {
            return 0.5;
        }
        self.games.iter().map(|g| g.result.points()).sum::<f64>() / self.games.len() as f64
    }

    /// Sum of final disc margins over all games
    pub fn disc_margin(&self) -> i64 {
        self.games.iter().map(|g| i64::from(g.disc_margin)).sum()
    }
}

/// Plays `plies` random legal moves on `state`, stopping early if the game ends.
pub fn play_opening<S: Rules>(
    state: &mut S,
    plies: u32,
    rng: &mut StdRng,
    game: u32,
) -> Result<Vec<Position>, TournamentError> {
    let mut moves = Vec::new();
    for _ in 0..plies {
        let legal = state.legal_moves();
        let Some(&mv) = legal.choose(rng) else {
            break;
        };
        if !state.apply_move(mv) {
            return Err(TournamentError::OpeningRejected { game, position: mv });
        }
        moves.push(mv);
    }
    Ok(moves)
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective. With alternating colors
    /// each pair of games shares the same random opening, so both engines get
    /// to play both sides of it.
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchResult, TournamentError> {
        let mut result = MatchResult::new();
        let base_seed = self.config.seed.unwrap_or_else(rand::random);

        for game_num in 0..self.config.num_games {
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;
            let opening_index = if self.config.alternate_colors {
                game_num / 2
            } else {
                game_num
            };
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(u64::from(opening_index)));

            let record = if engine1_black {
                self.play_game(game_num, engine1, engine2, &mut rng)?
            } else {
                self.play_game(game_num, engine2, engine1, &mut rng)?
            };
            let engine1_side = if engine1_black { Player::Black } else { Player::White };
            let outcome = result.record(&record, engine1_side);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                side = %engine1_side,
                margin = outcome.disc_margin,
                "{} {:?}, score {}-{}-{}",
                engine1.name(),
                outcome.result,
                result.wins(),
                result.losses(),
                result.draws()
            );
        }

        Ok(result)
    }

    /// Play a single game from a fresh board.
    pub fn play_game(
        &self,
        game_num: u32,
        black: &mut dyn Engine,
        white: &mut dyn Engine,
        rng: &mut StdRng,
    ) -> Result<GameRecord, TournamentError> {
        let mut state = GameState::new(self.config.board_size).map_err(|_| {
            TournamentError::BoardSize {
                size: self.config.board_size,
            }
        })?;
        black.new_game();
        white.new_game();

        let mut moves = play_opening(&mut state, self.config.opening_plies, rng, game_num + 1)?;
        debug!(game = game_num + 1, plies = moves.len(), "opening played");

        while !state.is_finished() {
            let engine: &mut dyn Engine = match state.current_mover() {
                Player::Black => &mut *black,
                Player::White => &mut *white,
            };

            let result = engine
                .search(&state, self.config.limits)
                .map_err(|source| TournamentError::Search {
                    engine: engine.name().to_string(),
                    game: game_num + 1,
                    source,
                })?;

            if !state.apply_move(result.best_move) {
                return Err(TournamentError::IllegalMove {
                    engine: engine.name().to_string(),
                    game: game_num + 1,
                    position: result.best_move,
                });
            }
            moves.push(result.best_move);
        }

        let (black_discs, white_discs) = state.count_tokens();
        Ok(GameRecord {
            moves,
            black_discs,
            white_discs,
            winner: state.winner(),
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
