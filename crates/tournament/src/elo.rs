//! Elo ratings for engines, kept per board size and search depth
//!
//! A depth-3 engine on 6x6 and a depth-5 engine on 8x8 are different
//! players, so each `(engine, board, depth)` combination is its own entrant.
//! Ratings move after every game, and each entrant also accumulates the disc
//! margins it finished games with.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::path::Path;

use crate::error::TournamentError;
use crate::match_runner::{MatchConfig, MatchResult};

/// Where the command line keeps ratings between runs
pub const ELO_FILE: &str = "tournament_elo.json";

/// Default starting Elo for new entrants
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// An engine under the settings it played with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entrant {
    pub engine: String,
    pub board_size: usize,
    /// Search horizon; `None` for engines that do not search
    pub depth: Option<u32>,
}

impl Entrant {
    pub fn new(engine: &str, config: &MatchConfig) -> Self {
        let engine = engine.to_lowercase();
        let depth = (engine != "random").then_some(config.limits.max_depth);
        Self {
            engine,
            board_size: config.board_size,
            depth,
        }
    }
}

impl fmt::Display for Entrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}x{}", self.engine, self.board_size, self.board_size)?;
        if let Some(depth) = self.depth {
            write!(f, ":d{depth}")?;
        }
        Ok(())
    }
}

/// Rating and running totals for one entrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub elo: f64,
    pub games: u32,
    /// Sum of final disc margins, own discs minus the opponent's
    pub disc_margin: i64,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            elo: DEFAULT_ELO,
            games: 0,
            disc_margin: 0,
        }
    }
}

impl Rating {
    pub fn average_margin(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.disc_margin as f64 / f64::from(self.games)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingEntry {
    pub entrant: Entrant,
    pub rating: Rating,
}

/// Record of a single match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub first: Entrant,
    pub second: Entrant,
    pub result: MatchResult,
    pub timestamp: String,
    /// Rating change of `first` over the whole match
    pub elo_change: f64,
}

/// Expected score of a player rated `rating` against one rated `opponent`.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) / 400.0))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    pub entries: Vec<RatingEntry>,
    pub history: Vec<MatchRecord>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tracker from a JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| TournamentError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a tracker, starting fresh when the file does not exist yet.
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, TournamentError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| TournamentError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Current rating, or the starting rating for an unseen entrant.
    pub fn rating(&self, entrant: &Entrant) -> Rating {
        self.entries
            .iter()
            .find(|e| &e.entrant == entrant)
            .map(|e| e.rating.clone())
            .unwrap_or_default()
    }

    fn rating_mut(&mut self, entrant: &Entrant) -> &mut Rating {
        let index = match self.entries.iter().position(|e| &e.entrant == entrant) {
            Some(index) => index,
            None => {
                self.entries.push(RatingEntry {
                    entrant: entrant.clone(),
                    rating: Rating::default(),
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].rating
    }

    /// Applies every game of `result`, which is seen from `first`'s side.
    ///
    /// Ratings move game by game, so a long match against a much weaker
    /// entrant gains less with each further win.
    pub fn update_ratings(&mut self, first: &Entrant, second: &Entrant, result: &MatchResult) {
        let start = self.rating(first).elo;

        for game in &result.games {
            let r1 = self.rating(first).elo;
            let r2 = self.rating(second).elo;
            let delta = K_FACTOR * (game.result.points() - expected_score(r1, r2));

            let a = self.rating_mut(first);
            a.elo += delta;
            a.games += 1;
            a.disc_margin += i64::from(game.disc_margin);

            let b = self.rating_mut(second);
            b.elo -= delta;
            b.games += 1;
            b.disc_margin -= i64::from(game.disc_margin);
        }

        let elo_change = self.rating(first).elo - start;
        self.history.push(MatchRecord {
            first: first.clone(),
            second: second.clone(),
            result: result.clone(),
            timestamp: unix_timestamp(),
            elo_change,
        });
    }

    /// Entries sorted by Elo, best first
    pub fn leaderboard(&self) -> Vec<&RatingEntry> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.rating.elo.total_cmp(&a.rating.elo));
        entries
    }

    /// Leaderboard as a text table.
    pub fn format_leaderboard(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Engine Leaderboard ===");
        let _ = writeln!(
            out,
            "{:<16} {:>6} {:>6} {:>8} {:>6} {:>8}",
            "Engine", "Board", "Depth", "Elo", "Games", "Margin"
        );
        let _ = writeln!(out, "{}", "-".repeat(55));
        for entry in self.leaderboard() {
            let e = &entry.entrant;
            let depth = e.depth.map_or_else(|| "-".to_string(), |d| d.to_string());
            let _ = writeln!(
                out,
                "{:<16} {:>6} {:>6} {:>8.1} {:>6} {:>+8.1}",
                e.engine,
                format!("{0}x{0}", e.board_size),
                depth,
                entry.rating.elo,
                entry.rating.games,
                entry.rating.average_margin()
            );
        }
        out
    }
}

/// Seconds since the Unix epoch, as text
fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", duration.as_secs())
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
