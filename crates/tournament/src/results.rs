//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TournamentError;
use crate::match_runner::{MatchConfig, MatchResult};

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    /// All match results (indexed by participant pairs)
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Tournament configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub search_depth: u32,
    pub board_size: usize,
    pub opening_plies: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::from(&MatchConfig::default())
    }
}

impl From<&MatchConfig> for TournamentConfig {
    fn from(config: &MatchConfig) -> Self {
        Self {
            games_per_match: config.num_games,
            search_depth: config.limits.max_depth,
            board_size: config.board_size,
            opening_plies: config.opening_plies,
        }
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
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

    /// Load results from JSON file
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

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, depth {}, {}x{} board, {} opening plies\n\n",
            self.config.games_per_match,
            self.config.search_depth,
            self.config.board_size,
            self.config.board_size,
            self.config.opening_plies
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>7}\n",
            "Engine 1", "Engine 2", "W", "L", "D", "Margin"
        ));
        report.push_str(&"-".repeat(68));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>+7}\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins(),
                entry.result.losses(),
                entry.result.draws(),
                entry.result.disc_margin()
            ));
        }

        report
    }
}
