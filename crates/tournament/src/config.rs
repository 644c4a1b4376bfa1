//! Settings file for the tournament binary.
//!
//! The engine tables are shared with the protocol front end; `[match]` is
//! read only here.
//!
//! ```toml
//! [search]
//! max_depth = 3
//!
//! [logging]
//! filter = "tournament=debug"
//!
//! [match]
//! num_games = 20
//! board_size = 6
//! opening_plies = 4
//! seed = 7
//! ```

use serde::Deserialize;
use std::path::Path;

use othello_core::{ConfigError, EngineConfig};

use crate::error::TournamentError;
use crate::match_runner::MatchConfig;

#[derive(Debug, Clone, Default)]
pub struct TournamentSettings {
    pub engine: EngineConfig,
    pub match_config: MatchConfig,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MatchSection {
    #[serde(rename = "match")]
    match_config: MatchConfig,
}

impl TournamentSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, TournamentError> {
        let engine = EngineConfig::from_toml_str(text)?;
        let section: MatchSection = toml::from_str(text).map_err(ConfigError::Parse)?;
        let mut match_config = section.match_config;
        match_config.limits = engine.search;
        Ok(Self {
            engine,
            match_config,
        })
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let text = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = TournamentSettings::from_toml_str("").unwrap();
        assert_eq!(settings.engine, EngineConfig::default());
        assert_eq!(settings.match_config.num_games, 10);
        assert_eq!(settings.match_config.board_size, 8);
        assert_eq!(settings.match_config.limits, EngineConfig::default().search);
    }

    #[test]
    fn test_match_table_and_search_limits_combine() {
        let settings = TournamentSettings::from_toml_str(
            r#"
            [search]
            max_depth = 3
            pruning = false

            [logging]
            filter = "debug"

            [match]
            num_games = 6
            board_size = 6
            opening_plies = 2
            seed = 42
            "#,
        )
        .unwrap();

        let config = &settings.match_config;
        assert_eq!(config.num_games, 6);
        assert_eq!(config.board_size, 6);
        assert_eq!(config.opening_plies, 2);
        assert_eq!(config.seed, Some(42));
        assert!(config.alternate_colors);
        assert_eq!(config.limits.max_depth, 3);
        assert!(!config.limits.pruning);
        assert_eq!(settings.engine.logging.filter, "debug");
    }

    #[test]
    fn test_limits_come_only_from_search_table() {
        let settings = TournamentSettings::from_toml_str(
            r#"
            [search]
            max_depth = 2

            [match]
            num_games = 4
            "#,
        )
        .unwrap();
        assert_eq!(settings.match_config.limits.max_depth, 2);
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let err = TournamentSettings::from_toml_str("[match]\nnum_games = \"many\"\n").unwrap_err();
        assert!(matches!(err, TournamentError::Config(ConfigError::Parse(_))));

        let err = TournamentSettings::from_toml_str("[search]\nmax_depth = 1\nroot_depth = 3\n")
            .unwrap_err();
        assert!(matches!(err, TournamentError::Config(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("othello-no-such-settings.toml");
        assert!(matches!(
            TournamentSettings::load(&path),
            Err(TournamentError::Io { .. })
        ));
    }
}
