//! Tournament configuration, loadable from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::TournamentError;
use crate::match_runner::MatchConfig;

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub search_depth: u8,
    pub max_moves_per_game: u32,
    /// Random plies played before the engines take over
    pub opening_plies: u32,
    /// Seed for the opening plies (None = fresh entropy)
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            search_depth: 4,
            max_moves_per_game: 200,
            opening_plies: 0,
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let content = std::fs::read_to_string(path).map_err(|source| TournamentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TournamentConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, TournamentError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.games_per_match == 0 {
            return Err(TournamentError::Validation(
                "games_per_match must be > 0".to_string(),
            ));
        }
        if self.search_depth == 0 {
            return Err(TournamentError::Validation(
                "search_depth must be > 0".to_string(),
            ));
        }
        if self.max_moves_per_game == 0 {
            return Err(TournamentError::Validation(
                "max_moves_per_game must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Match settings derived from this config
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            num_games: self.games_per_match,
            depth: self.search_depth,
            max_moves: self.max_moves_per_game,
            opening_plies: self.opening_plies,
            seed: self.seed,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TournamentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TournamentConfig = toml::from_str(
            r#"
            games_per_match = 4
            seed = 11
            "#,
        )
        .unwrap();
        assert_eq!(config.games_per_match, 4);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.search_depth, 4);
        assert_eq!(config.max_moves_per_game, 200);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = TournamentConfig {
            search_depth: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TournamentError::Validation(_))
        ));
    }

    #[test]
    fn test_match_config_mapping() {
        let config = TournamentConfig {
            games_per_match: 6,
            search_depth: 3,
            max_moves_per_game: 90,
            opening_plies: 2,
            seed: Some(5),
        };
        let m = config.match_config();
        assert_eq!(m.num_games, 6);
        assert_eq!(m.depth, 3);
        assert_eq!(m.max_moves, 90);
        assert_eq!(m.opening_plies, 2);
        assert_eq!(m.seed, Some(5));
        assert!(m.alternate_sides);
    }
}
