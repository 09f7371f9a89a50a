use std::path::PathBuf;

/// Errors raised by the tournament runner and its config file.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown engine '{0}' (expected minimax, random or random:<seed>)")]
    UnknownEngine(String),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Game(#[from] mancala_core::MancalaError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_engine_display() {
        let err = TournamentError::UnknownEngine("alphabeta".to_string());
        assert_eq!(
            err.to_string(),
            "unknown engine 'alphabeta' (expected minimax, random or random:<seed>)"
        );
    }

    #[test]
    fn test_validation_display() {
        let err = TournamentError::Validation("games_per_match must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: games_per_match must be > 0"
        );
    }
}
