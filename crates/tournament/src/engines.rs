//! Engine lookup by command-line name

use mancala_core::Engine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

use crate::error::TournamentError;

/// Build an engine from a name such as `minimax`, `random` or `random:7`.
pub fn create_engine(name: &str) -> Result<Box<dyn Engine>, TournamentError> {
    let mut parts = name.splitn(2, ':');
    let kind = parts.next().unwrap_or("").trim().to_lowercase();
    let arg = parts.next();

    match (kind.as_str(), arg) {
        ("minimax" | "mm", None) => Ok(Box::new(MinimaxEngine::new())),
        ("random" | "rand", None) => Ok(Box::new(RandomEngine::new())),
        ("random" | "rand", Some(seed)) => seed
            .trim()
            .parse::<u64>()
            .map(|seed| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>)
            .map_err(|_| TournamentError::UnknownEngine(name.to_string())),
        _ => Err(TournamentError::UnknownEngine(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_known_engines() {
        assert_eq!(create_engine("minimax").unwrap().name(), "Minimax v1.0");
        assert_eq!(create_engine("Random").unwrap().name(), "Random v1.0");
        assert_eq!(create_engine("random:3").unwrap().name(), "Random v1.0");
    }

    #[test]
    fn test_create_unknown_engine() {
        assert!(matches!(
            create_engine("alphabeta"),
            Err(TournamentError::UnknownEngine(_))
        ));
        assert!(matches!(
            create_engine("random:abc"),
            Err(TournamentError::UnknownEngine(_))
        ));
        assert!(matches!(
            create_engine("minimax:4"),
            Err(TournamentError::UnknownEngine(_))
        ));
    }
}
