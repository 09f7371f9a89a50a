use crate::types::{Pit, Player};

/// Errors surfaced by the rules engine and move selection.
///
/// Both move errors are caller contract violations: the engine never retries
/// or corrects them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MancalaError {
    #[error("invalid move: player {player} cannot play pit {pit} ({reason})")]
    InvalidMove {
        pit: Pit,
        player: Player,
        reason: InvalidMoveReason,
    },

    #[error("player {player} has no legal move")]
    NoLegalMove { player: Player },

    #[error("game is already over")]
    GameOver,

    #[error("failed to parse board: {0}")]
    BoardParse(String),

    #[error("unknown player '{0}' (expected 'a' or 'b')")]
    PlayerParse(String),

    #[error("unknown strategy '{0}' (expected 'minimax-depth-N' or 'uniform-random')")]
    StrategyParse(String),
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMoveReason {
    #[error("index out of range")]
    OutOfRange,
    #[error("stores cannot be played")]
    Store,
    #[error("pit belongs to the opponent")]
    OpponentPit,
    #[error("pit is empty")]
    EmptyPit,
}

pub type Result<T> = std::result::Result<T, MancalaError>;
