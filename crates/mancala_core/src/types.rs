use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::MancalaError;

/// Index of a board cell, 0..=13.
pub type Pit = usize;

/// Total number of cells on the board (12 pits + 2 stores).
pub const BOARD_LEN: usize = 14;
/// Pits owned by each side.
pub const PITS_PER_SIDE: usize = 6;
/// Stones placed in every pit at the start of a game.
pub const INITIAL_STONES: u8 = 4;
/// Stones in play for the whole game.
pub const TOTAL_STONES: u32 = (INITIAL_STONES as u32) * (2 * PITS_PER_SIDE as u32);

pub const STORE_A: Pit = 6;
pub const STORE_B: Pit = 13;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// The store this player scores into.
    pub fn store(self) -> Pit {
        match self {
            Player::A => STORE_A,
            Player::B => STORE_B,
        }
    }

    /// The store skipped while this player sows.
    pub fn opponent_store(self) -> Pit {
        self.other().store()
    }

    /// Pits this player may move from.
    pub fn pits(self) -> RangeInclusive<Pit> {
        match self {
            Player::A => 0..=5,
            Player::B => 7..=12,
        }
    }

    pub fn owns_pit(self, pit: Pit) -> bool {
        self.pits().contains(&pit)
    }

    /// Player A maximizes the evaluation, Player B minimizes it.
    pub fn is_maximizing(self) -> bool {
        self == Player::A
    }

    pub fn from_maximizing(maximizing: bool) -> Player {
        if maximizing { Player::A } else { Player::B }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "A"),
            Player::B => write!(f, "B"),
        }
    }
}

impl FromStr for Player {
    type Err = MancalaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Player::A),
            "b" => Ok(Player::B),
            other => Err(MancalaError::PlayerParse(other.to_string())),
        }
    }
}

/// Outcome of a finished game, decided by the store totals alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    PlayerAWins,
    PlayerBWins,
    Tie,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::PlayerAWins => write!(f, "Player A wins"),
            GameResult::PlayerBWins => write!(f, "Player B wins"),
            GameResult::Tie => write!(f, "Tie"),
        }
    }
}

/// The pit facing `pit` across the board.
pub fn opposite(pit: Pit) -> Pit {
    12 - pit
}

