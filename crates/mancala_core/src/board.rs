use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::error::{InvalidMoveReason, MancalaError, Result};
use crate::types::*;

/// A Kalah board: pits 0..=5 and store 6 for A, pits 7..=12 and store 13 for B.
///
/// Boards are plain values. Every transition returns a fresh `Board`, so a
/// board handed to the search or to another holder is never changed behind
/// its back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [u8; BOARD_LEN],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position: four stones in every pit, both stores empty.
    pub fn new() -> Self {
        let mut cells = [INITIAL_STONES; BOARD_LEN];
        cells[STORE_A] = 0;
        cells[STORE_B] = 0;
        Self { cells }
    }

    /// Arbitrary position, mostly for tests and analysis.
    ///
    /// All stones must fit in a single cell, so the total is capped at
    /// `u8::MAX`.
    pub fn from_cells(cells: [u8; BOARD_LEN]) -> Result<Self> {
        let board = Board { cells };
        if board.total_stones() > u8::MAX as u32 {
            return Err(MancalaError::BoardParse(format!(
                "{} stones on the board, at most {} supported",
                board.total_stones(),
                u8::MAX
            )));
        }
        Ok(board)
    }

    pub fn cells(&self) -> &[u8; BOARD_LEN] {
        &self.cells
    }

    pub fn stones(&self, pit: Pit) -> u8 {
        self.cells[pit]
    }

    pub fn store(&self, player: Player) -> u8 {
        self.cells[player.store()]
    }

    pub fn total_stones(&self) -> u32 {
        self.cells.iter().map(|&s| s as u32).sum()
    }

    /// True when every pit on `player`'s side is empty.
    pub fn side_empty(&self, player: Player) -> bool {
        player.pits().all(|pit| self.cells[pit] == 0)
    }

    /// The game ends as soon as either row is empty.
    ///
    /// Stones left on the other row stay where they are; they are not swept
    /// into a store and do not count towards the result.
    pub fn is_terminal(&self) -> bool {
        self.side_empty(Player::A) || self.side_empty(Player::B)
    }

    /// Final outcome, or `None` while the game is still running.
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_terminal() {
            return None;
        }
        let a = self.store(Player::A);
        let b = self.store(Player::B);
        Some(match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameResult::PlayerAWins,
            std::cmp::Ordering::Less => GameResult::PlayerBWins,
            std::cmp::Ordering::Equal => GameResult::Tie,
        })
    }

    /// Non-empty pits of `player`, lowest index first.
    pub fn legal_moves(&self, player: Player) -> Vec<Pit> {
        let mut moves = Vec::with_capacity(PITS_PER_SIDE);
        self.legal_moves_into(player, &mut moves);
        moves
    }

    /// Same as [`Board::legal_moves`] but reuses the caller's buffer.
    pub fn legal_moves_into(&self, player: Player, moves: &mut Vec<Pit>) {
        moves.clear();
        moves.extend(player.pits().filter(|&pit| self.cells[pit] > 0));
    }

    pub fn is_legal(&self, pit: Pit, player: Player) -> bool {
        self.check_move(pit, player).is_ok()
    }

    fn check_move(&self, pit: Pit, player: Player) -> Result<()> {
        let reason = if pit >= BOARD_LEN {
            Some(InvalidMoveReason::OutOfRange)
        } else if pit == STORE_A || pit == STORE_B {
            Some(InvalidMoveReason::Store)
        } else if !player.owns_pit(pit) {
            Some(InvalidMoveReason::OpponentPit)
        } else if self.cells[pit] == 0 {
            Some(InvalidMoveReason::EmptyPit)
        } else {
            None
        };
        match reason {
            Some(reason) => Err(MancalaError::InvalidMove { pit, player, reason }),
            None => Ok(()),
        }
    }

    /// Sow from `pit` for `player` and resolve a capture.
    ///
    /// Fails with [`MancalaError::InvalidMove`] when the pit is not on the
    /// mover's side or is empty. Sowing into the mover's own store does not
    /// grant another turn.
    pub fn apply_move(&self, pit: Pit, player: Player) -> Result<Board> {
        self.check_move(pit, player)?;
        Ok(self.sow(pit, player))
    }

    /// Unchecked transition for moves that came from `legal_moves`.
    pub(crate) fn sow(&self, pit: Pit, player: Player) -> Board {
        let mut next = *self;
        let skip = player.opponent_store();

        let mut stones = next.cells[pit];
        next.cells[pit] = 0;
        let mut index = pit;
        while stones > 0 {
            index = (index + 1) % BOARD_LEN;
            if index == skip {
                continue;
            }
            next.cells[index] += 1;
            stones -= 1;
        }

        // Capture: last stone alone in an own pit with stones opposite.
        if player.owns_pit(index) && next.cells[index] == 1 {
            let facing = opposite(index);
            let captured = next.cells[facing];
            if captured > 0 {
                trace!(%player, pit = index, captured, "capture");
                next.cells[player.store()] += captured + 1;
                next.cells[facing] = 0;
                next.cells[index] = 0;
            }
        }

        next
    }

    /// Parse `"a0,..,a5,storeA/b7,..,b12,storeB"`.
    pub fn from_notation(s: &str) -> Result<Self> {
        let halves: Vec<&str> = s.trim().split('/').collect();
        if halves.len() != 2 {
            return Err(MancalaError::BoardParse(format!(
                "expected two '/'-separated sides, found {}",
                halves.len()
            )));
        }

        let mut cells = [0u8; BOARD_LEN];
        for (side, half) in halves.iter().enumerate() {
            let fields: Vec<&str> = half.split(',').map(str::trim).collect();
            if fields.len() != PITS_PER_SIDE + 1 {
                return Err(MancalaError::BoardParse(format!(
                    "side {} has {} cells, expected {}",
                    side + 1,
                    fields.len(),
                    PITS_PER_SIDE + 1
                )));
            }
            for (i, field) in fields.iter().enumerate() {
                let value: u8 = field.parse().map_err(|_| {
                    MancalaError::BoardParse(format!("invalid stone count '{}'", field))
                })?;
                cells[side * (PITS_PER_SIDE + 1) + i] = value;
            }
        }

        Board::from_cells(cells)
    }

    pub fn to_notation(&self) -> String {
        let side = |cells: &[u8]| {
            cells
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        format!("{}/{}", side(&self.cells[..=STORE_A]), side(&self.cells[STORE_A + 1..]))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl FromStr for Board {
    type Err = MancalaError;

    fn from_str(s: &str) -> Result<Self> {
        Board::from_notation(s)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
