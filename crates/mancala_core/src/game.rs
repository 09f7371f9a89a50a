//! Game session: the current board, whose turn it is and the moves so far.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    board::Board,
    error::{MancalaError, Result},
    search::{SearchOutcome, best_move},
    strategy::Strategy,
    types::{GameResult, Pit, Player},
};

/// One played move and the board it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub pit: Pit,
    pub board_after: Board,
}

/// A game in progress. Turns strictly alternate; A moves first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::A)
    }

    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn legal_moves(&self) -> Vec<Pit> {
        self.board.legal_moves(self.to_move)
    }

    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.board.result()
    }

    /// Play `pit` for the side to move and hand the turn over.
    pub fn play(&mut self, pit: Pit) -> Result<&Board> {
        if self.is_over() {
            return Err(MancalaError::GameOver);
        }
        let player = self.to_move;
        self.board = self.board.apply_move(pit, player)?;
        self.history.push(MoveRecord {
            player,
            pit,
            board_after: self.board,
        });
        self.to_move = player.other();
        debug!(%player, pit, board = %self.board, "move played");
        Ok(&self.board)
    }

    /// Let `strategy` pick the move for the side to move, then play it.
    pub fn play_strategy(&mut self, strategy: &Strategy) -> Result<Pit> {
        if self.is_over() {
            return Err(MancalaError::GameOver);
        }
        let pit = strategy.select_move(&self.board, self.to_move)?;
        self.play(pit)?;
        Ok(pit)
    }

    /// Suggested move for the side to move.
    pub fn hint(&self, depth: u8) -> Result<SearchOutcome> {
        if self.is_over() {
            return Err(MancalaError::GameOver);
        }
        best_move(&self.board, self.to_move, depth)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
