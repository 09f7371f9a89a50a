//! Fixed-depth minimax over the Kalah game tree.
//!
//! Player A is always the maximizing side and Player B the minimizing side;
//! scores come from [`evaluate`] and are never negated between plies. There is
//! no pruning and no memoization, so a search visits O(6^depth) nodes and the
//! chosen move depends only on the board, the depth and the side to move.

use tracing::debug;

use crate::{
    board::Board,
    error::{MancalaError, Result},
    eval::evaluate,
    types::{Pit, Player},
};

/// Depth used by the default minimax strategy and engine.
pub const DEFAULT_DEPTH: u8 = 4;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Minimax score, A's store minus B's store at the horizon.
    pub score: i32,
    /// Recommended pit, `None` at depth 0 or on a terminal board.
    pub best_move: Option<Pit>,
    /// Number of nodes visited, root included.
    pub nodes: u64,
}

/// Plain minimax returning `(score, move)`.
///
/// When the side to move has no legal move on a board that is not terminal,
/// the untouched sentinel comes back: `i32::MIN` for the maximizer,
/// `i32::MAX` for the minimizer, together with `None`.
pub fn minimax(board: &Board, depth: u8, maximizing: bool) -> (i32, Option<Pit>) {
    let mut nodes = 0;
    minimax_counted(board, depth, maximizing, &mut nodes)
}

/// [`minimax`] with a node counter. The counter never affects the result.
pub fn minimax_counted(
    board: &Board,
    depth: u8,
    maximizing: bool,
    nodes: &mut u64,
) -> (i32, Option<Pit>) {
    *nodes += 1;

    if depth == 0 || board.is_terminal() {
        return (evaluate(board), None);
    }

    let player = Player::from_maximizing(maximizing);
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for pit in board.legal_moves(player) {
        let child = board.sow(pit, player);
        let (score, _) = minimax_counted(&child, depth - 1, !maximizing, nodes);

        // Strict comparison: the lowest pit index wins ties.
        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best_move = Some(pit);
        }
    }

    (best_score, best_move)
}

/// Best move for `player` searched `depth` plies deep.
///
/// Fails with [`MancalaError::NoLegalMove`] when `player` has nothing to play.
pub fn best_move(board: &Board, player: Player, depth: u8) -> Result<SearchOutcome> {
    if board.side_empty(player) {
        return Err(MancalaError::NoLegalMove { player });
    }

    let mut nodes = 0;
    let (score, best_move) = minimax_counted(board, depth, player.is_maximizing(), &mut nodes);
    debug!(%player, depth, score, ?best_move, nodes, "search finished");

    Ok(SearchOutcome {
        score,
        best_move,
        nodes,
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
