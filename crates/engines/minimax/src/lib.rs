//! Minimax Mancala Engine
//!
//! Exhaustive fixed-depth minimax with the store-difference evaluation.
//! This is the reference opponent and the source of move hints.

use mancala_core::{best_move, Board, Engine, Player, SearchLimits, SearchResult};
use tracing::warn;


/// Mancala engine running plain minimax to the requested depth.
///
/// No pruning and no transposition table: every node to the horizon is
/// visited, so the move only depends on the board and the depth.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, player: Player, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        // Depth 0 would return no move; always look at least one ply ahead.
        let depth = limits.depth.max(1);
        match best_move(board, player, depth) {
            Ok(outcome) => {
                self.nodes = outcome.nodes;
                SearchResult {
                    best_move: outcome.best_move,
                    score: outcome.score,
                    depth,
                    nodes: outcome.nodes,
                }
            }
            Err(e) => {
                warn!(error = %e, %player, "minimax asked to move without a legal move");
                SearchResult {
                    best_move: None,
                    score: mancala_core::evaluate(board),
                    depth,
                    nodes: 0,
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
