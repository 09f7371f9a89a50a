//! Random Move Mancala Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (minimax should easily beat this)
//! - Stress testing sowing and capture over many full games

use mancala_core::{random_move_with, Board, Engine, Player, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

#[cfg(test)]
mod lib_tests;

/// A Mancala engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random pit
/// from the legal ones. Seeding it makes a whole match reproducible.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
            nodes: 0,
        }
    }

    /// Engine with a fixed seed; `new_game` rewinds to the same sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, player: Player, _limits: SearchLimits) -> SearchResult {
        self.nodes = 1;

        if board.is_terminal() {
            return SearchResult {
                best_move: None,
                score: 0,
                depth: 1,
                nodes: self.nodes,
            };
        }

        let best_move = match random_move_with(board, player, &mut self.rng) {
            Ok(pit) => Some(pit),
            Err(e) => {
                warn!(error = %e, %player, "random engine asked to move without a legal move");
                None
            }
        };

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}
