pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod perft;
pub mod random;
pub mod search;
pub mod strategy;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::evaluate;
pub use game::*;
pub use perft::perft;
pub use random::*;
pub use search::*;
pub use strategy::*;
pub use types::*;

// =============================================================================
// Flat call surface for presentation layers
// =============================================================================

/// Fresh board at the starting position.
pub fn new_board() -> Board {
    Board::new()
}

pub fn legal_moves(board: &Board, player: Player) -> Vec<Pit> {
    board.legal_moves(player)
}

pub fn apply_move(board: &Board, pit: Pit, player: Player) -> Result<Board> {
    board.apply_move(pit, player)
}

pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// Outcome once [`is_terminal`] holds, `None` before that.
pub fn result(board: &Board) -> Option<GameResult> {
    board.result()
}

// =============================================================================
// Engine trait — implemented by the minimax and random engines
// =============================================================================

/// Search limits handed to an engine for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Search depth in plies
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(DEFAULT_DEPTH)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen pit (None if the player has no legal move)
    pub best_move: Option<Pit>,
    /// Evaluation from Player A's point of view (store difference)
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all Mancala engines implement.
///
/// Lets the tournament pit minimax against random play, or any future
/// engine, through one object-safe seam.
pub trait Engine: Send {
    /// Choose a move for `player` on `board`.
    fn search(&mut self, board: &Board, player: Player, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
