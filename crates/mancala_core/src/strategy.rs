use rand::{Rng, thread_rng};
use std::fmt;
use std::str::FromStr;

use crate::{
    board::Board,
    error::{MancalaError, Result},
    random::random_move_with,
    search::{DEFAULT_DEPTH, best_move},
    types::{Pit, Player},
};

/// Move-selection policy for an automated player.
///
/// Strategies hold no game state, so the caller may switch between them from
/// one move to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Exhaustive fixed-depth minimax.
    Minimax { depth: u8 },
    /// Uniform choice among the legal moves.
    Random,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Minimax {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl Strategy {
    pub fn minimax(depth: u8) -> Self {
        Strategy::Minimax { depth }
    }

    /// Pick a pit for `player`.
    ///
    /// Both policies refuse a finished board with [`MancalaError::GameOver`],
    /// even when `player` still has stones on its row. Minimax always looks at
    /// least one ply ahead so that it has a move to return.
    pub fn select_move(&self, board: &Board, player: Player) -> Result<Pit> {
        self.select_move_with(board, player, &mut thread_rng())
    }

    /// Like [`Strategy::select_move`], drawing randomness from `rng`.
    pub fn select_move_with<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Result<Pit> {
        if board.is_terminal() {
            return Err(MancalaError::GameOver);
        }
        match *self {
            Strategy::Minimax { depth } => best_move(board, player, depth.max(1))?
                .best_move
                .ok_or(MancalaError::NoLegalMove { player }),
            Strategy::Random => random_move_with(board, player, rng),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax { depth } => write!(f, "minimax-depth-{}", depth),
            Strategy::Random => write!(f, "uniform-random"),
        }
    }
}

impl FromStr for Strategy {
    type Err = MancalaError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "minimax" => return Ok(Strategy::default()),
            "random" | "uniform-random" => return Ok(Strategy::Random),
            _ => {}
        }
        name.strip_prefix("minimax-depth-")
            .and_then(|d| d.parse::<u8>().ok())
            .filter(|&depth| depth > 0)
            .map(Strategy::minimax)
            .ok_or_else(|| MancalaError::StrategyParse(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_minimax_depth_four() {
        assert_eq!(Strategy::default(), Strategy::Minimax { depth: 4 });
        assert_eq!(Strategy::default().to_string(), "minimax-depth-4");
    }

    #[test]
    fn test_parse_strategies() {
        assert_eq!("minimax-depth-4".parse::<Strategy>(), Ok(Strategy::minimax(4)));
        assert_eq!("minimax-depth-2".parse::<Strategy>(), Ok(Strategy::minimax(2)));
        assert_eq!("minimax".parse::<Strategy>(), Ok(Strategy::minimax(4)));
        assert_eq!("uniform-random".parse::<Strategy>(), Ok(Strategy::Random));
        assert_eq!("Random".parse::<Strategy>(), Ok(Strategy::Random));
        assert!("minimax-depth-0".parse::<Strategy>().is_err());
        assert!("alphabeta".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_minimax_strategy_matches_search() {
        let board = Board::new().apply_move(3, Player::A).unwrap();
        let pit = Strategy::minimax(3).select_move(&board, Player::B).unwrap();
        let outcome = best_move(&board, Player::B, 3).unwrap();
        assert_eq!(Some(pit), outcome.best_move);
    }

    #[test]
    fn test_zero_depth_still_moves() {
        let pit = Strategy::minimax(0)
            .select_move(&Board::new(), Player::A)
            .unwrap();
        assert_eq!(pit, 2);
    }

    #[test]
    fn test_strategies_agree_on_finished_board() {
        // A still has six legal pits, but B's row is empty so the game is over.
        let board = Board::from_cells([4, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 24]).unwrap();
        assert_eq!(board.legal_moves(Player::A).len(), 6);

        for strategy in [Strategy::default(), Strategy::minimax(1), Strategy::Random] {
            assert_eq!(
                strategy.select_move(&board, Player::A),
                Err(MancalaError::GameOver)
            );
            assert_eq!(
                strategy.select_move(&board, Player::B),
                Err(MancalaError::GameOver)
            );
        }
    }

    #[test]
    fn test_strategies_can_alternate() {
        let mut board = Board::new();
        let strategies = [Strategy::Random, Strategy::minimax(2)];
        let mut player = Player::A;
        for turn in 0..6 {
            if board.is_terminal() {
                break;
            }
            let pit = strategies[turn % 2].select_move(&board, player).unwrap();
            board = board.apply_move(pit, player).unwrap();
            player = player.other();
        }
        assert_eq!(board.total_stones(), 48);
    }
}
