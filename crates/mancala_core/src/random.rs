use rand::seq::SliceRandom;
use rand::{Rng, thread_rng};

use crate::{
    board::Board,
    error::{MancalaError, Result},
    types::{Pit, Player},
};

/// Uniformly random legal move for `player`, using the thread RNG.
pub fn random_move(board: &Board, player: Player) -> Result<Pit> {
    random_move_with(board, player, &mut thread_rng())
}

/// Uniformly random legal move drawn from `rng`.
///
/// Fails with [`MancalaError::NoLegalMove`] when `player` has nothing to play.
pub fn random_move_with<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<Pit> {
    board
        .legal_moves(player)
        .choose(rng)
        .copied()
        .ok_or(MancalaError::NoLegalMove { player })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_move_is_legal() {
        let board = Board::from_cells([0, 3, 0, 7, 0, 1, 5, 2, 0, 0, 6, 0, 0, 24]).unwrap();
        let legal = board.legal_moves(Player::A);
        for _ in 0..200 {
            let pit = random_move(&board, Player::A).unwrap();
            assert!(legal.contains(&pit), "pit {} is not legal", pit);
        }
    }

    #[test]
    fn test_random_move_covers_every_pit() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 6];
        for _ in 0..500 {
            let pit = random_move_with(&board, Player::B, &mut rng).unwrap();
            seen[pit - 7] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_move_single_choice() {
        let board = Board::from_cells([0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 28, 0, 0]).unwrap();
        assert_eq!(random_move(&board, Player::B), Ok(11));
    }

    #[test]
    fn test_random_move_without_legal_moves() {
        let board = Board::from_cells([0, 0, 0, 0, 0, 0, 24, 4, 4, 4, 4, 4, 4, 0]).unwrap();
        assert_eq!(
            random_move(&board, Player::A),
            Err(MancalaError::NoLegalMove { player: Player::A })
        );
    }
}
