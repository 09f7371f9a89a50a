use crate::{board::Board, types::Player};

/// Static evaluation from Player A's point of view: store difference.
///
/// Positive favors A, negative favors B. Stones still on the board are
/// ignored.
pub fn evaluate(board: &Board) -> i32 {
    board.store(Player::A) as i32 - board.store(Player::B) as i32
}
