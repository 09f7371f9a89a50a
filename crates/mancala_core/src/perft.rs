use crate::{board::Board, types::Player};

/// Leaf count of the game tree below `board` to `depth` plies.
///
/// Players alternate every ply. A terminal board counts as a single leaf
/// whatever depth remains.
pub fn perft(board: &Board, player: Player, depth: u8) -> u64 {
    fn inner(board: &Board, player: Player, depth: u8, layers: &mut [Vec<usize>]) -> u64 {
        if depth == 0 || board.is_terminal() {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        board.legal_moves_into(player, buf);

        let mut nodes = 0u64;
        for pit in buf.iter().copied() {
            let next = board.sow(pit, player);
            nodes += inner(&next, player.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(6); depth as usize];
    inner(board, player, depth, &mut layers[..])
}
