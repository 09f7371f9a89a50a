use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::new();
    let limits = SearchLimits::depth(1);

    for player in [Player::A, Player::B] {
        let result = engine.search(&board, player, limits);
        let pit = result.best_move.unwrap();
        assert!(board.legal_moves(player).contains(&pit));
    }
}

#[test]
fn random_engine_handles_empty_side() {
    let mut engine = RandomEngine::new();
    let board = Board::from_cells([0, 0, 0, 0, 0, 0, 24, 4, 4, 4, 4, 4, 4, 0]).unwrap();

    let result = engine.search(&board, Player::A, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_passes_on_finished_board() {
    let mut engine = RandomEngine::with_seed(5);
    let board = Board::from_cells([4, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 24]).unwrap();

    let result = engine.search(&board, Player::A, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}

#[test]
fn seeded_engine_replays_after_new_game() {
    let mut engine = RandomEngine::with_seed(42);
    let board = Board::new();
    let limits = SearchLimits::default();

    let first: Vec<_> = (0..10)
        .map(|_| engine.search(&board, Player::A, limits).best_move)
        .collect();
    engine.new_game();
    let second: Vec<_> = (0..10)
        .map(|_| engine.search(&board, Player::A, limits).best_move)
        .collect();

    assert_eq!(first, second);
}
