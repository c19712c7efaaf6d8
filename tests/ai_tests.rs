//! Computer player tests against real games.

use chain_reaction::ai::{HeuristicConfig, HeuristicPolicy, MovePolicy, RandomPolicy};
use chain_reaction::core::{Board, GameConfig, Player, Position};
use chain_reaction::rules::Game;

#[test]
fn test_heuristic_opens_in_center() {
    let board = Board::new(5, 5).unwrap();
    let mut policy = HeuristicPolicy::default();

    assert_eq!(policy.choose_move(&board, Player::White), Some(Position::new(2, 2)));
    assert_eq!(policy.choose_move(&board, Player::Black), Some(Position::new(2, 2)));
}

#[test]
fn test_heuristic_opening_on_small_boards() {
    let policy = HeuristicPolicy::default();

    let two = Board::new(2, 2).unwrap();
    assert_eq!(policy.choose(&two, Player::White), Some(Position::new(1, 1)));

    // Centre taken: the first diagonal that is on the board and empty.
    let taken = Board::from_seed(2, 2, &[vec![0, 0], vec![0, 3]]).unwrap();
    assert_eq!(policy.choose(&taken, Player::Black), Some(Position::new(0, 0)));
}

#[test]
fn test_heuristic_choice_is_always_legal() {
    let mut game = Game::with_size(4, 4).unwrap();
    let mut policy = HeuristicPolicy::default();

    for _ in 0..40 {
        if game.check_game_over().is_over() {
            break;
        }
        if game.pending_cascade() {
            game.settle(1_000);
            continue;
        }

        let choice = policy
            .choose_move(&game.snapshot(), game.active_player())
            .unwrap();
        assert!(game.is_legal_move(choice), "illegal choice {}", choice);
        game.try_place(choice).unwrap();
    }
}

#[test]
fn test_heuristic_does_not_mutate_board() {
    let game = Game::new(
        &GameConfig::new(3, 3).with_seed_board(vec![vec![1, 2, 0], vec![0, 3, 0], vec![-1, 0, -3]]),
    )
    .unwrap();
    let before = game.snapshot();

    let _ = HeuristicPolicy::default().choose(game.board(), Player::White);

    assert_eq!(game.board(), &before);
}

#[test]
fn test_heuristic_is_deterministic() {
    let board = Board::from_seed(
        4,
        4,
        &[vec![1, 1, 0, 0], vec![1, 1, 0, 0], vec![0, 0, -1, -1], vec![0, 0, -1, -1]],
    )
    .unwrap();
    let policy = HeuristicPolicy::default();

    let first = policy.choose(&board, Player::White);
    for _ in 0..5 {
        assert_eq!(policy.choose(&board, Player::White), first);
    }
    assert!(board.is_owned_by(first.unwrap(), Player::White));
}

#[test]
fn test_zero_weights_fall_through_to_tie_breaks() {
    let config = HeuristicConfig {
        edge_penalty: 0,
        adjacent_primed_penalty: 0,
        burst_bonus: 0,
        corner_fill_weight: 0,
        corner_burst_weight: 0,
    };
    let policy = HeuristicPolicy::new(config);
    // Every cell scores 0: value 2 wins over 1 and 3.
    let board = Board::from_seed(3, 3, &[vec![1, 0, 3], vec![0, 0, 0], vec![2, 0, -1]]).unwrap();

    assert_eq!(policy.choose(&board, Player::White), Some(Position::new(2, 0)));
}

#[test]
fn test_random_policy_only_picks_legal_cells() {
    let game = Game::new(
        &GameConfig::new(3, 3).with_seed_board(vec![vec![1, 0, 0], vec![0, -2, 0], vec![0, 0, 3]]),
    )
    .unwrap();
    let mut policy = RandomPolicy::new(3);

    for _ in 0..25 {
        let pos = policy.choose_move(game.board(), Player::White).unwrap();
        assert!(game.is_legal_move(pos));
    }
}
