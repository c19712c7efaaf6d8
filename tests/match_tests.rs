//! Match runner integration tests.

use chain_reaction::ai::{HeuristicPolicy, MovePolicy, RandomPolicy};
use chain_reaction::core::{GameConfig, Player};
use chain_reaction::play::{Match, MatchConfig, MatchEnd};

fn heuristic() -> Box<dyn MovePolicy> {
    Box::new(HeuristicPolicy::default())
}

fn random(seed: u64) -> Box<dyn MovePolicy> {
    Box::new(RandomPolicy::new(seed))
}

#[test]
fn test_random_vs_random_is_reproducible() {
    let run = || {
        let config = MatchConfig::new(GameConfig::new(4, 4))
            .with_random_sides(true)
            .with_seed(99);
        Match::new(config, random(1), random(2)).run().unwrap()
    };

    let a = run();
    let b = run();

    assert_eq!(a.end, b.end);
    assert_eq!(a.turns, b.turns);
    assert_eq!(a.history, b.history);
    assert_eq!(a.final_board, b.final_board);
}

#[test]
fn test_decided_match_has_settled_or_capped_ending() {
    for seed in 0..10 {
        let config = MatchConfig::new(GameConfig::new(3, 3))
            .with_seed(seed)
            .with_ending_waves(10);
        let report = Match::new(config, heuristic(), random(seed)).run().unwrap();

        if let Some(winner) = report.winner() {
            assert_eq!(report.final_board.count_owned(winner.opponent()), 0);
            assert!(report.final_board.count_owned(winner) > 0);
        }
        assert_ne!(report.end, MatchEnd::NoLegalMoves);
    }
}

#[test]
fn test_history_alternates_openings() {
    let config = MatchConfig::new(GameConfig::new(5, 5)).with_max_turns(6);
    let report = Match::new(config, heuristic(), heuristic()).run().unwrap();

    assert!(report.history.len() >= 2);
    assert_eq!(report.history[0].player, Player::White);
    assert!(report.history[0].opening);
    assert_eq!(report.history[1].player, Player::Black);
    assert!(report.history[1].opening);
    assert!(report.history[2..].iter().all(|record| !record.opening));
}

#[test]
fn test_report_names_seats() {
    let config = MatchConfig::new(GameConfig::new(3, 3)).with_max_turns(4);
    let report = Match::new(config, random(5), heuristic()).run().unwrap();

    assert_eq!(report.white, "random");
    assert_eq!(report.black, "heuristic");
    assert!(!report.swapped);
}
