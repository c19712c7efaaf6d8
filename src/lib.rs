//! # chain-reaction
//!
//! A two-player chain-reaction board game: a rules engine, a heuristic
//! computer player, and a headless match runner.
//!
//! Players take turns adding a unit to one of their own cells (or, on
//! their first move, claiming any empty cell at value 3). A cell that
//! reaches 4 explodes, sending one unit to each orthogonal neighbour and
//! taking ownership of it; explosions chain in waves. A player who has
//! opened and owns nothing has lost.
//!
//! ## Modules
//!
//! - `core`: players, positions, the board, configuration, errors, RNG
//! - `rules`: the `Game` engine, cascade queue, and move sources
//! - `ai`: move policies (heuristic and random)
//! - `play`: policy-vs-policy matches
//!
//! ```
//! use chain_reaction::{Game, Position, TurnOutcome};
//!
//! let mut game = Game::with_size(5, 5).unwrap();
//! let mut source = |_retry: u32| Position::new(2, 2);
//! assert!(matches!(game.execute_turn(&mut source), TurnOutcome::Placed(_)));
//! assert_eq!(game.board().value(Position::new(2, 2)), 3);
//! ```

pub mod ai;
pub mod core;
pub mod play;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, GameConfig, GameError, GameRng, Player, PlayerMap, Position, Result, SeedPolicy,
    CRITICAL_MASS, OPENING_VALUE,
};

pub use crate::rules::{
    Game, GameStatus, MoveRecord, MoveSource, Placement, ScriptedSource, TurnOutcome, WaveReport,
};

pub use crate::ai::{HeuristicConfig, HeuristicPolicy, MovePolicy, RandomPolicy};

pub use crate::play::{Match, MatchConfig, MatchEnd, MatchReport};
