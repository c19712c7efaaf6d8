//! Computer players.
//!
//! - `MovePolicy`: the trait every computer player implements
//! - `HeuristicPolicy`: positional scoring of owned cells
//! - `RandomPolicy`: uniformly random legal moves, for baselines and tests
//!
//! Policies read a `Board` snapshot and return a position; they never touch
//! the engine. Use `Game::snapshot` to hand them an isolated copy.

pub mod config;
pub mod heuristic;
pub mod policy;

pub use config::HeuristicConfig;
pub use heuristic::HeuristicPolicy;
pub use policy::{candidate_moves, MovePolicy, RandomPolicy};
