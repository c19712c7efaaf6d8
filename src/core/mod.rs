//! Core types: players, positions, board, configuration, errors, RNG.
//!
//! Everything here is independent of the rules; the engine in `rules`
//! mutates a `Board` and the AI in `ai` reads snapshots of one.

pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use board::{Board, Cell, CRITICAL_MASS, MAX_CELLS, MIN_DIMENSION, OPENING_VALUE};
pub use config::{GameConfig, SeedPolicy};
pub use error::{GameError, Result};
pub use player::{Player, PlayerMap};
pub use position::{Neighbors, Position};
pub use rng::GameRng;
