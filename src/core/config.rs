//! Game configuration.
//!
//! Drivers describe a game with a `GameConfig` and hand it to
//! `Game::new`. Dimensions are validated there, not here, so a config can be
//! deserialized or built incrementally without failing halfway.

use serde::{Deserialize, Serialize};

/// What to do when a seed board is malformed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedPolicy {
    /// Log a warning and start from an empty board.
    #[default]
    FallBackToEmpty,
    /// Fail construction with `GameError::MalformedSeed`.
    Reject,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (at least 2).
    pub rows: usize,

    /// Number of columns (at least 2).
    pub columns: usize,

    /// Optional starting position.
    ///
    /// `0` empty, `1..=3` White pieces, `-1..=-3` Black pieces.
    pub seed_board: Option<Vec<Vec<i8>>>,

    /// Handling of a malformed `seed_board`.
    pub seed_policy: SeedPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 5,
            seed_board: None,
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration for an empty `rows × columns` board.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Start from a seeded position.
    #[must_use]
    pub fn with_seed_board(mut self, seed: Vec<Vec<i8>>) -> Self {
        self.seed_board = Some(seed);
        self
    }

    /// Set the malformed-seed policy.
    #[must_use]
    pub fn with_seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }

    /// Fail construction on a malformed seed instead of falling back.
    #[must_use]
    pub fn strict(self) -> Self {
        self.with_seed_policy(SeedPolicy::Reject)
    }
}
