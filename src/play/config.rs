//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Configuration for a policy-vs-policy match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Board and seed setup.
    pub game: GameConfig,

    /// Stop once the turn number passes this (to prevent endless games).
    pub max_turns: u32,

    /// Upper bound on waves in a single cascade before the match is
    /// abandoned.
    pub max_cascade_waves: usize,

    /// Waves still resolved after the game is decided, so the final board
    /// shows a settled (or visibly looping) position.
    pub ending_waves: usize,

    /// Flip a coin for which policy plays White.
    pub random_sides: bool,

    /// Seed for side assignment.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            max_turns: 1_000,
            max_cascade_waves: 10_000,
            ending_waves: 10,
            random_sides: false,
            seed: 0,
        }
    }
}

impl MatchConfig {
    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            ..Self::default()
        }
    }

    /// Set the turn cap.
    pub fn with_max_turns(mut self, max: u32) -> Self {
        self.max_turns = max;
        self
    }

    /// Set the per-cascade wave cap.
    pub fn with_max_cascade_waves(mut self, max: usize) -> Self {
        self.max_cascade_waves = max;
        self
    }

    /// Set how many waves run after the game is decided.
    pub fn with_ending_waves(mut self, waves: usize) -> Self {
        self.ending_waves = waves;
        self
    }

    /// Randomize which policy plays White.
    pub fn with_random_sides(mut self, random: bool) -> Self {
        self.random_sides = random;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.ending_waves, 10);
        assert!(!config.random_sides);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new(GameConfig::new(3, 4))
            .with_max_turns(50)
            .with_ending_waves(2)
            .with_random_sides(true)
            .with_seed(11);

        assert_eq!(config.game.rows, 3);
        assert_eq!(config.game.columns, 4);
        assert_eq!(config.max_turns, 50);
        assert_eq!(config.ending_waves, 2);
        assert!(config.random_sides);
        assert_eq!(config.seed, 11);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"max_turns": 20, "random_sides": true}"#).unwrap();
        assert_eq!(config.max_turns, 20);
        assert!(config.random_sides);
        assert_eq!(config.ending_waves, 10);
        assert_eq!(config.game, GameConfig::default());
    }
}
