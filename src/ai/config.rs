//! Heuristic AI configuration.

use serde::{Deserialize, Serialize};

/// Scoring weights for [`super::HeuristicPolicy`].
///
/// All weights are magnitudes; the sign of each factor is fixed by the
/// scoring pass (penalties subtract, bonuses add).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Per board edge the cell touches (a corner counts twice).
    pub edge_penalty: i32,

    /// Cell is not primed but sits next to a primed cell (applied once).
    pub adjacent_primed_penalty: i32,

    /// Primed cell next to a primed cell it does not own (per neighbour).
    pub burst_bonus: i32,

    /// Multiplier for the diagonal fill bonus of an unprimed cell.
    pub corner_fill_weight: i32,

    /// Multiplier for the diagonal burst penalty of a primed cell.
    pub corner_burst_weight: i32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            edge_penalty: 1,
            adjacent_primed_penalty: 3,
            burst_bonus: 7,
            corner_fill_weight: 1,
            corner_burst_weight: 1,
        }
    }
}

impl HeuristicConfig {
    /// Set the edge penalty.
    #[must_use]
    pub fn with_edge_penalty(mut self, penalty: i32) -> Self {
        self.edge_penalty = penalty;
        self
    }

    /// Set the burst bonus.
    #[must_use]
    pub fn with_burst_bonus(mut self, bonus: i32) -> Self {
        self.burst_bonus = bonus;
        self
    }

    /// Set the adjacent-primed penalty.
    #[must_use]
    pub fn with_adjacent_primed_penalty(mut self, penalty: i32) -> Self {
        self.adjacent_primed_penalty = penalty;
        self
    }
}
