//! Move policies.
//!
//! A `MovePolicy` picks a move for a player from a board snapshot. It never
//! sees the engine itself, so it cannot mutate game state.

use crate::core::{Board, GameRng, Player, Position};

/// Strategy for choosing a move.
pub trait MovePolicy {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Choose a move for `player` on `board`.
    ///
    /// Returns `None` only when the player has no candidate at all.
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Position>;
}

/// Candidate moves as seen from the board alone.
///
/// A player who owns nothing is treated as opening (any empty cell);
/// otherwise only owned cells may be reinforced.
#[must_use]
pub fn candidate_moves(board: &Board, player: Player) -> Vec<Position> {
    let owned: Vec<Position> = board.owned_by(player).collect();
    if owned.is_empty() {
        board.empty_cells().collect()
    } else {
        owned
    }
}

/// Uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Use an existing RNG stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MovePolicy for RandomPolicy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        let candidates = candidate_moves(board, player);
        self.rng.choose(&candidates).copied()
    }
}

impl<P: MovePolicy + ?Sized> MovePolicy for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        (**self).choose_move(board, player)
    }
}
