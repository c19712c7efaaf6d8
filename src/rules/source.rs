//! Move sources.
//!
//! `Game::execute_turn` pulls candidate positions from a `MoveSource`
//! until one is legal. The retry count lets an interactive source change its
//! prompt ("bad input, try again") and lets a scripted source walk through a
//! list of fallbacks.
//!
//! Any `FnMut(u32) -> Position` closure is a source:
//!
//! ```
//! use chain_reaction::core::Position;
//! use chain_reaction::rules::Game;
//!
//! let mut game = Game::with_size(5, 5).unwrap();
//! game.execute_turn(&mut |_retry: u32| Position::new(2, 2));
//! assert_eq!(game.board().value(Position::new(2, 2)), 3);
//! ```

use crate::core::Position;

/// Supplier of candidate moves.
pub trait MoveSource {
    /// Produce a candidate.
    ///
    /// `retry` is 0 on the first attempt of a turn and counts up by one for
    /// every candidate the engine has rejected since.
    fn next_move(&mut self, retry: u32) -> Position;
}

impl<F> MoveSource for F
where
    F: FnMut(u32) -> Position,
{
    fn next_move(&mut self, retry: u32) -> Position {
        self(retry)
    }
}

/// Source that replays a fixed list of candidates, one per attempt.
///
/// After the list is exhausted the last candidate repeats, so an all-illegal
/// script never terminates; tests should always end with a legal move.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    moves: Vec<Position>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of candidates handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl MoveSource for ScriptedSource {
    fn next_move(&mut self, _retry: u32) -> Position {
        let index = self.cursor.min(self.moves.len().saturating_sub(1));
        self.cursor += 1;
        self.moves.get(index).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_source_sees_retry() {
        let mut seen = Vec::new();
        let mut source = |retry: u32| {
            seen.push(retry);
            Position::new(retry as usize, 0)
        };

        assert_eq!(source.next_move(0), Position::new(0, 0));
        assert_eq!(source.next_move(1), Position::new(1, 0));
        drop(source);
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn test_scripted_source_repeats_last() {
        let mut source = ScriptedSource::new([Position::new(0, 0), Position::new(1, 1)]);

        assert_eq!(source.next_move(0), Position::new(0, 0));
        assert_eq!(source.next_move(1), Position::new(1, 1));
        assert_eq!(source.next_move(2), Position::new(1, 1));
        assert_eq!(source.consumed(), 3);
    }
}
