//! Error types for game construction and direct placement.

use thiserror::Error;

use super::position::Position;

/// Errors raised by the engine.
///
/// Illegal candidates supplied to `Game::execute_turn` are retried rather
/// than reported; these variants only surface from construction and from
/// the non-retrying `Game::try_place`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the game board must be at least 2x2, got {rows}x{columns}")]
    BoardTooSmall { rows: usize, columns: usize },

    #[error("a {rows}x{columns} board has too many cells")]
    BoardTooLarge { rows: usize, columns: usize },

    #[error("malformed board: {0}")]
    MalformedBoard(String),

    #[error("malformed seed board: {0}")]
    MalformedSeed(String),

    #[error("illegal move at {0}")]
    IllegalMove(Position),

    #[error("a cascade is pending; resolve it before placing")]
    CascadePending,
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_too_small_display() {
        let err = GameError::BoardTooSmall { rows: 1, columns: 5 };
        assert_eq!(err.to_string(), "the game board must be at least 2x2, got 1x5");
    }

    #[test]
    fn test_board_too_large_display() {
        let err = GameError::BoardTooLarge { rows: usize::MAX, columns: 2 };
        assert_eq!(err.to_string(), format!("a {}x2 board has too many cells", usize::MAX));
    }

    #[test]
    fn test_illegal_move_display() {
        let err = GameError::IllegalMove(Position::new(2, 3));
        assert_eq!(err.to_string(), "illegal move at (2, 3)");
    }
}
