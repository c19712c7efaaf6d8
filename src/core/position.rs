//! Grid coordinates.
//!
//! Positions are zero-based `(row, col)` pairs. Rows grow downward and
//! columns grow rightward, so `(0, 0)` is the top-left cell.
//!
//! Neighbourhoods are bounds-checked against a board size and returned in a
//! fixed order, which the cascade and the AI both rely on:
//!
//! - orthogonal: up, down, left, right
//! - diagonal: top-left, top-right, bottom-left, bottom-right
//!
//! ```
//! use chain_reaction::core::Position;
//!
//! let corner = Position::new(0, 0);
//! let around: Vec<_> = corner.orthogonal(5, 5).into_iter().collect();
//! assert_eq!(around, vec![Position::new(1, 0), Position::new(0, 1)]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Up to four neighbouring positions, stored inline.
pub type Neighbors = SmallVec<[Position; 4]>;

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this position lies on a `rows × columns` board.
    #[must_use]
    pub const fn in_bounds(self, rows: usize, columns: usize) -> bool {
        self.row < rows && self.col < columns
    }

    /// Row-major index on a board with `columns` columns.
    #[must_use]
    pub const fn to_index(self, columns: usize) -> usize {
        self.row * columns + self.col
    }

    /// Inverse of [`Position::to_index`].
    #[must_use]
    pub const fn from_index(index: usize, columns: usize) -> Self {
        Self {
            row: index / columns,
            col: index % columns,
        }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Offset by a signed delta, if the result stays on the board.
    #[must_use]
    pub fn offset(
        self,
        d_row: isize,
        d_col: isize,
        rows: usize,
        columns: usize,
    ) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let moved = Position { row, col };
        moved.in_bounds(rows, columns).then_some(moved)
    }

    /// In-bounds orthogonal neighbours: up, down, left, right.
    #[must_use]
    pub fn orthogonal(self, rows: usize, columns: usize) -> Neighbors {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(|(dr, dc)| self.offset(dr, dc, rows, columns))
            .collect()
    }

    /// In-bounds diagonal neighbours: top-left, top-right, bottom-left,
    /// bottom-right.
    #[must_use]
    pub fn diagonal(self, rows: usize, columns: usize) -> Neighbors {
        [(-1, -1), (-1, 1), (1, -1), (1, 1)]
            .into_iter()
            .filter_map(|(dr, dc)| self.offset(dr, dc, rows, columns))
            .collect()
    }

    /// Number of board edges this position touches (0, 1 or 2).
    #[must_use]
    pub const fn edges_touched(self, rows: usize, columns: usize) -> u32 {
        let mut edges = 0;
        if self.row == 0 || self.row + 1 == rows {
            edges += 1;
        }
        if self.col == 0 || self.col + 1 == columns {
            edges += 1;
        }
        edges
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
