//! Board storage: piece counts and owners.
//!
//! Each cell carries its own owner tag next to its piece count, so
//! "which cells does White own" is derived from the grid rather than kept
//! in a separate list that could drift out of sync.
//!
//! ## Snapshots
//!
//! Cells live in an `im::Vector`, so cloning a `Board` is O(1) and the
//! clone is fully isolated: later writes to either copy never show through
//! to the other. The AI and renderers work on such snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::Player;
use super::position::Position;

/// Value at which a cell explodes.
pub const CRITICAL_MASS: u8 = 4;

/// Value an opening placement sets.
pub const OPENING_VALUE: u8 = 3;

/// Smallest legal board dimension.
pub const MIN_DIMENSION: usize = 2;

/// Largest number of cells a board may hold.
pub const MAX_CELLS: usize = 1 << 24;

/// A single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Piece count, 0..=4.
    pub value: u8,
    /// Owning player; `None` exactly when `value == 0` outside a cascade.
    pub owner: Option<Player>,
}

impl Cell {
    /// An empty, unowned cell.
    pub const EMPTY: Cell = Cell {
        value: 0,
        owner: None,
    };

    /// A cell with `value` pieces belonging to `player`.
    #[must_use]
    pub const fn owned(player: Player, value: u8) -> Self {
        Self {
            value,
            owner: Some(player),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.value == 0
    }

    /// Check whether `player` owns this cell.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner == Some(player)
    }
}

/// A `rows × columns` grid of cells in row-major order.
///
/// Deserialization goes through the same dimension checks as
/// [`Board::new`] and rejects cell lists of the wrong length or cells whose
/// owner and value disagree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vector<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    columns: usize,
    cells: Vector<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        let len = Board::cell_count(raw.rows, raw.columns)?;
        if raw.cells.len() != len {
            return Err(GameError::MalformedBoard(format!(
                "{}x{} board needs {} cells, got {}",
                raw.rows,
                raw.columns,
                len,
                raw.cells.len()
            )));
        }

        let bad = raw.cells.iter().position(|cell| {
            cell.value > CRITICAL_MASS || cell.owner.is_some() != (cell.value > 0)
        });
        if let Some(index) = bad {
            return Err(GameError::MalformedBoard(format!(
                "inconsistent cell at {}",
                Position::from_index(index, raw.columns)
            )));
        }

        Ok(Self {
            rows: raw.rows,
            columns: raw.columns,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with [`GameError::BoardTooSmall`] if either dimension is below 2
    /// and with [`GameError::BoardTooLarge`] past [`MAX_CELLS`] cells.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let len = Self::cell_count(rows, columns)?;

        Ok(Self {
            rows,
            columns,
            cells: std::iter::repeat(Cell::EMPTY).take(len).collect(),
        })
    }

    fn cell_count(rows: usize, columns: usize) -> Result<usize> {
        if rows < MIN_DIMENSION || columns < MIN_DIMENSION {
            return Err(GameError::BoardTooSmall { rows, columns });
        }
        rows.checked_mul(columns)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(GameError::BoardTooLarge { rows, columns })
    }

    /// Build a board from a seed matrix.
    ///
    /// Encoding per cell: `0` empty, `1..=3` White with that many pieces,
    /// `-1..=-3` Black with that many pieces. The matrix must be exactly
    /// `rows × columns`.
    pub fn from_seed(rows: usize, columns: usize, seed: &[Vec<i8>]) -> Result<Self> {
        let mut board = Self::new(rows, columns)?;

        if seed.len() != rows {
            return Err(GameError::MalformedSeed(format!(
                "expected {} rows, got {}",
                rows,
                seed.len()
            )));
        }

        for (row, line) in seed.iter().enumerate() {
            if line.len() != columns {
                return Err(GameError::MalformedSeed(format!(
                    "row {} has {} columns, expected {}",
                    row,
                    line.len(),
                    columns
                )));
            }
            for (col, &raw) in line.iter().enumerate() {
                let cell = match raw {
                    0 => Cell::EMPTY,
                    1..=3 => Cell::owned(Player::White, raw.unsigned_abs()),
                    -3..=-1 => Cell::owned(Player::Black, raw.unsigned_abs()),
                    _ => {
                        return Err(GameError::MalformedSeed(format!(
                            "value {} at ({}, {}) is outside -3..=3",
                            raw, row, col
                        )))
                    }
                };
                board.set(Position::new(row, col), cell);
            }
        }

        Ok(board)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Check whether a position lies on this board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.rows, self.columns)
    }

    /// Get a cell, or `None` if the position is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if self.contains(pos) {
            self.cells.get(pos.to_index(self.columns))
        } else {
            None
        }
    }

    /// Piece count at a position (0 when off the board).
    #[must_use]
    pub fn value(&self, pos: Position) -> u8 {
        self.get(pos).map_or(0, |cell| cell.value)
    }

    /// Owner at a position (`None` when empty or off the board).
    #[must_use]
    pub fn owner(&self, pos: Position) -> Option<Player> {
        self.get(pos).and_then(|cell| cell.owner)
    }

    /// Check whether `player` owns the cell at `pos`.
    #[must_use]
    pub fn is_owned_by(&self, pos: Position, player: Player) -> bool {
        self.owner(pos) == Some(player)
    }

    /// Overwrite a cell. Off-board positions are ignored.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if self.contains(pos) {
            self.cells.set(pos.to_index(self.columns), cell);
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let columns = self.columns;
        (0..self.rows * self.columns).map(move |i| Position::from_index(i, columns))
    }

    /// `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::from_index(i, columns), cell))
    }

    /// Positions owned by `player`, row-major.
    pub fn owned_by(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |(_, cell)| cell.is_owned_by(player))
            .map(|(pos, _)| pos)
    }

    /// Number of cells owned by `player`.
    #[must_use]
    pub fn count_owned(&self, player: Player) -> usize {
        self.cells.iter().filter(|cell| cell.is_owned_by(player)).count()
    }

    /// Empty positions, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
    }

    /// Sum of all piece counts.
    #[must_use]
    pub fn total_mass(&self) -> u32 {
        self.cells.iter().map(|cell| u32::from(cell.value)).sum()
    }

    /// Piece counts as a row-major matrix.
    #[must_use]
    pub fn values(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| {
                (0..self.columns)
                    .map(|col| self.value(Position::new(row, col)))
                    .collect()
            })
            .collect()
    }
}
