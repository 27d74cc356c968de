//! Cells and the fixed 10×10 grid of per-cell state.
//!
//! Each side owns two grids: the *ship grid* (ground truth, holds `Ship`)
//! and the *shot grid* (what the opponent has fired at, holds only
//! `Empty`, `Hit` and `Miss`). Storage is a flat array indexed row-major.

use core::fmt;

use crate::common::BoardError;
use crate::config::{BOARD_CELLS, BOARD_SIZE};

/// A board position. Values off the board are representable so that the
/// placement validator can reject them; the grid refuses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major index into a board array, if the cell is on the board.
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then(|| self.row * BOARD_SIZE + self.col)
    }

    /// Inverse of [`Cell::index`]. `idx` must be below `BOARD_CELLS`.
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < BOARD_CELLS);
        Self::new(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// Chebyshev distance: 0 for the same cell, 1 for any of the 8 neighbours.
    pub fn chebyshev(self, other: Cell) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Cell shifted by `(d_row, d_col)`, or `None` if it leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Cell> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let cell = Cell::new(row, col);
        cell.in_bounds().then_some(cell)
    }

    /// On-board cells of the 8-neighbourhood, excluding the cell itself.
    pub fn neighbours(self) -> impl Iterator<Item = Cell> {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// `true` once a shot has landed on the cell.
    pub fn is_tried(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }

    /// Single-character code used by [`Grid::to_compact_string`].
    pub fn code(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Ship => 'S',
            CellState::Hit => 'H',
            CellState::Miss => 'M',
        }
    }
}

/// Fixed-size 10×10 grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [CellState; BOARD_CELLS],
}

impl Grid {
    /// A grid with every cell `Empty`.
    pub fn new() -> Self {
        Self {
            cells: [CellState::Empty; BOARD_CELLS],
        }
    }

    pub fn get(&self, cell: Cell) -> Result<CellState, BoardError> {
        let idx = Self::index_of(cell)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, cell: Cell, state: CellState) -> Result<(), BoardError> {
        let idx = Self::index_of(cell)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Cells currently in `state`, in row-major order.
    pub fn cells_in(&self, state: CellState) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, s)| *s == state)
            .map(|(idx, _)| Cell::from_index(idx))
    }

    /// Every cell paired with its state, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &s)| (Cell::from_index(idx), s))
    }

    /// 100 characters, row-major, one [`CellState::code`] per cell.
    pub fn to_compact_string(&self) -> alloc::string::String {
        self.cells.iter().map(|s| s.code()).collect()
    }

    fn index_of(cell: Cell) -> Result<usize, BoardError> {
        cell.index().ok_or(BoardError::OutOfBounds {
            row: cell.row,
            col: cell.col,
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.cells.chunks(BOARD_SIZE) {
            for state in row {
                write!(f, "{} ", state.code())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
