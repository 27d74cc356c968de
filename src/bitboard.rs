//! A 10×10 occupancy mask packed into a `u128`.
//!
//! Cells map to bit `row * BOARD_SIZE + col`. Besides the usual set
//! operations the mask supports an 8-neighbourhood dilation, which is how
//! ship spacing and the post-sink halo are computed.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::common::BoardError;
use crate::config::{BOARD_CELLS, BOARD_SIZE};
use crate::grid::Cell;

const BOARD_MASK: u128 = (1u128 << BOARD_CELLS) - 1;

const fn column_mask(col: usize) -> u128 {
    let mut mask = 0u128;
    let mut row = 0;
    while row < BOARD_SIZE {
        mask |= 1u128 << (row * BOARD_SIZE + col);
        row += 1;
    }
    mask
}

const FIRST_COL: u128 = column_mask(0);
const LAST_COL: u128 = column_mask(BOARD_SIZE - 1);

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitBoard {
    bits: u128,
}

impl BitBoard {
    /// Empty mask.
    #[inline]
    pub const fn new() -> Self {
        BitBoard { bits: 0 }
    }

    /// Builds a mask from raw bits, dropping anything past the last cell.
    #[inline]
    pub const fn from_raw(raw: u128) -> Self {
        BitBoard {
            bits: raw & BOARD_MASK,
        }
    }

    #[inline]
    pub const fn into_raw(self) -> u128 {
        self.bits
    }

    /// Mask of the given cells. Fails on the first off-board cell.
    pub fn from_cells<I>(cells: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut board = Self::new();
        for cell in cells {
            board.set(cell)?;
        }
        Ok(board)
    }

    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// `false` for cells off the board.
    pub fn contains(&self, cell: Cell) -> bool {
        match cell.index() {
            Some(idx) => (self.bits >> idx) & 1 == 1,
            None => false,
        }
    }

    pub fn set(&mut self, cell: Cell) -> Result<(), BoardError> {
        let idx = cell.index().ok_or(BoardError::OutOfBounds {
            row: cell.row,
            col: cell.col,
        })?;
        self.bits |= 1u128 << idx;
        Ok(())
    }

    pub fn intersects(&self, other: BitBoard) -> bool {
        self.bits & other.bits != 0
    }

    /// The mask grown by one cell in all 8 directions, clipped to the board.
    pub fn neighbourhood(self) -> Self {
        let b = self.bits;
        let wide = b | ((b & !LAST_COL) << 1) | ((b & !FIRST_COL) >> 1);
        Self::from_raw(wide | (wide << BOARD_SIZE) | (wide >> BOARD_SIZE))
    }

    /// Cells touching the mask (diagonals included) that are not in it.
    pub fn halo(self) -> Self {
        self.neighbourhood() & !self
    }

    /// Iterator over the set cells in row-major order.
    pub fn iter(&self) -> Cells {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl fmt::Debug for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard:")?;
        write!(f, "{}", self)?;
        writeln!(f)
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let bit = if self.contains(Cell::new(r, c)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set cells of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct Cells {
    bits: u128,
    idx: usize,
}

impl Iterator for Cells {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < BOARD_CELLS {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & 1 == 1 {
                return Some(Cell::from_index(idx));
            }
        }
        None
    }
}

impl FromIterator<Cell> for BitBoard {
    /// Collects on-board cells; off-board cells are skipped.
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut board = Self::new();
        for cell in iter {
            let _ = board.set(cell);
        }
        board
    }
}

impl BitAnd for BitBoard {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl BitOr for BitBoard {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

/// Complement within the board.
impl Not for BitBoard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl BitAndAssign for BitBoard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOrAssign for BitBoard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}
