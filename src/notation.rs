//! "A1" coordinate notation: the letter is the column, the number the
//! 1-based row. Parsing only checks syntax; whether a cell is on the board is
//! left to the grid and the fleet validator.

use alloc::vec::Vec;
use core::fmt;

use crate::config::BOARD_SIZE;
use crate::grid::Cell;

/// Malformed coordinate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationError {
    /// Nothing to parse.
    Empty,
    /// The cell does not start with a column letter.
    MissingColumn,
    /// The row is missing or not a positive number.
    InvalidRow,
    /// A range whose ends share neither a row nor a column.
    DiagonalRange,
    /// A range spanning more cells than a board row.
    RangeTooLong,
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "no coordinates given"),
            NotationError::MissingColumn => write!(f, "coordinates start with a column letter, e.g. B4"),
            NotationError::InvalidRow => write!(f, "row must be a number from 1, e.g. B4"),
            NotationError::DiagonalRange => write!(f, "a range must be horizontal or vertical"),
            NotationError::RangeTooLong => {
                write!(f, "a range may span at most {} cells", BOARD_SIZE)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotationError {}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (u8::try_from(self.col), self.row.checked_add(1)) {
            (Ok(col), Some(row)) if col < 26 => write!(f, "{}{}", char::from(b'A' + col), row),
            _ => write!(f, "(row {}, col {})", self.row, self.col),
        }
    }
}

/// Parses one cell such as `B4` or `j10`.
pub fn parse_cell(text: &str) -> Result<Cell, NotationError> {
    let text = text.trim();
    let mut chars = text.chars();
    let letter = chars.next().ok_or(NotationError::Empty)?;
    if !letter.is_ascii_alphabetic() {
        return Err(NotationError::MissingColumn);
    }
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NotationError::InvalidRow);
    }
    let row: usize = digits.parse().map_err(|_| NotationError::InvalidRow)?;
    if row == 0 {
        return Err(NotationError::InvalidRow);
    }
    let col = usize::from(letter.to_ascii_uppercase() as u8 - b'A');
    Ok(Cell::new(row - 1, col))
}

/// Parses the cells of one ship. Accepted forms:
///
/// - `A1 A2 A3` or `A1,A2,A3` (separators may be mixed)
/// - `B4-B6`, in either direction
/// - `B4` for a single cell
///
/// The cells are returned as written; shape is checked by the validator.
pub fn parse_ship(text: &str) -> Result<Vec<Cell>, NotationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NotationError::Empty);
    }
    if let Some((start, end)) = text.split_once('-') {
        return parse_range(parse_cell(start)?, parse_cell(end)?);
    }
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_cell)
        .collect()
}

fn parse_range(start: Cell, end: Cell) -> Result<Vec<Cell>, NotationError> {
    if start.row != end.row && start.col != end.col {
        return Err(NotationError::DiagonalRange);
    }
    let span = start.chebyshev(end) + 1;
    if span > BOARD_SIZE {
        return Err(NotationError::RangeTooLong);
    }
    let (from, to) = if start <= end { (start, end) } else { (end, start) };
    let cells = (0..span)
        .map(|i| {
            if from.row == to.row {
                Cell::new(from.row, from.col + i)
            } else {
                Cell::new(from.row + i, from.col)
            }
        })
        .collect();
    Ok(cells)
}
