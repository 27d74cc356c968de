//! Ship groups: straight runs of consecutive cells.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::config::ship_class_name;
use crate::grid::Cell;

/// Orientation of a ship longer than one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Index of a ship within its fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

/// Orientation implied by a proposed group of cells, or `None` when the cells
/// are not a straight run of distinct consecutive cells. A single cell has
/// no orientation and is accepted as `Some(None)`.
pub fn straight_run(cells: &[Cell]) -> Option<Option<Orientation>> {
    let first = *cells.first()?;
    if cells.len() == 1 {
        return Some(None);
    }
    let orientation = if cells.iter().all(|c| c.row == first.row) {
        Orientation::Horizontal
    } else if cells.iter().all(|c| c.col == first.col) {
        Orientation::Vertical
    } else {
        return None;
    };
    let mut along: Vec<usize> = cells
        .iter()
        .map(|c| match orientation {
            Orientation::Horizontal => c.col,
            Orientation::Vertical => c.row,
        })
        .collect();
    along.sort_unstable();
    // Exactly one step apart also rules out duplicates.
    along
        .windows(2)
        .all(|w| w[0].checked_add(1) == Some(w[1]))
        .then_some(Some(orientation))
}

/// A placed ship. Immutable once built; whether it is sunk is derived from
/// the shot grid, not stored here.
#[derive(Clone, PartialEq, Eq)]
pub struct ShipGroup {
    cells: Vec<Cell>,
    orientation: Option<Orientation>,
    mask: BitBoard,
}

impl ShipGroup {
    /// Builds a ship from on-board cells forming a straight consecutive run.
    /// Returns `None` for anything else.
    pub(crate) fn new(mut cells: Vec<Cell>) -> Option<Self> {
        let orientation = straight_run(&cells)?;
        let mask = BitBoard::from_cells(cells.iter().copied()).ok()?;
        cells.sort_unstable();
        Some(Self {
            cells,
            orientation,
            mask,
        })
    }

    /// Cells ordered from top-left to bottom-right.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `None` for single-cell ships.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> BitBoard {
        self.mask
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.mask.contains(cell)
    }

    pub fn class_name(&self) -> &'static str {
        ship_class_name(self.len())
    }
}

impl fmt::Debug for ShipGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShipGroup {{ class: \"{}\", cells: {:?}, orientation: {:?} }}",
            self.class_name(),
            self.cells,
            self.orientation,
        )
    }
}
