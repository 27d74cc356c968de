//! A validated fleet and random fleet generation.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::PlacementError;
use crate::config::{BOARD_CELLS, BOARD_SIZE, NUM_SHIPS, SHIP_SIZES};
use crate::grid::{Cell, CellState, Grid};
use crate::placement::validate_fleet;
use crate::ship::{ShipGroup, ShipId};

/// Attempts at placing one ship before the whole layout is restarted.
const SHIP_ATTEMPTS: usize = 100;
/// Layout restarts before random generation gives up.
const LAYOUT_ATTEMPTS: usize = 1000;

/// One side's ships, fixed for the match.
#[derive(Clone)]
pub struct Fleet {
    ships: Vec<ShipGroup>,
    owners: [Option<ShipId>; BOARD_CELLS],
    occupancy: BitBoard,
}

impl Fleet {
    /// Only called with groups that passed validation.
    pub(crate) fn from_ships(ships: Vec<ShipGroup>) -> Self {
        let mut owners = [None; BOARD_CELLS];
        let mut occupancy = BitBoard::new();
        for (i, ship) in ships.iter().enumerate() {
            occupancy |= ship.mask();
            for cell in ship.cells() {
                if let Some(idx) = cell.index() {
                    owners[idx] = Some(ShipId(i));
                }
            }
        }
        Fleet {
            ships,
            owners,
            occupancy,
        }
    }

    /// Validates a proposed layout. See [`crate::placement`].
    pub fn validate(proposal: &[Vec<Cell>]) -> Result<Self, PlacementError> {
        validate_fleet(proposal)
    }

    /// Random layout with ships placed longest first, never touching.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, PlacementError> {
        for attempt in 0..LAYOUT_ATTEMPTS {
            if let Some(layout) = random_layout(rng) {
                log::trace!("random fleet found after {} restarts", attempt);
                return validate_fleet(&layout);
            }
        }
        Err(PlacementError::UnableToPlaceFleet)
    }

    pub fn ships(&self) -> &[ShipGroup] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&ShipGroup> {
        self.ships.get(id.index())
    }

    /// Ship occupying `cell`, in constant time.
    pub fn owner_of(&self, cell: Cell) -> Option<ShipId> {
        cell.index().and_then(|idx| self.owners[idx])
    }

    /// Mask of every ship segment.
    pub fn occupancy(&self) -> BitBoard {
        self.occupancy
    }

    pub fn total_cells(&self) -> usize {
        self.occupancy.count()
    }

    /// Ground-truth grid with `Ship` on every segment.
    pub fn ship_grid(&self) -> Grid {
        let mut grid = Grid::new();
        for cell in self.occupancy.iter() {
            // Occupancy only holds on-board cells.
            let _ = grid.set(cell, CellState::Ship);
        }
        grid
    }

    /// The layout as a proposal, one cell list per ship.
    pub fn layout(&self) -> Vec<Vec<Cell>> {
        self.ships.iter().map(|s| s.cells().to_vec()).collect()
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fleet")
            .field("ships", &self.ships)
            .field("occupancy", &self.occupancy)
            .finish()
    }
}

fn random_layout<R: Rng + ?Sized>(rng: &mut R) -> Option<Vec<Vec<Cell>>> {
    let mut blocked = BitBoard::new();
    let mut layout = Vec::with_capacity(NUM_SHIPS);
    for &len in SHIP_SIZES.iter() {
        let cells = random_ship(rng, len, blocked)?;
        let mask: BitBoard = cells.iter().copied().collect();
        blocked |= mask.neighbourhood();
        layout.push(cells);
    }
    Some(layout)
}

fn random_ship<R: Rng + ?Sized>(rng: &mut R, len: usize, blocked: BitBoard) -> Option<Vec<Cell>> {
    for _ in 0..SHIP_ATTEMPTS {
        let horizontal: bool = rng.random();
        let (max_r, max_c) = if horizontal {
            (BOARD_SIZE - 1, BOARD_SIZE - len)
        } else {
            (BOARD_SIZE - len, BOARD_SIZE - 1)
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        let cells: Vec<Cell> = (0..len)
            .map(|i| {
                if horizontal {
                    Cell::new(r, c + i)
                } else {
                    Cell::new(r + i, c)
                }
            })
            .collect();
        if cells.iter().all(|&cell| !blocked.contains(cell)) {
            return Some(cells);
        }
    }
    None
}
