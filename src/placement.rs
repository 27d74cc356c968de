//! Fleet validation.
//!
//! A proposal is a list of cell groups, one per ship, already resolved from
//! whatever notation the player used. The whole proposal is accepted or
//! rejected; there is no partial correction.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. composition: 1×4, 2×3, 3×2 and 4×1 ships
//! 2. shape: each group is a straight run of distinct consecutive cells
//! 3. bounds: every cell is on the board
//! 4. spacing: no two ships overlap or touch, diagonals included

use alloc::vec::Vec;

use crate::common::PlacementError;
use crate::config::{FLEET_COMPOSITION, MAX_SHIP_LEN};
use crate::fleet::Fleet;
use crate::grid::Cell;
use crate::ship::{straight_run, ShipGroup};

/// Validates a proposed layout and builds the fleet from it.
pub fn validate_fleet(proposal: &[Vec<Cell>]) -> Result<Fleet, PlacementError> {
    let verdict = run_checks(proposal);
    if let Err(err) = &verdict {
        log::debug!("fleet rejected: {} ({})", err.reason_code(), err);
    }
    verdict
}

fn run_checks(proposal: &[Vec<Cell>]) -> Result<Fleet, PlacementError> {
    check_composition(proposal)?;

    for (ship, cells) in proposal.iter().enumerate() {
        if straight_run(cells).is_none() {
            return Err(PlacementError::InvalidShape { ship });
        }
    }

    for (ship, cells) in proposal.iter().enumerate() {
        if let Some(&cell) = cells.iter().find(|c| !c.in_bounds()) {
            return Err(PlacementError::OutOfBounds { ship, cell });
        }
    }

    let mut ships = Vec::with_capacity(proposal.len());
    for (ship, cells) in proposal.iter().enumerate() {
        let group =
            ShipGroup::new(cells.clone()).ok_or(PlacementError::InvalidShape { ship })?;
        ships.push(group);
    }

    check_spacing(&ships)?;
    Ok(Fleet::from_ships(ships))
}

fn check_composition(proposal: &[Vec<Cell>]) -> Result<(), PlacementError> {
    let mut counts = [0usize; MAX_SHIP_LEN + 1];
    for cells in proposal {
        let len = cells.len();
        if len == 0 || len > MAX_SHIP_LEN {
            return Err(PlacementError::FleetSizeMismatch);
        }
        counts[len] += 1;
    }
    if counts != FLEET_COMPOSITION {
        return Err(PlacementError::FleetSizeMismatch);
    }
    Ok(())
}

/// Every pair of cells from two different ships must be at Chebyshev
/// distance 2 or more, i.e. no ship may enter another's 8-neighbourhood.
fn check_spacing(ships: &[ShipGroup]) -> Result<(), PlacementError> {
    for (first, ship) in ships.iter().enumerate() {
        let reach = ship.mask().neighbourhood();
        for (second, other) in ships.iter().enumerate().skip(first + 1) {
            if reach.intersects(other.mask()) {
                return Err(PlacementError::ShipsAdjacentOrOverlapping { first, second });
            }
        }
    }
    Ok(())
}
