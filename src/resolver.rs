//! Shot resolution shared by both sides.
//!
//! A shot at an untried cell marks it `Hit` or `Miss` in the shot grid. When
//! the hit completes a ship, every still-`Empty` cell around that ship is
//! marked `Miss`: ships never touch, so the halo is known to be water.
//!
//! Awarding the bonus shot after a hit is left to the caller.

use crate::common::{BoardError, ShotOutcome};
use crate::fleet::Fleet;
use crate::grid::{Cell, CellState, Grid};
use crate::ship::ShipGroup;

/// Applies one shot at `target`.
///
/// Returns `AlreadyTried` without touching `shots` if the cell was fired at
/// before, and `UnknownShipHit` if `ships` and `fleet` disagree.
pub fn resolve_shot(
    shots: &mut Grid,
    ships: &Grid,
    fleet: &Fleet,
    target: Cell,
) -> Result<ShotOutcome, BoardError> {
    if shots.get(target)?.is_tried() {
        return Err(BoardError::AlreadyTried(target));
    }
    if ships.get(target)? != CellState::Ship {
        shots.set(target, CellState::Miss)?;
        return Ok(ShotOutcome::Miss);
    }

    let id = fleet
        .owner_of(target)
        .ok_or(BoardError::UnknownShipHit(target))?;
    let ship = fleet.ship(id).ok_or(BoardError::UnknownShipHit(target))?;
    shots.set(target, CellState::Hit)?;

    if !is_sunk(ship, shots) {
        return Ok(ShotOutcome::Hit);
    }
    let mut marked = 0;
    for cell in ship.mask().halo().iter() {
        if shots.get(cell)? == CellState::Empty {
            shots.set(cell, CellState::Miss)?;
            marked += 1;
        }
    }
    log::debug!(
        "{} {} sunk at {}, {} halo cells marked",
        ship.class_name(),
        id,
        target,
        marked
    );
    Ok(ShotOutcome::Sunk(id))
}

/// `true` when every segment of `ship` is `Hit` in `shots`.
pub fn is_sunk(ship: &ShipGroup, shots: &Grid) -> bool {
    ship.cells()
        .iter()
        .all(|&cell| shots.get(cell) == Ok(CellState::Hit))
}
