//! Common types for Broadside: shot outcomes and the error kinds of the core.

use core::fmt;

use crate::grid::Cell;
use crate::ship::ShipId;

/// Result of a shot that landed on an untried cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot hit open water.
    Miss,
    /// Shot hit a ship that still has unhit segments.
    Hit,
    /// Shot hit the last intact segment of a ship.
    Sunk(ShipId),
}

impl ShotOutcome {
    /// Hits and sinks grant the shooter another shot.
    pub fn grants_bonus_shot(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    /// Lower-case label used in logs and the turn record.
    pub fn label(self) -> &'static str {
        match self {
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "hit",
            ShotOutcome::Sunk(_) => "sunk",
        }
    }
}

/// Errors returned by grid and shot operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// The cell was already fired at; nothing changed.
    AlreadyTried(Cell),
    /// The ship grid holds a segment the fleet does not own.
    UnknownShipHit(Cell),
    /// A shot was fired after one side lost its whole fleet.
    GameOver,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell (row {}, col {}) is off the board", row, col)
            }
            BoardError::AlreadyTried(cell) => write!(f, "{} has already been fired at", cell),
            BoardError::UnknownShipHit(cell) => {
                write!(f, "ship segment at {} belongs to no ship in the fleet", cell)
            }
            BoardError::GameOver => write!(f, "the match is already decided"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Reasons a proposed fleet is rejected. The whole proposal is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship counts per length differ from the required composition.
    FleetSizeMismatch,
    /// Ship at this index is not a straight run of distinct consecutive cells.
    InvalidShape { ship: usize },
    /// Ship at this index has a cell off the board.
    OutOfBounds { ship: usize, cell: Cell },
    /// Two ships share a cell or touch, diagonals included.
    ShipsAdjacentOrOverlapping { first: usize, second: usize },
    /// Random fleet generation ran out of attempts.
    UnableToPlaceFleet,
}

impl PlacementError {
    /// Stable reason code for the rejection.
    pub fn reason_code(&self) -> &'static str {
        match self {
            PlacementError::FleetSizeMismatch => "FleetSizeMismatch",
            PlacementError::InvalidShape { .. } => "InvalidShape",
            PlacementError::OutOfBounds { .. } => "OutOfBounds",
            PlacementError::ShipsAdjacentOrOverlapping { .. } => "ShipsAdjacentOrOverlapping",
            PlacementError::UnableToPlaceFleet => "UnableToPlaceFleet",
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::FleetSizeMismatch => write!(
                f,
                "fleet must be 1 ship of size 4, 2 of size 3, 3 of size 2 and 4 of size 1"
            ),
            PlacementError::InvalidShape { ship } => write!(
                f,
                "ship {} must be a straight line of consecutive cells",
                ship + 1
            ),
            PlacementError::OutOfBounds { ship, cell } => {
                write!(f, "ship {} has a cell off the board at {}", ship + 1, cell)
            }
            PlacementError::ShipsAdjacentOrOverlapping { first, second } => write!(
                f,
                "ships {} and {} overlap or touch (diagonals count)",
                first + 1,
                second + 1
            ),
            PlacementError::UnableToPlaceFleet => write!(f, "unable to place a random fleet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
