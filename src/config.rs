//! Fixed ruleset: a 10×10 board and the classic ten-ship fleet.

pub const BOARD_SIZE: usize = 10;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Longest ship allowed in a fleet.
pub const MAX_SHIP_LEN: usize = 4;

pub const NUM_SHIPS: usize = 10;

/// Ship lengths in the order they are placed, longest first.
pub const SHIP_SIZES: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Required number of ships of each length, indexed by length.
pub const FLEET_COMPOSITION: [usize; MAX_SHIP_LEN + 1] = [0, 4, 3, 2, 1];

/// Total number of ship segments in a full fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Class name shown to players for a ship of the given length.
pub fn ship_class_name(len: usize) -> &'static str {
    match len {
        4 => "Battleship",
        3 => "Cruiser",
        2 => "Destroyer",
        1 => "Submarine",
        _ => "Unknown",
    }
}
