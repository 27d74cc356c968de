#![cfg(feature = "std")]

//! Text rendering of boards. Columns are lettered, rows numbered from 1.

use std::fmt::Write;
use std::string::String;

use crate::{
    config::BOARD_SIZE,
    game::Waters,
    grid::{Cell, CellState, Grid},
};

fn header(out: &mut String) {
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", char::from(b'A' + c as u8));
    }
    out.push('\n');
}

fn render(symbol: impl Fn(Cell) -> char) -> String {
    let mut out = String::new();
    header(&mut out);
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let _ = write!(out, " {}", symbol(Cell::new(r, c)));
        }
        out.push('\n');
    }
    out
}

/// The player's own waters: ships `S`, hits `X`, misses `o`, water `.`.
pub fn render_own_board(waters: &Waters) -> String {
    render(|cell| {
        match (waters.shots().get(cell), waters.ship_grid().get(cell)) {
            (Ok(CellState::Hit), _) => 'X',
            (Ok(CellState::Miss), _) => 'o',
            (_, Ok(CellState::Ship)) => 'S',
            _ => '.',
        }
    })
}

/// What the player knows of the opponent: hits `X`, misses `o`.
pub fn render_target_board(shots: &Grid) -> String {
    render(|cell| match shots.get(cell) {
        Ok(CellState::Hit) => 'X',
        Ok(CellState::Miss) => 'o',
        _ => '.',
    })
}

/// Opponent board on top, own board below.
pub fn render_player_view(own: &Waters, target_shots: &Grid) -> String {
    let mut out = String::from("Opponent board:\n");
    out.push_str(&render_target_board(target_shots));
    out.push_str("\nYour board:\n");
    out.push_str(&render_own_board(own));
    out
}
