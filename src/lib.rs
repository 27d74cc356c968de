#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod notation;
mod placement;
mod resolver;
mod ship;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player;
#[cfg(feature = "std")]
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod turn_log;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, Cells};
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use notation::*;
pub use placement::validate_fleet;
pub use resolver::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
#[cfg(feature = "std")]
pub use player::*;
#[cfg(feature = "std")]
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
