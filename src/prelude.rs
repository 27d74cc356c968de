//! Commonly used types and utilities for ease of import.

pub use crate::{
    parse_cell, parse_ship, resolve_shot, validate_fleet, AiPlayer, BotState, BotTargeting, Cell,
    CellState, CliPlayer, Fleet, GameEngine, GameStatus, Grid, Player, ShotOutcome, Side,
};

pub use crate::session::{play_match, MatchOptions, MatchSummary};
pub use crate::turn_log::{FleetRecord, TurnLog};
