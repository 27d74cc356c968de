#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::{
    common::{BoardError, ShotOutcome},
    fleet::Fleet,
    game::{GameStatus, Side, Waters},
    grid::{Cell, Grid},
};

/// Interface implemented by different player types.
pub trait Player {
    /// Produce this player's fleet for the match.
    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<Fleet>;

    /// Choose the next cell to fire at. `own` is the player's waters and
    /// `target_shots` the player's shots into the opponent's waters.
    ///
    /// `None` means the player has no shot to offer and the match stops.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Waters,
        target_shots: &Grid,
    ) -> anyhow::Result<Option<Cell>>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _cell: Cell, _outcome: ShotOutcome) {}

    /// Inform the player of an opponent shot into its waters.
    fn handle_opponent_shot(&mut self, _cell: Cell, _outcome: ShotOutcome) {}

    /// The engine refused the shot; the player shoots again.
    fn handle_rejected_shot(&mut self, _cell: Cell, _error: &BoardError) {}

    /// The match is over. `me` is the side this player played.
    fn handle_game_over(&mut self, _me: Side, _status: GameStatus, _own: &Waters, _target_shots: &Grid) {}
}
