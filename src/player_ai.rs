#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::{
    ai::{BotState, BotTargeting},
    common::{BoardError, ShotOutcome},
    fleet::Fleet,
    game::Waters,
    grid::{Cell, Grid},
    player::Player,
};

/// Computer player: random fleet, hunt/lock targeting.
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    targeting: BotTargeting,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targeting_state(&self) -> BotState {
        self.targeting.state()
    }
}

impl Player for AiPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<Fleet> {
        Ok(Fleet::random(rng)?)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _own: &Waters,
        target_shots: &Grid,
    ) -> anyhow::Result<Option<Cell>> {
        Ok(self.targeting.next_target(target_shots, rng))
    }

    fn handle_shot_result(&mut self, cell: Cell, outcome: ShotOutcome) {
        self.targeting.on_outcome(cell, outcome);
    }

    fn handle_rejected_shot(&mut self, cell: Cell, error: &BoardError) {
        log::warn!("bot shot at {} rejected: {}", cell, error);
        self.targeting.reset();
    }
}
