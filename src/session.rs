#![cfg(feature = "std")]

//! Runs a complete match between two players.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::bail;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::{
    common::BoardError,
    game::{GameEngine, GameStatus, Side},
    player::Player,
    turn_log::{FleetRecord, TurnLog},
};

/// Knobs for [`play_match`].
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Pause before each bot shot so a watching human can follow.
    pub bot_delay: Duration,
    /// Consecutive refused shots from one side before the match is aborted.
    pub max_rejected_shots: usize,
    /// Where to save both fleets once they are placed.
    pub fleet_file: Option<PathBuf>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            bot_delay: Duration::ZERO,
            max_rejected_shots: 100,
            fleet_file: None,
        }
    }
}

/// How a match ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    /// `None` when a player stopped before the end.
    pub winner: Option<Side>,
    /// Turn counter when the match ended.
    pub turns: usize,
    pub human_shots: usize,
    pub bot_shots: usize,
    pub human_ships_afloat: usize,
    pub bot_ships_afloat: usize,
}

/// Plays `human` against `bot` until one fleet is sunk or a player stops.
///
/// Both fleets are saved to `options.fleet_file` once placed. Every
/// resolved shot is logged and, if `turn_log` is given, appended to it. An inconsistent fleet is fatal; other refused shots are reported to
/// the shooter, who shoots again.
pub fn play_match<'p>(
    human: &mut (dyn Player + 'p),
    bot: &mut (dyn Player + 'p),
    rng: &mut SmallRng,
    options: &MatchOptions,
    mut turn_log: Option<&mut TurnLog>,
) -> anyhow::Result<MatchSummary> {
    let human_fleet = human.place_fleet(rng)?;
    let bot_fleet = bot.place_fleet(rng)?;
    let mut engine = GameEngine::new(human_fleet, bot_fleet);
    if let Some(path) = &options.fleet_file {
        FleetRecord::new(&engine).save(path)?;
        log::debug!("fleets saved to {}", path.display());
    }
    log::info!("match started, {} shoots first", engine.current_side());

    let mut rejected = 0;
    while engine.status() == GameStatus::InProgress {
        let side = engine.current_side();
        let (shooter, target) = match side {
            Side::Human => (&mut *human, &mut *bot),
            Side::Bot => (&mut *bot, &mut *human),
        };
        if side == Side::Bot && !options.bot_delay.is_zero() {
            thread::sleep(options.bot_delay);
        }

        let own = engine.waters(side);
        let target_shots = engine.waters(side.opponent()).shots();
        let Some(cell) = shooter.select_target(rng, own, target_shots)? else {
            log::info!("{} has no shot to fire, stopping", side);
            break;
        };

        match engine.fire(cell) {
            Ok(record) => {
                rejected = 0;
                log::debug!(
                    "turn {}: {} fires at {}: {}",
                    record.turn,
                    side,
                    cell,
                    record.outcome.label()
                );
                if let Some(log) = turn_log.as_deref_mut() {
                    log.record(&engine, &record)?;
                }
                shooter.handle_shot_result(cell, record.outcome);
                target.handle_opponent_shot(cell, record.outcome);
            }
            Err(err @ BoardError::UnknownShipHit(_)) => {
                return Err(anyhow::Error::new(err).context("fleet and ship grid disagree"));
            }
            Err(err) => {
                rejected += 1;
                log::warn!("{} shot at {} refused: {}", side, cell, err);
                shooter.handle_rejected_shot(cell, &err);
                if rejected >= options.max_rejected_shots {
                    bail!("{} had {} shots refused in a row", side, rejected);
                }
            }
        }
    }

    let status = engine.status();
    let human_waters = engine.waters(Side::Human);
    let bot_waters = engine.waters(Side::Bot);
    human.handle_game_over(Side::Human, status, human_waters, bot_waters.shots());
    bot.handle_game_over(Side::Bot, status, bot_waters, human_waters.shots());

    let winner = match status {
        GameStatus::Won(side) => Some(side),
        GameStatus::InProgress => None,
    };
    let summary = MatchSummary {
        winner,
        turns: engine.turn_number(),
        human_shots: engine.shots_fired(Side::Human),
        bot_shots: engine.shots_fired(Side::Bot),
        human_ships_afloat: human_waters.ships_afloat(),
        bot_ships_afloat: bot_waters.ships_afloat(),
    };
    log::info!("match over: {:?}", summary);
    Ok(summary)
}
