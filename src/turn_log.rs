#![cfg(feature = "std")]

//! JSON-lines log of resolved shots, one object per line, and the fleet
//! record written when a match starts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::string::String;
use std::vec::Vec;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    common::ShotOutcome,
    fleet::Fleet,
    game::{GameEngine, ShotRecord, Side},
};

/// One line of the turn log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEntry {
    pub turn: usize,
    pub shooter: Side,
    /// Target in "A1" notation.
    pub cell: String,
    pub row: usize,
    pub col: usize,
    /// `miss`, `hit` or `sunk`.
    pub outcome: String,
    /// 1-based index of the ship sunk by this shot.
    pub sunk_ship: Option<usize>,
    /// Shots received by the human side after this shot, row-major codes.
    pub human_waters: String,
    /// Shots received by the bot side after this shot.
    pub bot_waters: String,
}

impl TurnEntry {
    pub fn new(engine: &GameEngine, record: &ShotRecord) -> Self {
        let sunk_ship = match record.outcome {
            ShotOutcome::Sunk(id) => Some(id.index() + 1),
            _ => None,
        };
        Self {
            turn: record.turn,
            shooter: record.shooter,
            cell: record.cell.to_string(),
            row: record.cell.row,
            col: record.cell.col,
            outcome: record.outcome.label().to_owned(),
            sunk_ship,
            human_waters: engine.waters(Side::Human).shots().to_compact_string(),
            bot_waters: engine.waters(Side::Bot).shots().to_compact_string(),
        }
    }
}

/// Append-only turn log file.
pub struct TurnLog {
    out: BufWriter<File>,
}

impl TurnLog {
    /// Creates (or truncates) the log at `path`.
    pub fn create(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("creating turn log {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    /// Appends `record`, taken right after it was fired on `engine`.
    pub fn record(&mut self, engine: &GameEngine, record: &ShotRecord) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, &TurnEntry::new(engine, record))?;
        self.out.write_all(b"\n")?;
        // Keep the file readable while the match is still running.
        self.out.flush()?;
        Ok(())
    }
}

/// Both fleets as placed, each ship a list of cells in "A1" notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetRecord {
    pub human: Vec<Vec<String>>,
    pub bot: Vec<Vec<String>>,
}

fn ship_cells(fleet: &Fleet) -> Vec<Vec<String>> {
    fleet
        .layout()
        .iter()
        .map(|ship| ship.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

impl FleetRecord {
    pub fn new(engine: &GameEngine) -> Self {
        Self {
            human: ship_cells(engine.waters(Side::Human).fleet()),
            bot: ship_cells(engine.waters(Side::Bot).fleet()),
        }
    }

    /// Writes the record to `path` as a single JSON object.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("creating fleet record {}", path.display()))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer(&mut out, self)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}
