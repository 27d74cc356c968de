use core::fmt;

use crate::{
    common::{BoardError, ShotOutcome},
    fleet::Fleet,
    grid::{Cell, CellState, Grid},
    resolver::resolve_shot,
};

/// The two sides of a match. The human always shoots first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Bot,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Bot,
            Side::Bot => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Bot => write!(f, "bot"),
        }
    }
}

/// One side's waters: its fleet, the ground-truth ship grid and the grid of
/// shots the opponent has fired into it.
#[derive(Debug, Clone)]
pub struct Waters {
    fleet: Fleet,
    ship_grid: Grid,
    shots: Grid,
}

impl Waters {
    pub fn new(fleet: Fleet) -> Self {
        let ship_grid = fleet.ship_grid();
        Self {
            fleet,
            ship_grid,
            shots: Grid::new(),
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ship_grid(&self) -> &Grid {
        &self.ship_grid
    }

    /// Shots received so far. This is also the shooter's view of these waters.
    pub fn shots(&self) -> &Grid {
        &self.shots
    }

    /// Resolves an incoming shot. See [`resolve_shot`].
    pub fn receive_shot(&mut self, target: Cell) -> Result<ShotOutcome, BoardError> {
        resolve_shot(&mut self.shots, &self.ship_grid, &self.fleet, target)
    }

    /// `true` once every ship segment has been hit.
    pub fn all_sunk(&self) -> bool {
        self.fleet
            .occupancy()
            .iter()
            .all(|cell| self.shots.get(cell) == Ok(CellState::Hit))
    }

    /// Ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.fleet
            .ships()
            .iter()
            .filter(|ship| !crate::resolver::is_sunk(ship, &self.shots))
            .count()
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// A resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub shooter: Side,
    pub cell: Cell,
    pub outcome: ShotOutcome,
    /// Turn the shot belongs to. Bonus shots share their turn's number.
    pub turn: usize,
}

/// Match state: both sides' waters, whose turn it is and the turn counter.
#[derive(Debug, Clone)]
pub struct GameEngine {
    human: Waters,
    bot: Waters,
    current: Side,
    turn: usize,
    shots_fired: [usize; 2],
}

impl GameEngine {
    /// Starts a match on turn 1 with the human to shoot.
    pub fn new(human_fleet: Fleet, bot_fleet: Fleet) -> Self {
        Self {
            human: Waters::new(human_fleet),
            bot: Waters::new(bot_fleet),
            current: Side::Human,
            turn: 1,
            shots_fired: [0; 2],
        }
    }

    /// Side due to shoot next.
    pub fn current_side(&self) -> Side {
        self.current
    }

    pub fn turn_number(&self) -> usize {
        self.turn
    }

    /// Waters belonging to `side`.
    pub fn waters(&self, side: Side) -> &Waters {
        match side {
            Side::Human => &self.human,
            Side::Bot => &self.bot,
        }
    }

    /// Shots `side` has landed on untried cells.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots_fired[side_index(side)]
    }

    /// Fires the current side's shot into the opponent's waters.
    ///
    /// A hit or sink keeps the turn with the shooter; a miss passes it and
    /// advances the turn counter. On error nothing changes, so the same side
    /// simply tries again.
    pub fn fire(&mut self, target: Cell) -> Result<ShotRecord, BoardError> {
        if self.status() != GameStatus::InProgress {
            return Err(BoardError::GameOver);
        }
        let shooter = self.current;
        let outcome = self.waters_mut(shooter.opponent()).receive_shot(target)?;
        let record = ShotRecord {
            shooter,
            cell: target,
            outcome,
            turn: self.turn,
        };
        self.shots_fired[side_index(shooter)] += 1;
        if !outcome.grants_bonus_shot() {
            self.current = shooter.opponent();
            self.turn += 1;
        }
        Ok(record)
    }

    /// Evaluate the current match status.
    pub fn status(&self) -> GameStatus {
        if self.bot.all_sunk() {
            GameStatus::Won(Side::Human)
        } else if self.human.all_sunk() {
            GameStatus::Won(Side::Bot)
        } else {
            GameStatus::InProgress
        }
    }

    fn waters_mut(&mut self, side: Side) -> &mut Waters {
        match side {
            Side::Human => &mut self.human,
            Side::Bot => &mut self.bot,
        }
    }
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Human => 0,
        Side::Bot => 1,
    }
}
