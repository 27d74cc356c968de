// Hunt/lock targeting for the bot.
// Deterministic except for the random pick; no heap allocations.

use core::fmt;

use rand::Rng;

use crate::common::ShotOutcome;
use crate::grid::{Cell, CellState, Grid};

/// Orthogonal direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which the neighbours of an anchor are probed.
    pub const HUNT_ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)` of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction of a single orthogonal step from `from` to `to`, if they are
    /// orthogonal neighbours.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        Direction::HUNT_ORDER
            .into_iter()
            .find(|&dir| step(from, dir) == Some(to))
    }
}

fn step(cell: Cell, dir: Direction) -> Option<Cell> {
    let (dr, dc) = dir.delta();
    cell.offset(dr, dc)
}

/// The next cell along `dir` if it is on the board and untried.
fn open_step(shots: &Grid, from: Cell, dir: Direction) -> Option<Cell> {
    step(from, dir).filter(|&cell| shots.get(cell) == Ok(CellState::Empty))
}

/// Targeting state. Each variant carries only what that state needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotState {
    /// No damaged ship known; fire anywhere untried.
    Random,
    /// One hit on a ship whose orientation is still unknown.
    Hunt { anchor: Cell },
    /// Two or more hits in a line; walk along it from the frontier.
    Locked {
        anchor: Cell,
        direction: Direction,
        frontier: Cell,
        flipped: bool,
    },
}

impl fmt::Display for BotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotState::Random => write!(f, "random"),
            BotState::Hunt { anchor } => write!(f, "hunt around {}", anchor),
            BotState::Locked {
                direction,
                frontier,
                flipped,
                ..
            } => write!(
                f,
                "locked {:?} from {}{}",
                direction,
                frontier,
                if *flipped { " (flipped)" } else { "" }
            ),
        }
    }
}

/// Chooses the bot's shots from its own shot grid and the outcomes fed back
/// to it.
#[derive(Debug, Clone)]
pub struct BotTargeting {
    state: BotState,
}

impl BotTargeting {
    pub fn new() -> Self {
        Self {
            state: BotState::Random,
        }
    }

    pub fn state(&self) -> BotState {
        self.state
    }

    /// Forget any damaged ship and go back to random fire.
    pub fn reset(&mut self) {
        self.state = BotState::Random;
    }

    /// Picks the next cell to fire at on `shots`, the grid of shots already
    /// fired by the bot. Returns `None` only when no untried cell is left.
    ///
    /// A hunt with no untried neighbour left, or a locked line blocked on
    /// both ends, falls back to random fire.
    pub fn next_target<R: Rng + ?Sized>(&mut self, shots: &Grid, rng: &mut R) -> Option<Cell> {
        match self.state {
            BotState::Random => {}
            BotState::Hunt { anchor } => {
                let probe = Direction::HUNT_ORDER
                    .into_iter()
                    .find_map(|dir| open_step(shots, anchor, dir));
                if probe.is_some() {
                    return probe;
                }
                log::debug!("no open neighbour around {}, back to random", anchor);
                self.state = BotState::Random;
            }
            BotState::Locked {
                anchor,
                direction,
                frontier,
                flipped,
            } => {
                if let Some(cell) = open_step(shots, frontier, direction) {
                    return Some(cell);
                }
                if !flipped {
                    let reversed = direction.opposite();
                    if let Some(cell) = open_step(shots, anchor, reversed) {
                        self.state = BotState::Locked {
                            anchor,
                            direction: reversed,
                            frontier: anchor,
                            flipped: true,
                        };
                        log::trace!("line blocked past {}, flipping", frontier);
                        return Some(cell);
                    }
                }
                log::debug!("line through {} blocked both ways, back to random", anchor);
                self.state = BotState::Random;
            }
        }
        random_target(shots, rng)
    }

    /// Advances the state with the outcome of the shot fired at `target`.
    pub fn on_outcome(&mut self, target: Cell, outcome: ShotOutcome) {
        let next = match (self.state, outcome) {
            (_, ShotOutcome::Sunk(_)) => BotState::Random,
            (BotState::Random, ShotOutcome::Miss) => BotState::Random,
            (BotState::Random, ShotOutcome::Hit) => BotState::Hunt { anchor: target },
            (state @ BotState::Hunt { .. }, ShotOutcome::Miss) => state,
            (BotState::Hunt { anchor }, ShotOutcome::Hit) => {
                match Direction::between(anchor, target) {
                    Some(direction) => BotState::Locked {
                        anchor,
                        direction,
                        frontier: target,
                        flipped: false,
                    },
                    None => BotState::Hunt { anchor: target },
                }
            }
            (
                BotState::Locked {
                    anchor,
                    direction,
                    flipped,
                    ..
                },
                ShotOutcome::Miss,
            ) => {
                if flipped {
                    BotState::Random
                } else {
                    BotState::Locked {
                        anchor,
                        direction: direction.opposite(),
                        frontier: anchor,
                        flipped: true,
                    }
                }
            }
            (
                BotState::Locked {
                    anchor,
                    direction,
                    frontier,
                    flipped,
                },
                ShotOutcome::Hit,
            ) => {
                if step(frontier, direction) == Some(target) {
                    BotState::Locked {
                        anchor,
                        direction,
                        frontier: target,
                        flipped,
                    }
                } else {
                    BotState::Hunt { anchor: target }
                }
            }
        };
        if next != self.state {
            log::debug!("bot {} -> {} after {} at {}", self.state, next, outcome.label(), target);
        }
        self.state = next;
    }
}

impl Default for BotTargeting {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniformly random untried cell.
fn random_target<R: Rng + ?Sized>(shots: &Grid, rng: &mut R) -> Option<Cell> {
    let open = shots.count(CellState::Empty);
    if open == 0 {
        return None;
    }
    let pick = rng.random_range(0..open);
    shots.cells_in(CellState::Empty).nth(pick)
}
