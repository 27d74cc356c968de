#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::string::String;
use std::vec::Vec;

use anyhow::{bail, Context};
use rand::rngs::SmallRng;

use crate::{
    common::{BoardError, ShotOutcome},
    config::{ship_class_name, SHIP_SIZES},
    fleet::Fleet,
    game::{GameStatus, Side, Waters},
    grid::{Cell, Grid},
    notation::{parse_cell, parse_ship},
    player::Player,
    ui::{render_own_board, render_player_view},
};

/// Keyword accepted in place of a fleet to get a random layout.
const RANDOM_KEYWORD: &str = "random";

/// Human player reading commands from `input` and writing prompts to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player on the terminal.
    pub fn new() -> Self {
        let stdin: Stdin = io::stdin();
        Self::with_io(stdin.lock(), io::stdout())
    }
}

impl Default for CliPlayer<StdinLock<'static>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hands back the output, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading input")?;
        if read == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_owned())
    }

    fn say(&mut self, text: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.output, "{}", text);
    }

    /// One ship of `len` cells. Re-prompts on malformed text or a wrong
    /// number of cells. `Ok(None)` when the player asked for a random fleet.
    fn read_ship(&mut self, index: usize, len: usize) -> anyhow::Result<Option<Vec<Cell>>> {
        loop {
            let line = self.prompt(&format!(
                "Ship {} ({}, size {}): ",
                index + 1,
                ship_class_name(len),
                len
            ))?;
            if line.eq_ignore_ascii_case(RANDOM_KEYWORD) {
                return Ok(None);
            }
            match parse_ship(&line) {
                Ok(cells) if cells.len() == len => return Ok(Some(cells)),
                Ok(cells) => self.say(format_args!(
                    "Expected {} cells but got {}. Try again.",
                    len,
                    cells.len()
                )),
                Err(err) => self.say(format_args!("Error: {}. Try again.", err)),
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<Fleet> {
        self.say(format_args!(
            "Place your ships, e.g. \"A1 A2 A3\", \"A1,A2,A3\" or \"B4-B6\". Type `{}` for a random fleet.",
            RANDOM_KEYWORD
        ));
        loop {
            let mut proposal = Vec::with_capacity(SHIP_SIZES.len());
            for (index, &len) in SHIP_SIZES.iter().enumerate() {
                match self.read_ship(index, len)? {
                    Some(cells) => proposal.push(cells),
                    None => {
                        let fleet = Fleet::random(rng)?;
                        self.say(format_args!("Random fleet placed."));
                        return Ok(fleet);
                    }
                }
            }
            match Fleet::validate(&proposal) {
                Ok(fleet) => {
                    let preview = Waters::new(fleet.clone());
                    self.say(format_args!("{}", render_own_board(&preview)));
                    return Ok(fleet);
                }
                Err(err) => {
                    self.say(format_args!(
                        "Fleet rejected: {}. Enter the whole fleet again.",
                        err
                    ));
                }
            }
        }
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        own: &Waters,
        target_shots: &Grid,
    ) -> anyhow::Result<Option<Cell>> {
        self.say(format_args!("\n{}", render_player_view(own, target_shots)));
        loop {
            let line = self.prompt("Your shot (e.g. B4, `quit` to stop): ")?;
            if line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }
            let cell = match parse_cell(&line) {
                Ok(cell) => cell,
                Err(err) => {
                    self.say(format_args!("Error: {}. Try again.", err));
                    continue;
                }
            };
            match target_shots.get(cell) {
                Ok(state) if state.is_tried() => {
                    self.say(format_args!("You already fired at {}. Try again.", cell))
                }
                Ok(_) => return Ok(Some(cell)),
                Err(err) => self.say(format_args!("Error: {}. Try again.", err)),
            }
        }
    }

    fn handle_shot_result(&mut self, cell: Cell, outcome: ShotOutcome) {
        self.say(format_args!("You fired at {}: {}", cell, outcome.label()));
    }

    fn handle_opponent_shot(&mut self, cell: Cell, outcome: ShotOutcome) {
        self.say(format_args!("Opponent fired at {}: {}", cell, outcome.label()));
    }

    fn handle_rejected_shot(&mut self, _cell: Cell, error: &BoardError) {
        self.say(format_args!("Shot refused: {}", error));
    }

    fn handle_game_over(&mut self, me: Side, status: GameStatus, own: &Waters, target_shots: &Grid) {
        self.say(format_args!("\nGAME OVER\n{}", render_player_view(own, target_shots)));
        match status {
            GameStatus::Won(side) if side == me => {
                self.say(format_args!("VICTORY! You have sunk all enemy ships!"))
            }
            GameStatus::Won(_) => {
                self.say(format_args!("DEFEAT. All your ships have been destroyed."))
            }
            GameStatus::InProgress => self.say(format_args!("Match stopped.")),
        }
    }
}
