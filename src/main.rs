use std::path::PathBuf;
use std::time::Duration;

use broadside::{
    init_logging,
    session::{play_match, MatchOptions, MatchSummary},
    turn_log::TurnLog,
    AiPlayer, CliPlayer, Side,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Battleship on a 10x10 grid against a hunting bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the bot in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Write one JSON line per shot to this file")]
        log_file: Option<PathBuf>,
        #[arg(long, help = "Save both fleets to this file as JSON")]
        fleet_file: Option<PathBuf>,
        #[arg(long, default_value_t = 500, help = "Pause before each bot shot, in milliseconds")]
        bot_delay_ms: u64,
    },
    /// Watch two bots play each other.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Write one JSON line per shot to this file")]
        log_file: Option<PathBuf>,
        #[arg(long, help = "Save both fleets to this file as JSON")]
        fleet_file: Option<PathBuf>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn open_log(path: Option<PathBuf>) -> anyhow::Result<Option<TurnLog>> {
    path.map(|p| TurnLog::create(p)).transpose()
}

fn print_summary(summary: &MatchSummary, human_label: &str, bot_label: &str) {
    let winner = match summary.winner {
        Some(Side::Human) => human_label,
        Some(Side::Bot) => bot_label,
        None => "nobody",
    };
    println!(
        "Winner: {} after {} turns ({} vs {} shots)",
        winner, summary.turns, summary.human_shots, summary.bot_shots
    );
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            log_file,
            fleet_file,
            bot_delay_ms,
        } => {
            let mut rng = make_rng(seed);
            let mut turn_log = open_log(log_file)?;
            let mut human = CliPlayer::new();
            let mut bot = AiPlayer::new();
            let options = MatchOptions {
                bot_delay: Duration::from_millis(bot_delay_ms),
                fleet_file,
                ..MatchOptions::default()
            };
            let summary = play_match(&mut human, &mut bot, &mut rng, &options, turn_log.as_mut())?;
            print_summary(&summary, "you", "the bot");
        }
        Commands::Watch {
            seed,
            log_file,
            fleet_file,
        } => {
            println!("Starting bot vs bot game...");
            let mut rng = make_rng(seed);
            let mut turn_log = open_log(log_file)?;
            let mut first = AiPlayer::new();
            let mut second = AiPlayer::new();
            let options = MatchOptions {
                fleet_file,
                ..MatchOptions::default()
            };
            let summary = play_match(
                &mut first,
                &mut second,
                &mut rng,
                &options,
                turn_log.as_mut(),
            )?;
            print_summary(&summary, "bot 1", "bot 2");
        }
    }
    Ok(())
}
