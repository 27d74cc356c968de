use broadside::{
    session::{play_match, MatchOptions},
    AiPlayer,
};
use rand::{rngs::SmallRng, SeedableRng};

/// Headless bot-vs-bot match. Prints the summary as one JSON object.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args.first().map_or("sim", String::as_str));
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let summary = play_match(&mut p1, &mut p2, &mut rng, &MatchOptions::default(), None)?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
