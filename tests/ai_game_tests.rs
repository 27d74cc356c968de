use broadside::{BotTargeting, Fleet, GameEngine, GameStatus, Side};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_bot_vs_bot_game() {
    for seed in 0..40 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new(
            Fleet::random(&mut rng).unwrap(),
            Fleet::random(&mut rng).unwrap(),
        );
        let mut first = BotTargeting::new();
        let mut second = BotTargeting::new();

        let mut shots = 0;
        while engine.status() == GameStatus::InProgress {
            let side = engine.current_side();
            let bot = match side {
                Side::Human => &mut first,
                Side::Bot => &mut second,
            };
            let target_shots = engine.waters(side.opponent()).shots();
            let cell = bot.next_target(target_shots, &mut rng).unwrap();
            let record = engine.fire(cell).unwrap();
            bot.on_outcome(cell, record.outcome);
            shots += 1;
            assert!(shots <= 200, "game took too many shots");
        }

        let GameStatus::Won(winner) = engine.status() else {
            unreachable!()
        };
        assert!(engine.waters(winner.opponent()).all_sunk());
        assert!(!engine.waters(winner).all_sunk());
        assert!(engine.shots_fired(Side::Human) <= 100);
        assert!(engine.shots_fired(Side::Bot) <= 100);
    }
}
