mod common;

use broadside::{BoardError, Cell, CellState, GameEngine, GameStatus, ShipId, ShotOutcome, Side};
use common::{destroyer_fleet, standard_fleet};

fn engine() -> GameEngine {
    // Human defends the standard layout, the bot the destroyer layout.
    GameEngine::new(standard_fleet(), destroyer_fleet())
}

#[test]
fn test_human_shoots_first() {
    let engine = engine();
    assert_eq!(engine.current_side(), Side::Human);
    assert_eq!(engine.turn_number(), 1);
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_miss_passes_turn() {
    let mut engine = engine();
    let record = engine.fire(Cell::new(0, 5)).unwrap();
    assert_eq!(record.shooter, Side::Human);
    assert_eq!(record.outcome, ShotOutcome::Miss);
    assert_eq!(record.turn, 1);
    assert_eq!(engine.current_side(), Side::Bot);
    assert_eq!(engine.turn_number(), 2);
    assert_eq!(
        engine.waters(Side::Bot).shots().get(Cell::new(0, 5)).unwrap(),
        CellState::Miss
    );
}

#[test]
fn test_hit_grants_bonus_shot() {
    let mut engine = engine();
    let record = engine.fire(Cell::new(2, 3)).unwrap();
    assert_eq!(record.outcome, ShotOutcome::Hit);
    assert_eq!(engine.current_side(), Side::Human);
    assert_eq!(engine.turn_number(), 1);

    let record = engine.fire(Cell::new(2, 4)).unwrap();
    assert_eq!(record.outcome, ShotOutcome::Sunk(ShipId(3)));
    assert_eq!(record.turn, 1);
    assert_eq!(engine.current_side(), Side::Human);
    assert_eq!(engine.shots_fired(Side::Human), 2);
}

#[test]
fn test_refused_shot_keeps_turn() {
    let mut engine = engine();
    engine.fire(Cell::new(0, 5)).unwrap();
    // Bot misses on the human's waters.
    engine.fire(Cell::new(9, 9)).unwrap();
    assert_eq!(engine.current_side(), Side::Human);
    let turn = engine.turn_number();

    assert_eq!(
        engine.fire(Cell::new(0, 5)).unwrap_err(),
        BoardError::AlreadyTried(Cell::new(0, 5))
    );
    assert_eq!(
        engine.fire(Cell::new(0, 10)).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 10 }
    );
    assert_eq!(engine.current_side(), Side::Human);
    assert_eq!(engine.turn_number(), turn);
    assert_eq!(engine.shots_fired(Side::Human), 1);
}

#[test]
fn test_sinking_everything_wins() {
    let mut engine = engine();
    let targets: Vec<Cell> = destroyer_fleet().occupancy().iter().collect();
    for (i, &cell) in targets.iter().enumerate() {
        assert_eq!(engine.status(), GameStatus::InProgress);
        let record = engine.fire(cell).unwrap();
        assert!(record.outcome.grants_bonus_shot());
        assert_eq!(engine.waters(Side::Bot).ships_afloat() == 0, i + 1 == targets.len());
    }
    assert_eq!(engine.status(), GameStatus::Won(Side::Human));
    assert!(engine.waters(Side::Bot).all_sunk());
    assert!(!engine.waters(Side::Human).all_sunk());
    assert_eq!(engine.turn_number(), 1);
    assert_eq!(engine.fire(Cell::new(5, 9)).unwrap_err(), BoardError::GameOver);
}

#[test]
fn test_side_helpers() {
    assert_eq!(Side::Human.opponent(), Side::Bot);
    assert_eq!(Side::Bot.opponent(), Side::Human);
    assert_eq!(Side::Bot.to_string(), "bot");
}
