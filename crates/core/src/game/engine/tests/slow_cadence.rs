//! Tests for the slow condition and the one-shot skip flag.

use super::support::*;

fn outcomes_for(game: &mut Game, id: EntityId, rounds: usize) -> Vec<TurnOutcome> {
    (0..rounds)
        .map(|_| {
            let report = game.play_turn(Direction::Hold).expect("turn");
            report.enemies.turns.iter().find(|(turn_id, _)| *turn_id == id).expect("turn taken").1
        })
        .collect()
}

#[test]
fn slowed_enemy_acts_every_other_turn() {
    let mut game = open_room_game();
    let zombie = add_zombie(&mut game, Pos { y: 8, x: 8 }, 1);
    game.set_enemies_slowed(true);

    let outcomes = outcomes_for(&mut game, zombie, 4);

    assert!(matches!(outcomes[0], TurnOutcome::Moved { .. }));
    assert_eq!(outcomes[1], TurnOutcome::Skipped);
    assert!(matches!(outcomes[2], TurnOutcome::Moved { .. }));
    assert_eq!(outcomes[3], TurnOutcome::Skipped);
    assert_eq!(game.state().enemies.get(zombie).map(Enemy::pos), Some(Pos { y: 8, x: 6 }));
}

#[test]
fn move_under_slow_arms_skip_which_next_phase_consumes() {
    let mut game = open_room_game();
    let zombie = add_zombie(&mut game, Pos { y: 8, x: 8 }, 1);
    game.set_enemies_slowed(true);

    let first = game.enemy_phase();
    assert!(matches!(first.turns[0].1, TurnOutcome::Moved { .. }));
    assert!(game.state().enemies.get(zombie).expect("enemy").skip_pending());

    let second = game.enemy_phase();
    assert_eq!(second.turns[0].1, TurnOutcome::Skipped);
    assert!(!game.state().enemies.get(zombie).expect("enemy").skip_pending());
}

#[test]
fn lifting_slow_still_consumes_an_already_armed_skip() {
    let mut game = open_room_game();
    let zombie = add_zombie(&mut game, Pos { y: 8, x: 8 }, 1);
    game.set_enemies_slowed(true);
    game.enemy_phase();
    game.set_enemies_slowed(false);

    let outcomes = outcomes_for(&mut game, zombie, 3);

    assert_eq!(outcomes[0], TurnOutcome::Skipped);
    assert!(matches!(outcomes[1], TurnOutcome::Moved { .. }));
    assert!(matches!(outcomes[2], TurnOutcome::Moved { .. }));
}

#[test]
fn attack_under_slow_also_arms_skip() {
    let mut game = open_room_game();
    let zombie = add_zombie(&mut game, Pos { y: 2, x: 3 }, 2);
    game.set_enemies_slowed(true);

    let outcomes = outcomes_for(&mut game, zombie, 2);

    assert_eq!(outcomes, vec![TurnOutcome::Attacked { damage: 2 }, TurnOutcome::Skipped]);
    assert_eq!(game.state().player.food, 100 - 2 - 2);
}

#[test]
fn slow_toggle_is_logged_only_on_change() {
    let mut game = open_room_game();
    game.set_enemies_slowed(true);
    game.set_enemies_slowed(true);
    game.set_enemies_slowed(false);

    let toggles: Vec<_> = game
        .log()
        .iter()
        .filter(|event| matches!(event, LogEvent::SlowChanged { .. }))
        .cloned()
        .collect();
    assert_eq!(toggles, vec![
        LogEvent::SlowChanged { slowed: true },
        LogEvent::SlowChanged { slowed: false }
    ]);
    assert!(!game.enemies_slowed());
}
