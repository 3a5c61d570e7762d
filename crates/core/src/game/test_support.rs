//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating map and enemy setup across many tests.
//! It does not own production gameplay logic.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::*;

pub(crate) fn open_room_fixture() -> (Map, Pos) {
    let map = Map::new(10, 10);
    let origin = Pos { y: 5, x: 5 };
    (map, origin)
}

/// A wall segment sits directly east of `start`, between it and `target`.
pub(crate) fn wall_detour_fixture() -> (Map, Pos, Pos) {
    let mut map = Map::new(10, 10);
    for y in 2..=7 {
        map.set_tile(Pos { y, x: 5 }, TileKind::Wall);
    }
    (map, Pos { y: 4, x: 4 }, Pos { y: 4, x: 7 })
}

/// Game on an open 10x10 room with the player at (2, 2) and plenty of food.
pub(crate) fn open_room_game() -> Game {
    let (map, _) = open_room_fixture();
    Game::new(map, Player::new(Pos { y: 2, x: 2 }, 100))
}

pub(crate) fn add_zombie(game: &mut Game, pos: Pos, damage: u32) -> EntityId {
    game.spawn_enemy(EnemyKind::Zombie, pos, Box::new(GreedyChase), damage)
        .expect("spawn zombie")
}

pub(crate) fn add_scripted(game: &mut Game, pos: Pos, dirs: &[Direction]) -> EntityId {
    game.spawn_enemy(EnemyKind::Zombie, pos, Box::new(ScriptedStrategy::new(dirs)), 1)
        .expect("spawn scripted enemy")
}

pub(crate) fn detached_enemy(damage: u32) -> Enemy {
    detached_enemy_at(damage, Pos { y: 5, x: 5 })
}

pub(crate) fn detached_enemy_at(damage: u32, pos: Pos) -> Enemy {
    Enemy::new(EnemyKind::Zombie, pos, damage, Box::new(GreedyChase))
}

pub(crate) fn detached_enemy_with(damage: u32, strategy: Box<dyn DirectionStrategy>) -> Enemy {
    Enemy::new(EnemyKind::Zombie, Pos { y: 5, x: 5 }, damage, strategy)
}

/// Move primitive that replays canned outcomes and counts how often it was asked.
pub(crate) struct ScriptedMover {
    outcomes: VecDeque<MoveOutcome>,
    pub(crate) calls: usize,
}

impl ScriptedMover {
    pub(crate) fn new(outcomes: impl IntoIterator<Item = MoveOutcome>) -> Self {
        Self { outcomes: outcomes.into_iter().collect(), calls: 0 }
    }
}

impl MovePrimitive for ScriptedMover {
    fn attempt_move(&mut self, _mover: EntityId, pos: &mut Pos, _dir: Direction) -> MoveOutcome {
        self.calls += 1;
        let outcome = self.outcomes.pop_front().expect("scripted mover ran out of outcomes");
        if let MoveOutcome::Moved { to, .. } = outcome {
            *pos = to;
        }
        outcome
    }
}

pub(crate) type StrategyCalls = Rc<Cell<u32>>;

#[derive(Debug)]
pub(crate) struct CountingStrategy {
    calls: StrategyCalls,
}

impl CountingStrategy {
    pub(crate) fn new(calls: &StrategyCalls) -> Self {
        Self { calls: Rc::clone(calls) }
    }
}

impl DirectionStrategy for CountingStrategy {
    fn choose(&mut self, _view: &StrategyView<'_>) -> Direction {
        self.calls.set(self.calls.get() + 1);
        Direction::West
    }
}

/// Walks a fixed list of directions, then holds.
#[derive(Debug)]
pub(crate) struct ScriptedStrategy {
    dirs: VecDeque<Direction>,
}

impl ScriptedStrategy {
    pub(crate) fn new(dirs: &[Direction]) -> Self {
        Self { dirs: dirs.iter().copied().collect() }
    }
}

impl DirectionStrategy for ScriptedStrategy {
    fn choose(&mut self, _view: &StrategyView<'_>) -> Direction {
        self.dirs.pop_front().unwrap_or(Direction::Hold)
    }
}
