use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::error::GameError;

new_key_type! {
    pub struct EntityId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, dir: Direction) -> Pos {
        Pos { y: self.y + dir.dy(), x: self.x + dir.dx() }
    }
}

/// A single axis-aligned unit step. Diagonals cannot be expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    East,
    South,
    West,
    Hold,
}

impl Direction {
    pub const CARDINALS: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn dx(self) -> i32 {
        match self {
            Direction::East => 1,
            Direction::West => -1,
            Direction::North | Direction::South | Direction::Hold => 0,
        }
    }

    pub fn dy(self) -> i32 {
        match self {
            Direction::North => -1,
            Direction::South => 1,
            Direction::East | Direction::West | Direction::Hold => 0,
        }
    }

    pub fn from_delta(dx: i32, dy: i32) -> Result<Direction, GameError> {
        match (dx, dy) {
            (0, 0) => Ok(Direction::Hold),
            (1, 0) => Ok(Direction::East),
            (-1, 0) => Ok(Direction::West),
            (0, 1) => Ok(Direction::South),
            (0, -1) => Ok(Direction::North),
            _ => Err(GameError::InvalidDirection { dx, dy }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Zombie,
    Vampire,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChaseKind {
    Greedy,
    Pathfinding,
}

/// Runtime-tagged reference to whatever stands on a tile an enemy tried to enter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occupant {
    Player,
    Enemy(EntityId),
}

/// Result of one call into the base move primitive. Exactly one variant per attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: Pos, to: Pos },
    /// Terrain or a non-hook occupant stopped the move; nothing else happens.
    Obstructed,
    BlockedBy(Occupant),
    TookOver(Occupant),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Skipped,
    Moved { from: Pos, to: Pos },
    Held,
    Attacked { damage: u32 },
    Absorbed { damage: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Attack,
    Absorption,
}

/// Fire-and-forget notification for presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackEvent {
    pub enemy: EntityId,
    pub contact: ContactKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    EnemyRegistered { enemy: EntityId, kind: EnemyKind, pos: Pos },
    EnemySkipped { enemy: EntityId },
    EnemyMoved { enemy: EntityId, from: Pos, to: Pos },
    EnemyHeld { enemy: EntityId },
    EnemyAttacked { enemy: EntityId, damage: u32 },
    EnemyAbsorbed { enemy: EntityId, damage: u32 },
    EnemyRemoved { enemy: EntityId },
    PlayerMoved { from: Pos, to: Pos },
    PlayerBlocked { at: Pos },
    SlowChanged { slowed: bool },
    RunFinished { outcome: RunOutcome },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseReport {
    pub turns: Vec<(EntityId, TurnOutcome)>,
    pub removed: Vec<EntityId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub turn: u64,
    pub player_moved: bool,
    pub enemies: PhaseReport,
    pub outcome: Option<RunOutcome>,
}
