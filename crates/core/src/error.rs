use std::io;

use thiserror::Error;

use crate::types::{EntityId, Pos};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("direction ({dx}, {dy}) is not a single-axis unit step")]
    InvalidDirection { dx: i32, dy: i32 },
    #[error("enemy {0:?} is already registered")]
    DuplicateRegistration(EntityId),
    #[error("tile {0:?} cannot hold a new enemy")]
    TileUnavailable(Pos),
    #[error("the run has already finished")]
    RunFinished,
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
    #[error("failed to read scenario file")]
    Io(#[from] io::Error),
    #[error("failed to parse scenario TOML")]
    Toml(#[from] toml::de::Error),
}
