pub mod config;
pub mod content;
pub mod error;
pub mod game;
pub mod journal;
pub mod replay;
pub mod state;
pub mod types;

pub use config::{EnemyConfig, PlayerConfig, ScenarioConfig};
pub use error::GameError;
pub use game::Game;
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use replay::*;
pub use state::{Enemy, GameState, Map, Player};
pub use types::*;
