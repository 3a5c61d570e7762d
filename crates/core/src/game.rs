//! Turn coordinator for a single run.
//!
//! `Game` owns the grid, the player, the enemy registry and the global slow
//! flag. Each round runs a player phase, then an enemy phase that walks the
//! registry in registration order, then settles the player's move. Removal
//! requests raised during the enemy phase are applied only after the pass.

use std::mem;

use log::{debug, info};

use crate::error::GameError;
use crate::state::{Enemy, GameState, Map, Player};
use crate::types::*;

mod bootstrap;
mod contact;
mod enemy;
mod engine;
mod hash;
mod movement;
mod pathfinding;
mod registry;
mod strategy;

#[cfg(test)]
mod test_support;

pub use contact::{FeedbackSink, RemovalSink, ResourceSink};
pub use enemy::TurnContext;
pub use movement::{GridMover, MovePrimitive, Occupancy};
pub use registry::{EnemyRegistry, RemovalQueue};
pub use strategy::{DirectionStrategy, GreedyChase, PathChase, StrategyView, strategy_for};

pub struct Game {
    turn: u64,
    state: GameState,
    log: Vec<LogEvent>,
    feedback: Vec<FeedbackEvent>,
    outcome: Option<RunOutcome>,
}

impl Game {
    /// Creates and registers an enemy. Registration happens exactly once, here.
    pub fn spawn_enemy(
        &mut self,
        kind: EnemyKind,
        pos: Pos,
        strategy: Box<dyn DirectionStrategy>,
        player_damage: u32,
    ) -> Result<EntityId, GameError> {
        if !self.state.map.is_walkable(pos)
            || pos == self.state.player.pos
            || self.state.enemies.enemy_at(pos).is_some()
        {
            return Err(GameError::TileUnavailable(pos));
        }
        let enemy = Enemy::new(kind, pos, player_damage, strategy);
        let id = self.state.enemies.insert(enemy)?;
        debug!("registered {kind:?} {id:?} at {pos:?}");
        self.log.push(LogEvent::EnemyRegistered { enemy: id, kind, pos });
        Ok(id)
    }

    pub fn set_enemies_slowed(&mut self, slowed: bool) {
        if self.state.slowed_enemies == slowed {
            return;
        }
        info!("enemies slowed: {slowed}");
        self.state.slowed_enemies = slowed;
        self.log.push(LogEvent::SlowChanged { slowed });
    }

    pub fn enemies_slowed(&self) -> bool {
        self.state.slowed_enemies
    }

    pub fn current_turn(&self) -> u64 {
        self.turn
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Hands pending attack notifications to the presentation layer.
    pub fn drain_feedback(&mut self) -> Vec<FeedbackEvent> {
        mem::take(&mut self.feedback)
    }
}
