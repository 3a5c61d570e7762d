//! Starting world construction for a new run.
//! This module exists to isolate initialization details from turn resolution.
//! It does not own round advancement once a run has started.

use super::*;
use crate::config::ScenarioConfig;
use crate::content::{PLAYER_STEP_COST, get_enemy_stats};

impl Game {
    pub fn new(map: Map, player: Player) -> Self {
        Self {
            turn: 0,
            state: GameState {
                map,
                player,
                enemies: EnemyRegistry::new(),
                slowed_enemies: false,
                step_cost: PLAYER_STEP_COST,
            },
            log: Vec::new(),
            feedback: Vec::new(),
            outcome: None,
        }
    }

    pub fn from_config(config: &ScenarioConfig) -> Result<Self, GameError> {
        let (map, player_start) = config.parse_layout()?;
        let mut game = Game::new(map, Player::new(player_start, config.player.food));
        game.state.step_cost = config.player.step_cost;
        game.state.slowed_enemies = config.slowed;

        for spawn in &config.enemies {
            let stats = get_enemy_stats(spawn.kind);
            let chase = spawn.chase.unwrap_or(stats.chase);
            let damage = spawn.damage.unwrap_or(stats.player_damage);
            let pos = Pos { y: spawn.y, x: spawn.x };
            game.spawn_enemy(spawn.kind, pos, strategy_for(chase), damage)?;
        }

        info!(
            "scenario ready: {} enemies, food {}, slowed {}",
            game.state.enemies.len(),
            game.state.player.food,
            game.state.slowed_enemies
        );
        Ok(game)
    }
}
