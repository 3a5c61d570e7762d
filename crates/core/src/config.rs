//! Scenario configuration loaded from TOML.
//!
//! A scenario describes the level layout, the player's starting food, the
//! initial slow condition and the enemies to spawn. Layout rows use `#` for
//! walls, `.` for floor, `X` for the exit and `P` for the player's start.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::{PLAYER_START_FOOD, PLAYER_STEP_COST};
use crate::error::GameError;
use crate::state::Map;
use crate::types::{ChaseKind, EnemyKind, Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub layout: Vec<String>,
    pub slowed: bool,
    pub player: PlayerConfig,
    pub enemies: Vec<EnemyConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub food: u32,
    pub step_cost: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { food: PLAYER_START_FOOD, step_cost: PLAYER_STEP_COST }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub kind: EnemyKind,
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chase: Option<ChaseKind>,
    /// Overrides the kind's default damage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let layout = [
            "##########",
            "#P.......#",
            "#..##....#",
            "#........#",
            "#....#...#",
            "#....#...#",
            "#........#",
            "#..#.....#",
            "#.......X#",
            "##########",
        ];
        Self {
            layout: layout.iter().map(|row| row.to_string()).collect(),
            slowed: false,
            player: PlayerConfig::default(),
            enemies: vec![
                EnemyConfig { kind: EnemyKind::Zombie, x: 7, y: 3, chase: None, damage: None },
                EnemyConfig {
                    kind: EnemyKind::Vampire,
                    x: 6,
                    y: 7,
                    chase: Some(ChaseKind::Pathfinding),
                    damage: None,
                },
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Builds the map and finds the player's start tile.
    pub fn parse_layout(&self) -> Result<(Map, Pos), GameError> {
        let height = self.layout.len();
        let width = self.layout.first().map(|row| row.chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GameError::InvalidScenario("layout is empty".to_string()));
        }

        let mut map = Map::new(width, height);
        let mut player_start = None;
        for (y, row) in self.layout.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GameError::InvalidScenario(format!(
                    "row {y} is {} tiles wide, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, glyph) in row.chars().enumerate() {
                let pos = Pos { y: y as i32, x: x as i32 };
                let tile = match glyph {
                    '#' => TileKind::Wall,
                    '.' => TileKind::Floor,
                    'X' => TileKind::Exit,
                    'P' => {
                        if player_start.replace(pos).is_some() {
                            return Err(GameError::InvalidScenario(
                                "layout has more than one player start".to_string(),
                            ));
                        }
                        TileKind::Floor
                    }
                    other => {
                        return Err(GameError::InvalidScenario(format!(
                            "unknown tile '{other}' at ({x}, {y})"
                        )));
                    }
                };
                map.set_tile(pos, tile);
            }
        }

        let player_start = player_start
            .ok_or_else(|| GameError::InvalidScenario("layout has no player start".to_string()))?;
        Ok((map, player_start))
    }
}
