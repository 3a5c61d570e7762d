use crate::game::{DirectionStrategy, EnemyRegistry};
use crate::types::*;

#[derive(Clone, Debug)]
pub struct Map {
    pub internal_width: usize,
    pub internal_height: usize,
    pub tiles: Vec<TileKind>,
}

impl Map {
    pub fn new(width: usize, height: usize) -> Self {
        let mut tiles = vec![TileKind::Floor; width * height];
        for x in 0..width {
            tiles[x] = TileKind::Wall;
            tiles[(height - 1) * width + x] = TileKind::Wall;
        }
        for y in 0..height {
            tiles[y * width] = TileKind::Wall;
            tiles[y * width + (width - 1)] = TileKind::Wall;
        }
        Self { internal_width: width, internal_height: height, tiles }
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.internal_width
            && (pos.y as usize) < self.internal_height
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        matches!(self.tile_at(pos), TileKind::Floor | TileKind::Exit)
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.internal_width + (pos.x as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
    pub food: u32,
    /// Destination the player is moving into while enemies take their turns.
    pub claim: Option<Pos>,
}

impl Player {
    pub fn new(pos: Pos, food: u32) -> Self {
        Self { pos, food, claim: None }
    }

    /// Saturates at zero.
    pub fn lose_food(&mut self, amount: u32) {
        self.food = self.food.saturating_sub(amount);
    }
}

#[derive(Debug)]
pub struct Enemy {
    pub(crate) id: EntityId,
    pub(crate) kind: EnemyKind,
    pub(crate) pos: Pos,
    pub(crate) player_damage: u32,
    pub(crate) skip_move: bool,
    pub(crate) target: Option<Pos>,
    pub(crate) strategy: Box<dyn DirectionStrategy>,
}

impl Enemy {
    pub fn new(
        kind: EnemyKind,
        pos: Pos,
        player_damage: u32,
        strategy: Box<dyn DirectionStrategy>,
    ) -> Self {
        Self {
            id: EntityId::default(), // Assigned on registration
            kind,
            pos,
            player_damage,
            skip_move: false,
            target: None,
            strategy,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn player_damage(&self) -> u32 {
        self.player_damage
    }

    pub fn skip_pending(&self) -> bool {
        self.skip_move
    }

    pub fn target(&self) -> Option<Pos> {
        self.target
    }
}

pub struct GameState {
    pub map: Map,
    pub player: Player,
    pub enemies: EnemyRegistry,
    pub slowed_enemies: bool,
    pub step_cost: u32,
}
