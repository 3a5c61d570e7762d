use crate::types::{ChaseKind, EnemyKind};

pub const PLAYER_START_FOOD: u32 = 100;
pub const PLAYER_STEP_COST: u32 = 1;

pub struct EnemyStats {
    pub player_damage: u32,
    pub chase: ChaseKind,
}

pub fn get_enemy_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::Zombie => EnemyStats { player_damage: 10, chase: ChaseKind::Greedy },
        EnemyKind::Vampire => EnemyStats { player_damage: 20, chase: ChaseKind::Greedy },
    }
}
