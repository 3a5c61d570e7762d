//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from turn resolution.
//! It does not own replay execution or journal persistence.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.turn);
        let player = &self.state.player;
        hasher.write_i32(player.pos.x);
        hasher.write_i32(player.pos.y);
        hasher.write_u32(player.food);
        hasher.write_u8(u8::from(self.state.slowed_enemies));
        hasher.write_u8(match self.outcome {
            None => 0,
            Some(RunOutcome::Victory) => 1,
            Some(RunOutcome::Defeat) => 2,
        });
        for enemy in self.state.enemies.iter() {
            hasher.write_u8(match enemy.kind {
                EnemyKind::Zombie => 0,
                EnemyKind::Vampire => 1,
            });
            hasher.write_i32(enemy.pos.x);
            hasher.write_i32(enemy.pos.y);
            hasher.write_u32(enemy.player_damage);
            hasher.write_u8(u8::from(enemy.skip_move));
        }
        hasher.finish()
    }
}
