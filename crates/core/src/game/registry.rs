//! Enemy registry owned by the coordinator.
//! Holds enemies in registration order, their tile occupancy, and the queue of
//! removals requested during the current enemy phase.

use log::warn;
use slotmap::SlotMap;

use super::*;

#[derive(Debug, Default)]
pub struct RemovalQueue {
    pending: Vec<EntityId>,
}

impl RemovalQueue {
    pub fn contains(&self, enemy: EntityId) -> bool {
        self.pending.contains(&enemy)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn drain(&mut self) -> Vec<EntityId> {
        mem::take(&mut self.pending)
    }
}

impl RemovalSink for RemovalQueue {
    fn request_removal(&mut self, enemy: EntityId) {
        if self.contains(enemy) {
            warn!("removal of {enemy:?} requested twice; ignoring");
            return;
        }
        self.pending.push(enemy);
    }
}

#[derive(Debug, Default)]
pub struct EnemyRegistry {
    pub(super) enemies: SlotMap<EntityId, Enemy>,
    pub(super) order: Vec<EntityId>,
    pub(super) occupancy: Occupancy,
    pub(super) removals: RemovalQueue,
}

impl EnemyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the enemy, assigns its id and registers it for turns.
    /// A failed registration leaves the registry as it was.
    pub(super) fn insert(&mut self, mut enemy: Enemy) -> Result<EntityId, GameError> {
        let pos = enemy.pos;
        let id = self.enemies.insert_with_key(|id| {
            enemy.id = id;
            enemy
        });
        if let Err(err) = self.register(id) {
            self.enemies.remove(id);
            return Err(err);
        }
        self.occupancy.insert(pos, id);
        Ok(id)
    }

    fn register(&mut self, id: EntityId) -> Result<(), GameError> {
        if self.order.contains(&id) {
            return Err(GameError::DuplicateRegistration(id));
        }
        self.order.push(id);
        Ok(())
    }

    pub fn get(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.enemies.contains_key(id)
    }

    /// Enemies in the order they take their turns.
    pub fn iter(&self) -> impl Iterator<Item = &Enemy> + '_ {
        self.order.iter().filter_map(|id| self.enemies.get(*id))
    }

    pub fn turn_order(&self) -> &[EntityId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn enemy_at(&self, pos: Pos) -> Option<EntityId> {
        self.occupancy.get(&pos).copied()
    }

    pub fn is_pending_removal(&self, id: EntityId) -> bool {
        self.removals.contains(id)
    }

    /// Applies queued removals. Only called between passes over `order`.
    pub(super) fn flush_removals(&mut self) -> Vec<EntityId> {
        let removed = self.removals.drain();
        for id in &removed {
            if let Some(enemy) = self.enemies.remove(*id) {
                self.occupancy.remove(&enemy.pos);
            }
            self.order.retain(|registered| registered != id);
        }
        removed
    }
}
