//! Contact resolution between an enemy and the player.
//! Both hooks charge the enemy's damage to the player and raise one feedback
//! event; absorption additionally asks the coordinator to remove the enemy.
//! Hooks only accept `Occupant::Player`; anything else is a caller bug and panics.

use super::*;

/// Receives the food (or other resource) an attack costs the player.
pub trait ResourceSink {
    /// Must saturate instead of underflowing.
    fn lose_resource(&mut self, amount: u32);
}

pub trait RemovalSink {
    fn request_removal(&mut self, enemy: EntityId);
}

pub trait FeedbackSink {
    fn on_attack_resolved(&mut self, event: FeedbackEvent);
}

impl ResourceSink for Player {
    fn lose_resource(&mut self, amount: u32) {
        self.lose_food(amount);
    }
}

impl FeedbackSink for Vec<FeedbackEvent> {
    fn on_attack_resolved(&mut self, event: FeedbackEvent) {
        self.push(event);
    }
}

impl Enemy {
    /// The enemy tried to step onto the player's tile. It stays where it is.
    pub(super) fn on_cant_move(
        &self,
        occupant: Occupant,
        player: &mut dyn ResourceSink,
        feedback: &mut dyn FeedbackSink,
    ) -> TurnOutcome {
        self.expect_player(occupant, "blocked");
        player.lose_resource(self.player_damage);
        feedback.on_attack_resolved(FeedbackEvent { enemy: self.id, contact: ContactKind::Attack });
        TurnOutcome::Attacked { damage: self.player_damage }
    }

    /// The player is taking over the tile this enemy was moving into.
    pub(super) fn on_take_over(
        &self,
        occupant: Occupant,
        removals: &mut dyn RemovalSink,
        player: &mut dyn ResourceSink,
        feedback: &mut dyn FeedbackSink,
    ) -> TurnOutcome {
        self.expect_player(occupant, "take-over");
        removals.request_removal(self.id);
        player.lose_resource(self.player_damage);
        feedback
            .on_attack_resolved(FeedbackEvent { enemy: self.id, contact: ContactKind::Absorption });
        TurnOutcome::Absorbed { damage: self.player_damage }
    }

    fn expect_player(&self, occupant: Occupant, hook: &str) {
        if let Occupant::Enemy(other) = occupant {
            panic!(
                "{hook} hook of enemy {:?} received enemy {other:?}; only the player may be passed",
                self.id
            );
        }
    }
}
