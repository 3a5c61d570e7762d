//! The enemy phase: every registered enemy gets one turn, in registration order.

use super::*;

impl Game {
    /// Does nothing once the run has finished.
    pub fn enemy_phase(&mut self) -> PhaseReport {
        let mut report = PhaseReport::default();
        if self.outcome.is_some() {
            return report;
        }
        let slowed = self.state.slowed_enemies;
        let player_pos = self.state.player.pos;
        let player_claim = self.state.player.claim;
        // Removals are queued during the pass, so the order is stable while we walk it.
        let order = self.state.enemies.order.clone();

        for id in order {
            let registry = &mut self.state.enemies;
            if registry.removals.contains(id) {
                continue;
            }
            let Some(enemy) = registry.enemies.get_mut(id) else {
                continue;
            };

            let mut mover =
                GridMover::new(&self.state.map, &mut registry.occupancy, player_pos, player_claim);
            let mut ctx = TurnContext {
                mover: &mut mover,
                map: &self.state.map,
                player: &mut self.state.player,
                removals: &mut registry.removals,
                feedback: &mut self.feedback,
                target: player_pos,
                slowed,
            };
            let outcome = enemy.take_turn(&mut ctx);

            self.log.push(match outcome {
                TurnOutcome::Skipped => LogEvent::EnemySkipped { enemy: id },
                TurnOutcome::Moved { from, to } => LogEvent::EnemyMoved { enemy: id, from, to },
                TurnOutcome::Held => LogEvent::EnemyHeld { enemy: id },
                TurnOutcome::Attacked { damage } => LogEvent::EnemyAttacked { enemy: id, damage },
                TurnOutcome::Absorbed { damage } => LogEvent::EnemyAbsorbed { enemy: id, damage },
            });
            report.turns.push((id, outcome));
        }

        report.removed = self.state.enemies.flush_removals();
        for enemy in &report.removed {
            debug!("removed enemy {enemy:?}");
            self.log.push(LogEvent::EnemyRemoved { enemy: *enemy });
        }
        report
    }
}
