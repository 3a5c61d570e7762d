//! Per-enemy turn resolution.
//!
//! One turn is: skip gate, direction choice, a single call into the move
//! primitive, contact resolution, then the slow re-check. The slow flag is read
//! after the move so a slowed enemy still acts every other turn.

use log::trace;

use super::*;

/// Collaborators handed to an enemy for the duration of one turn.
pub struct TurnContext<'a> {
    pub mover: &'a mut dyn MovePrimitive,
    pub map: &'a Map,
    pub player: &'a mut dyn ResourceSink,
    pub removals: &'a mut dyn RemovalSink,
    pub feedback: &'a mut dyn FeedbackSink,
    /// Position the enemy chases this turn, normally the player's.
    pub target: Pos,
    pub slowed: bool,
}

impl Enemy {
    pub fn take_turn(&mut self, ctx: &mut TurnContext<'_>) -> TurnOutcome {
        if self.skip_move {
            self.skip_move = false;
            return TurnOutcome::Skipped;
        }

        self.target = Some(ctx.target);
        let view = StrategyView { map: ctx.map, from: self.pos, target: ctx.target };
        let dir = self.strategy.choose(&view);

        let outcome = match ctx.mover.attempt_move(self.id, &mut self.pos, dir) {
            MoveOutcome::Moved { from, to } => TurnOutcome::Moved { from, to },
            MoveOutcome::Obstructed => TurnOutcome::Held,
            MoveOutcome::BlockedBy(occupant) => {
                self.on_cant_move(occupant, ctx.player, ctx.feedback)
            }
            MoveOutcome::TookOver(occupant) => {
                self.on_take_over(occupant, ctx.removals, ctx.player, ctx.feedback)
            }
        };

        // Armed even when the enemy was just absorbed; a removed enemy never reads it.
        if ctx.slowed {
            self.skip_move = true;
        }
        trace!("enemy {:?} chose {dir:?}: {outcome:?}", self.id);
        outcome
    }
}
