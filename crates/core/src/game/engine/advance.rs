//! One full round: player phase, enemy phase, settle, end checks.

use super::*;

impl Game {
    pub fn play_turn(&mut self, dir: Direction) -> Result<RoundReport, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::RunFinished);
        }

        let player_moved = self.player_phase(dir);
        let enemies = self.enemy_phase();
        self.settle_player();
        self.turn += 1;

        let outcome = self.check_run_end();
        Ok(RoundReport { turn: self.turn, player_moved, enemies, outcome })
    }

    /// Pays the step cost and claims the destination tile if it is free.
    fn player_phase(&mut self, dir: Direction) -> bool {
        let step_cost = self.state.step_cost;
        let player = &mut self.state.player;
        player.lose_food(step_cost);
        if dir == Direction::Hold {
            return false;
        }

        let to = player.pos.step(dir);
        if !self.state.map.is_walkable(to) || self.state.enemies.enemy_at(to).is_some() {
            self.log.push(LogEvent::PlayerBlocked { at: to });
            return false;
        }
        player.claim = Some(to);
        true
    }

    fn settle_player(&mut self) {
        let player = &mut self.state.player;
        if let Some(to) = player.claim.take() {
            let from = player.pos;
            player.pos = to;
            self.log.push(LogEvent::PlayerMoved { from, to });
        }
    }

    fn check_run_end(&mut self) -> Option<RunOutcome> {
        let outcome = if self.state.player.food == 0 {
            Some(RunOutcome::Defeat)
        } else if self.state.map.tile_at(self.state.player.pos) == TileKind::Exit {
            Some(RunOutcome::Victory)
        } else {
            None
        };
        if let Some(outcome) = outcome {
            info!("run finished on turn {}: {outcome:?}", self.turn);
            self.log.push(LogEvent::RunFinished { outcome });
            self.outcome = Some(outcome);
        }
        outcome
    }
}
