use log::debug;
use thiserror::Error;

use crate::{
    RunOutcome,
    config::ScenarioConfig,
    error::GameError,
    game::Game,
    journal::{InputJournal, InputPayload},
};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("scenario could not be built")]
    Scenario(#[source] GameError),
    #[error("input {seq} arrived after the run finished")]
    InputAfterFinish { seq: u64 },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_outcome: Option<RunOutcome>,
    pub final_snapshot_hash: u64,
    pub final_turn: u64,
}

pub fn replay_to_end(
    config: &ScenarioConfig,
    journal: &InputJournal,
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::from_config(config).map_err(ReplayError::Scenario)?;

    for record in &journal.inputs {
        match &record.payload {
            InputPayload::PlayerStep { dir } => {
                if game.play_turn(*dir).is_err() {
                    return Err(ReplayError::InputAfterFinish { seq: record.seq });
                }
            }
            InputPayload::SetSlowed { slowed } => {
                if game.outcome().is_some() {
                    return Err(ReplayError::InputAfterFinish { seq: record.seq });
                }
                game.set_enemies_slowed(*slowed);
            }
        }
    }

    debug!("replayed {} inputs to turn {}", journal.inputs.len(), game.current_turn());
    Ok(ReplayResult {
        final_outcome: game.outcome(),
        final_snapshot_hash: game.snapshot_hash(),
        final_turn: game.current_turn(),
    })
}
