use crate::types::Direction;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputPayload {
    PlayerStep { dir: Direction },
    SetSlowed { slowed: bool },
}

impl Default for InputJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl InputJournal {
    pub fn new() -> Self {
        Self { format_version: 1, build_id: "dev".to_string(), inputs: Vec::new() }
    }

    pub fn append_step(&mut self, dir: Direction) {
        self.push(InputPayload::PlayerStep { dir });
    }

    pub fn append_slowed(&mut self, slowed: bool) {
        self.push(InputPayload::SetSlowed { slowed });
    }

    fn push(&mut self, payload: InputPayload) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload });
    }
}
