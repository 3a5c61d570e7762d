//! Round advancement for the coordinator.
//! This file wires the player-phase and enemy-phase submodules together.

use super::*;

mod advance;
mod phase;
