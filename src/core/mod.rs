//! Frame pacing and the loop that drives a minigame.

pub mod constants;
pub mod game_loop;

pub use constants::*;
pub use game_loop::{FrameLoop, FrameStats, LoopControl, StepOutcome};
