//! Pop the Lock minigame.
//!
//! A timing challenge: a red bar sweeps around a lock dial and the player
//! closes a fist while it overlaps the blue target marker. Each pop raises
//! the level and the bar speed; a fist off target ends the run.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
