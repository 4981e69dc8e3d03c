//! Taco Catch minigame.
//!
//! Tacos fall from the top of the field and the player steers a character
//! left and right by tilting the index finger above or below the wrist,
//! catching tacos in its mouth. Every fifth taco scores a point. There is no
//! way to lose: the run is endless.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
