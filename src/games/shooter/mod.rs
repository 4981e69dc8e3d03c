//! Asteroid Therapy minigame.
//!
//! A vertical shooter. The ship auto-fires and is steered by pointing the
//! thumb left or right of its base joint. Asteroids take several hits; ones
//! that reach the ship cost health, and the run ends when health runs out.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
