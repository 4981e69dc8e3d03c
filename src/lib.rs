//! Gesture Arcade - hand-gesture minigames for the terminal.
//!
//! This module exposes the games, the gesture classifier and the frame loop
//! for testing and external use.

pub mod cli;
pub mod core;
pub mod games;
pub mod geometry;
pub mod gesture;
pub mod tracking;
pub mod ui;
pub mod utils;
