//! Pop the Lock data structures.
//!
//! A bar sweeps around a lock dial. Closing a fist while the bar is over the
//! target marker pops the lock and speeds the bar up; a fist anywhere else
//! ends the run.

use crate::games::Phase;
use crate::geometry::FieldRect;
use rand::{Rng, RngCore};
use std::f64::consts::TAU;

/// Field dimensions in pixels.
pub const FIELD_WIDTH: f64 = 600.0;
pub const FIELD_HEIGHT: f64 = 600.0;
pub const FRAME_RATE: u32 = 30;

pub const LOCK_RADIUS: f64 = 100.0;
pub const BAR_WIDTH: f64 = 30.0;
pub const SHACKLE_WIDTH: f64 = 80.0;
pub const SHACKLE_HEIGHT: f64 = 30.0;

/// Bar speed at the start of a run, radians per tick.
pub const INITIAL_BAR_SPEED: f64 = 0.05;
/// Added to the bar speed after every pop.
pub const BAR_SPEED_INCREMENT: f64 = 0.005;
/// Half-width of the target window, radians.
pub const TARGET_RANGE: f64 = 0.3;
/// Seconds after a pop during which fists are ignored.
pub const GRACE_PERIOD_SECS: f64 = 1.0;

pub const BUTTON_WIDTH: f64 = 200.0;
pub const BUTTON_HEIGHT: f64 = 80.0;

/// Start button, centred on the dial.
pub const START_BUTTON: FieldRect = FieldRect::new(
    FIELD_WIDTH / 2.0 - BUTTON_WIDTH / 2.0,
    FIELD_HEIGHT / 2.0 - BUTTON_HEIGHT / 2.0,
    BUTTON_WIDTH,
    BUTTON_HEIGHT,
);

/// Restart button, just under the "Game Over!" text.
pub const RESTART_BUTTON: FieldRect = FieldRect::new(
    FIELD_WIDTH / 2.0 - BUTTON_WIDTH / 2.0,
    FIELD_HEIGHT / 2.0 + 40.0,
    BUTTON_WIDTH,
    BUTTON_HEIGHT,
);

/// What a resolved fist did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    Popped,
    Missed,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct LockGame {
    pub phase: Phase,
    /// Current bar angle in `[0, 2π]`.
    pub bar_angle: f64,
    /// Radians added to `bar_angle` each tick.
    pub bar_speed: f64,
    /// Centre of the target window.
    pub target_angle: f64,
    pub target_range: f64,
    pub level: u32,
    pub score: u32,
    /// Best score this process has seen. Survives resets.
    pub high_score: u32,
    /// Seconds left before fists are evaluated again.
    pub grace_timer: f64,
    /// Result of the most recent fist, for the status bar.
    pub last_outcome: Option<LockOutcome>,
}

impl LockGame {
    pub fn new(rng: &mut dyn RngCore) -> Self {
        Self {
            phase: Phase::NotStarted,
            bar_angle: 0.0,
            bar_speed: INITIAL_BAR_SPEED,
            target_angle: random_target(rng),
            target_range: TARGET_RANGE,
            level: 1,
            score: 0,
            high_score: 0,
            grace_timer: 0.0,
            last_outcome: None,
        }
    }

    pub fn in_grace_period(&self) -> bool {
        self.grace_timer > 0.0
    }
}

/// Uniform angle in `[0, 2π)`.
pub fn random_target(rng: &mut dyn RngCore) -> f64 {
    rng.gen_range(0.0..TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let game = LockGame::new(&mut rng);
        assert_eq!(game.phase, Phase::NotStarted);
        assert_eq!(game.bar_angle, 0.0);
        assert!((game.bar_speed - 0.05).abs() < f64::EPSILON);
        assert_eq!(game.level, 1);
        assert_eq!(game.score, 0);
        assert!(!game.in_grace_period());
        assert!((0.0..TAU).contains(&game.target_angle));
    }

    #[test]
    fn test_buttons_match_layout() {
        assert_eq!(START_BUTTON.x, 200.0);
        assert_eq!(START_BUTTON.y, 260.0);
        assert_eq!(RESTART_BUTTON.y, 340.0);
        assert_eq!(RESTART_BUTTON.bottom(), 420.0);
    }
}
