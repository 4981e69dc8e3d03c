//! Game logic for Pop the Lock: bar rotation, grace period, fist resolution.

use super::types::*;
use crate::games::Phase;
use crate::geometry::{in_target_range, FieldPoint};
use crate::gesture::is_fist_closed;
use crate::tracking::HandLandmarks;
use rand::RngCore;
use std::f64::consts::TAU;

/// Begin a run from the start screen.
pub fn start(game: &mut LockGame) {
    if game.phase == Phase::NotStarted {
        game.phase = Phase::Running;
        log::info!("Lock: run started");
    }
}

/// Restore every run-scoped field. The high score is kept.
pub fn reset(game: &mut LockGame, rng: &mut dyn RngCore) {
    let high_score = game.high_score;
    *game = LockGame::new(rng);
    game.high_score = high_score;
}

/// Advance one frame. `dt_secs` is the wall time of the previous frame and
/// only drains the grace timer. Returns the outcome if a fist was resolved.
pub fn tick(
    game: &mut LockGame,
    hands: &[HandLandmarks],
    dt_secs: f64,
    rng: &mut dyn RngCore,
) -> Option<LockOutcome> {
    if game.phase != Phase::Running {
        return None;
    }

    advance_bar(game);

    if game.in_grace_period() {
        game.grace_timer -= dt_secs;
        return None;
    }

    // The first hand showing a fist decides the frame.
    if !hands.iter().any(is_fist_closed) {
        return None;
    }

    let outcome = if in_target_range(game.bar_angle, game.target_angle, game.target_range) {
        pop(game, rng);
        LockOutcome::Popped
    } else {
        miss(game);
        LockOutcome::Missed
    };
    game.last_outcome = Some(outcome);
    Some(outcome)
}

fn advance_bar(game: &mut LockGame) {
    game.bar_angle += game.bar_speed;
    if game.bar_angle > TAU {
        game.bar_angle -= TAU;
    }
}

fn pop(game: &mut LockGame, rng: &mut dyn RngCore) {
    game.score += 1;
    game.level += 1;
    game.target_angle = random_target(rng);
    game.bar_speed += BAR_SPEED_INCREMENT;
    game.grace_timer = GRACE_PERIOD_SECS;
    log::debug!(
        "Lock: popped at {:.2} rad, level {} speed {:.3}",
        game.bar_angle,
        game.level,
        game.bar_speed
    );
}

fn miss(game: &mut LockGame) {
    game.phase = Phase::Over;
    if game.score > game.high_score {
        game.high_score = game.score;
    }
    log::info!(
        "Lock: missed at {:.2} rad (target {:.2}), final score {}",
        game.bar_angle,
        game.target_angle,
        game.score
    );
}

/// Mouse click in field coordinates. Buttons only exist on the start and
/// game-over screens. Returns true if the click changed the phase.
pub fn handle_click(game: &mut LockGame, at: FieldPoint, rng: &mut dyn RngCore) -> bool {
    match game.phase {
        Phase::NotStarted if START_BUTTON.contains_inclusive(at) => {
            start(game);
            true
        }
        Phase::Over if RESTART_BUTTON.contains_inclusive(at) => {
            restart(game, rng);
            true
        }
        _ => false,
    }
}

/// Keyboard equivalent of pressing whichever button is on screen.
pub fn activate_button(game: &mut LockGame, rng: &mut dyn RngCore) -> bool {
    match game.phase {
        Phase::NotStarted => {
            start(game);
            true
        }
        Phase::Over => {
            restart(game, rng);
            true
        }
        Phase::Running => false,
    }
}

fn restart(game: &mut LockGame, rng: &mut dyn RngCore) {
    reset(game, rng);
    start(game);
}
