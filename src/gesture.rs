//! Gesture classification: one hand's landmarks in, one control signal out.
//!
//! Every function here looks at the current frame only. There is no
//! smoothing or hysteresis; a pose counts the frame it is seen.

use crate::tracking::landmarks::{
    HandLandmarks, FINGER_TIP_BASE, INDEX_TIP, THUMB_MCP, THUMB_TIP,
};

/// Tip-to-knuckle distance below which a finger counts as curled.
pub const FIST_THRESHOLD: f64 = 0.15;

/// Index-tip vs wrist offset that steers the catch game.
pub const VERTICAL_STEER_THRESHOLD: f64 = 0.05;

/// Thumb tip vs thumb base offset that steers the shooter.
pub const THUMB_STEER_THRESHOLD: f64 = 0.01;

/// Discrete steering decision derived from a displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Left,
    Hold,
    Right,
}

impl Step {
    /// -1, 0 or 1.
    pub fn sign(self) -> i32 {
        match self {
            Step::Left => -1,
            Step::Hold => 0,
            Step::Right => 1,
        }
    }
}

/// True when all four non-thumb fingers are curled onto their knuckles.
pub fn is_fist_closed(hand: &HandLandmarks) -> bool {
    FINGER_TIP_BASE
        .iter()
        .all(|&(tip, base)| hand.get(tip).distance_2d(&hand.get(base)) < FIST_THRESHOLD)
}

/// `index_tip.y - wrist.y`. Positive when the index tip hangs below the wrist.
pub fn vertical_displacement(hand: &HandLandmarks) -> f64 {
    hand.get(INDEX_TIP).y - hand.wrist().y
}

/// `thumb_tip.x - thumb_base.x`. Positive when the thumb points right.
pub fn horizontal_thumb_displacement(hand: &HandLandmarks) -> f64 {
    hand.get(THUMB_TIP).x - hand.get(THUMB_MCP).x
}

/// Map a displacement to a step: strictly beyond `threshold` either way.
pub fn step_for(displacement: f64, threshold: f64) -> Step {
    if displacement > threshold {
        Step::Right
    } else if displacement < -threshold {
        Step::Left
    } else {
        Step::Hold
    }
}
