//! Keyboard-driven stand-in for a camera tracker.
//!
//! Synthesises a single hand held sideways in front of the camera. Terminals
//! only report key presses, so each press holds its pose for a few frames;
//! key repeat keeps it held.
//!
//! | Key          | Pose                                              |
//! |--------------|---------------------------------------------------|
//! | Space        | closed fist                                       |
//! | Left / `a`   | thumb tip left of thumb base, index tip above wrist |
//! | Right / `d`  | thumb tip right of thumb base, index tip below wrist |
//! | `h`          | toggle hand visibility                            |

use super::landmarks::*;
use super::provider::{FrameError, LandmarkProvider, TrackingFrame};
use crossterm::event::{KeyCode, KeyEvent};

/// Frames a fist press stays closed.
pub const FIST_HOLD_FRAMES: u32 = 4;
/// Frames a steering press stays tilted.
pub const STEER_HOLD_FRAMES: u32 = 3;

/// How far the steering keys push the control landmarks.
const STEER_OFFSET: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Steer {
    Left,
    Right,
}

/// A synthetic hand controlled from the keyboard.
#[derive(Debug, Clone)]
pub struct KeyboardHand {
    visible: bool,
    fist_frames: u32,
    steer: Option<Steer>,
    steer_frames: u32,
}

impl Default for KeyboardHand {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardHand {
    pub fn new() -> Self {
        Self {
            visible: true,
            fist_frames: 0,
            steer: None,
            steer_frames: 0,
        }
    }

    /// The neutral pose: fingers extended, index tip level with the wrist and
    /// thumb tip directly above its base, so no control signal fires.
    pub fn rest_pose() -> HandLandmarks {
        let mut hand = HandLandmarks::uniform(Landmark::new(0.5, 0.7));

        hand.set(THUMB_CMC, Landmark::new(0.46, 0.64));
        hand.set(THUMB_MCP, Landmark::new(0.42, 0.58));
        hand.set(THUMB_IP, Landmark::new(0.42, 0.53));
        hand.set(THUMB_TIP, Landmark::new(0.42, 0.48));

        let fingers = [
            (INDEX_MCP, 0.55, 0.62, 0.70),
            (MIDDLE_MCP, 0.56, 0.66, 0.74),
            (RING_MCP, 0.56, 0.70, 0.78),
            (PINKY_MCP, 0.55, 0.74, 0.82),
        ];
        for (mcp, x, y, tip_y) in fingers {
            let tip_x = x + 0.2;
            for joint in 0..4 {
                let t = joint as f64 / 3.0;
                hand.set(
                    mcp + joint,
                    Landmark::new(x + (tip_x - x) * t, y + (tip_y - y) * t),
                );
            }
        }
        hand
    }

    /// The pose for the current frame, or `None` while hidden.
    pub fn current_pose(&self) -> Option<HandLandmarks> {
        if !self.visible {
            return None;
        }

        let mut hand = Self::rest_pose();

        if self.fist_frames > 0 {
            for (tip, base) in FINGER_TIP_BASE {
                let knuckle = hand.get(base);
                hand.set(tip, Landmark::new(knuckle.x + 0.05, knuckle.y + 0.05));
                hand.set(tip - 1, Landmark::new(knuckle.x + 0.06, knuckle.y + 0.02));
                hand.set(tip - 2, Landmark::new(knuckle.x + 0.04, knuckle.y - 0.01));
            }
        }

        if let Some(steer) = self.steer {
            let sign = match steer {
                Steer::Left => -1.0,
                Steer::Right => 1.0,
            };
            let thumb_base = hand.get(THUMB_MCP);
            let thumb_tip = hand.get(THUMB_TIP);
            hand.set(
                THUMB_TIP,
                Landmark::new(thumb_base.x + sign * STEER_OFFSET, thumb_tip.y),
            );
            let wrist = hand.wrist();
            let index_tip = hand.get(INDEX_TIP);
            hand.set(
                INDEX_TIP,
                Landmark::new(index_tip.x, wrist.y + sign * STEER_OFFSET),
            );
        }

        Some(hand)
    }

    fn advance(&mut self) {
        self.fist_frames = self.fist_frames.saturating_sub(1);
        self.steer_frames = self.steer_frames.saturating_sub(1);
        if self.steer_frames == 0 {
            self.steer = None;
        }
    }
}

impl LandmarkProvider for KeyboardHand {
    fn describe(&self) -> String {
        "keyboard".to_string()
    }

    fn capture(&mut self) -> Result<TrackingFrame, FrameError> {
        let frame = match self.current_pose() {
            Some(hand) => TrackingFrame::with_hands(vec![hand]),
            None => TrackingFrame::empty(),
        };
        self.advance();
        Ok(frame)
    }

    fn observe_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => self.fist_frames = FIST_HOLD_FRAMES,
            KeyCode::Left | KeyCode::Char('a') => {
                self.steer = Some(Steer::Left);
                self.steer_frames = STEER_HOLD_FRAMES;
            }
            KeyCode::Right | KeyCode::Char('d') => {
                self.steer = Some(Steer::Right);
                self.steer_frames = STEER_HOLD_FRAMES;
            }
            KeyCode::Char('h') => self.visible = !self.visible,
            _ => {}
        }
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("[Space]", "Fist"), ("[←/→]", "Steer"), ("[H]", "Hide hand")]
    }
}
