//! The seam between the frame loop and whatever produces hand landmarks.

use super::landmarks::HandLandmarks;
use crossterm::event::KeyEvent;
use std::io;

/// Hands detected in one camera frame (usually 0-2).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackingFrame {
    pub hands: Vec<HandLandmarks>,
}

impl TrackingFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_hands(hands: Vec<HandLandmarks>) -> Self {
        Self { hands }
    }

    pub fn has_hands(&self) -> bool {
        !self.hands.is_empty()
    }
}

/// Why a frame could not be captured. All variants are recoverable: the
/// frame loop logs them and skips the frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("tracker I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed tracking frame on line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("tracking source closed")]
    Closed,
}

/// Produces one [`TrackingFrame`] per call.
///
/// Implementations may block until a frame is available; the frame loop
/// paces itself around that.
pub trait LandmarkProvider {
    /// Short human-readable description of the source, shown in the UI.
    fn describe(&self) -> String;

    /// Capture the next frame.
    fn capture(&mut self) -> Result<TrackingFrame, FrameError>;

    /// Keys the frame loop does not consume itself. Only the keyboard
    /// simulation cares.
    fn observe_key(&mut self, _key: &KeyEvent) {}

    /// Status-bar hints for the keys `observe_key` understands.
    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

impl<P: LandmarkProvider + ?Sized> LandmarkProvider for Box<P> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn capture(&mut self) -> Result<TrackingFrame, FrameError> {
        (**self).capture()
    }

    fn observe_key(&mut self, key: &KeyEvent) {
        (**self).observe_key(key)
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        (**self).key_hints()
    }
}
