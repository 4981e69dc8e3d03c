//! A provider that replays a prepared queue of capture results.

use super::provider::{FrameError, LandmarkProvider, TrackingFrame};
use std::collections::VecDeque;

/// Replays queued frames (and failures) in order, then yields empty frames.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    queue: VecDeque<Result<TrackingFrame, FrameError>>,
    captures: u64,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_frame(&mut self, frame: TrackingFrame) -> &mut Self {
        self.queue.push_back(Ok(frame));
        self
    }

    pub fn push_failure(&mut self, error: FrameError) -> &mut Self {
        self.queue.push_back(Err(error));
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Total number of `capture` calls so far.
    pub fn captures(&self) -> u64 {
        self.captures
    }
}

impl LandmarkProvider for ScriptedProvider {
    fn describe(&self) -> String {
        "scripted".to_string()
    }

    fn capture(&mut self) -> Result<TrackingFrame, FrameError> {
        self.captures += 1;
        self.queue
            .pop_front()
            .unwrap_or_else(|| Ok(TrackingFrame::empty()))
    }
}
