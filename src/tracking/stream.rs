//! JSON-lines landmark stream from an external hand tracker.
//!
//! Each line is one camera frame:
//!
//! ```text
//! {"hands": [[{"x": 0.51, "y": 0.62, "z": -0.01}, ... 21 points], ...]}
//! ```
//!
//! The tracker is expected to mirror the camera image before inference (as a
//! selfie view). Trackers that do not can send `"mirrored": false` and the
//! provider flips `x` itself. A blank line is a frame with no hands.

use super::landmarks::{HandLandmarks, Landmark, LANDMARK_COUNT};
use super::provider::{FrameError, LandmarkProvider, TrackingFrame};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::process::{Child, Command, Stdio};

#[derive(Debug, Deserialize)]
struct WireFrame {
    #[serde(default)]
    hands: Vec<Vec<Landmark>>,
    #[serde(default = "default_mirrored")]
    mirrored: bool,
}

fn default_mirrored() -> bool {
    true
}

/// Parse one wire line into a frame. `line_no` is only used for error text.
pub fn parse_frame_line(line: &str, line_no: u64) -> Result<TrackingFrame, FrameError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(TrackingFrame::empty());
    }

    let wire: WireFrame = serde_json::from_str(trimmed).map_err(|e| FrameError::Malformed {
        line: line_no,
        reason: e.to_string(),
    })?;

    let mut hands = Vec::with_capacity(wire.hands.len());
    for (i, points) in wire.hands.iter().enumerate() {
        let hand = HandLandmarks::from_slice(points).ok_or_else(|| FrameError::Malformed {
            line: line_no,
            reason: format!(
                "hand {} has {} landmarks, expected {}",
                i,
                points.len(),
                LANDMARK_COUNT
            ),
        })?;
        hands.push(if wire.mirrored { hand } else { hand.mirrored() });
    }

    Ok(TrackingFrame::with_hands(hands))
}

/// Reads frames line by line from a file, stdin, or a spawned tracker process.
pub struct StreamProvider {
    reader: Box<dyn BufRead>,
    label: String,
    child: Option<Child>,
    line_no: u64,
    closed: bool,
    buf: String,
}

impl StreamProvider {
    pub fn from_reader(reader: Box<dyn BufRead>, label: impl Into<String>) -> Self {
        Self {
            reader,
            label: label.into(),
            child: None,
            line_no: 0,
            closed: false,
            buf: String::new(),
        }
    }

    pub fn stdin() -> Self {
        Self::from_reader(Box::new(BufReader::new(io::stdin())), "stdin")
    }

    pub fn open_file(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(
            Box::new(BufReader::new(file)),
            format!("file {}", path.display()),
        ))
    }

    /// Spawn `command` (whitespace-separated program and arguments) and read
    /// its stdout. The child is killed when the provider is dropped.
    pub fn spawn(command: &str) -> io::Result<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty tracker command")
        })?;

        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let stdout = child.stdout.take().ok_or_else(|| {
            io::Error::new(io::ErrorKind::BrokenPipe, "tracker stdout not captured")
        })?;

        log::info!("Spawned tracker '{}' (pid {})", command, child.id());

        let mut provider =
            Self::from_reader(Box::new(BufReader::new(stdout)), format!("cmd {}", program));
        provider.child = Some(child);
        Ok(provider)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl LandmarkProvider for StreamProvider {
    fn describe(&self) -> String {
        self.label.clone()
    }

    /// End of stream is reported once as [`FrameError::Closed`]; after that
    /// every capture yields an empty frame so the games stay responsive.
    fn capture(&mut self) -> Result<TrackingFrame, FrameError> {
        if self.closed {
            return Ok(TrackingFrame::empty());
        }

        self.buf.clear();
        let read = self.reader.read_line(&mut self.buf)?;
        if read == 0 {
            self.closed = true;
            return Err(FrameError::Closed);
        }

        self.line_no += 1;
        parse_frame_line(&self.buf, self.line_no)
    }
}

impl Drop for StreamProvider {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
            log::info!("Tracker process stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::landmarks::THUMB_TIP;
    use std::io::Cursor;

    fn hand_json(x: f64) -> String {
        let point = format!("{{\"x\":{},\"y\":0.5}}", x);
        format!("[{}]", vec![point; LANDMARK_COUNT].join(","))
    }

    fn provider_for(text: &str) -> StreamProvider {
        StreamProvider::from_reader(Box::new(Cursor::new(text.to_string())), "test")
    }

    #[test]
    fn test_parse_blank_line_is_empty_frame() {
        let frame = parse_frame_line("   \n", 1).unwrap();
        assert!(!frame.has_hands());
    }

    #[test]
    fn test_parse_single_hand() {
        let line = format!("{{\"hands\":[{}]}}", hand_json(0.25));
        let frame = parse_frame_line(&line, 1).unwrap();
        assert_eq!(frame.hands.len(), 1);
        assert!((frame.hands[0].get(THUMB_TIP).x - 0.25).abs() < 1e-12);
        assert_eq!(frame.hands[0].get(THUMB_TIP).z, 0.0);
    }

    #[test]
    fn test_parse_unmirrored_hand_gets_flipped() {
        let line = format!("{{\"hands\":[{}],\"mirrored\":false}}", hand_json(0.25));
        let frame = parse_frame_line(&line, 1).unwrap();
        assert!((frame.hands[0].get(THUMB_TIP).x - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_parse_wrong_landmark_count_is_malformed() {
        let line = "{\"hands\":[[{\"x\":0.1,\"y\":0.2}]]}";
        match parse_frame_line(line, 7) {
            Err(FrameError::Malformed { line, reason }) => {
                assert_eq!(line, 7);
                assert!(reason.contains("expected 21"));
            }
            other => panic!("expected malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        assert!(matches!(
            parse_frame_line("not json", 3),
            Err(FrameError::Malformed { line: 3, .. })
        ));
    }

    #[test]
    fn test_stream_reports_close_once_then_empty_frames() {
        let text = format!("{{\"hands\":[{}]}}\n", hand_json(0.5));
        let mut provider = provider_for(&text);

        assert_eq!(provider.capture().unwrap().hands.len(), 1);
        assert!(matches!(provider.capture(), Err(FrameError::Closed)));
        assert!(provider.is_closed());
        assert!(!provider.capture().unwrap().has_hands());
    }

    #[test]
    fn test_stream_malformed_line_does_not_stop_stream() {
        let text = format!("oops\n{{\"hands\":[{}]}}\n", hand_json(0.5));
        let mut provider = provider_for(&text);

        assert!(provider.capture().is_err());
        assert_eq!(provider.capture().unwrap().hands.len(), 1);
    }

    #[test]
    fn test_spawn_rejects_empty_command() {
        assert!(StreamProvider::spawn("   ").is_err());
    }
}
