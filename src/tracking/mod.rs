//! Hand tracking input: landmark types, the provider seam, and the
//! concrete sources the frame loop can read from.

pub mod landmarks;
pub mod provider;
pub mod scripted;
pub mod simulated;
pub mod stream;

pub use landmarks::{HandLandmarks, Landmark, HAND_SKELETON, LANDMARK_COUNT};
pub use provider::{FrameError, LandmarkProvider, TrackingFrame};
pub use scripted::ScriptedProvider;
pub use simulated::KeyboardHand;
pub use stream::StreamProvider;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

/// Where tracking frames come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceSpec {
    /// Synthetic hand driven by the keyboard.
    Keyboard,
    /// JSON lines piped into stdin.
    Stdin,
    /// JSON lines replayed from a file.
    File(PathBuf),
    /// JSON lines from a spawned tracker command.
    Command(String),
}

impl Default for SourceSpec {
    fn default() -> Self {
        SourceSpec::Keyboard
    }
}

impl FromStr for SourceSpec {
    type Err = String;

    /// `keyboard`, `stdin` (or `-`), `cmd:<command line>`, anything else is a file path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("empty source".to_string()),
            "keyboard" => Ok(SourceSpec::Keyboard),
            "stdin" | "-" => Ok(SourceSpec::Stdin),
            other => match other.strip_prefix("cmd:") {
                Some(cmd) if cmd.trim().is_empty() => Err("empty tracker command".to_string()),
                Some(cmd) => Ok(SourceSpec::Command(cmd.trim().to_string())),
                None => Ok(SourceSpec::File(PathBuf::from(other))),
            },
        }
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::Keyboard => write!(f, "keyboard"),
            SourceSpec::Stdin => write!(f, "stdin"),
            SourceSpec::File(path) => write!(f, "{}", path.display()),
            SourceSpec::Command(cmd) => write!(f, "cmd:{}", cmd),
        }
    }
}

/// Open the provider described by `spec`.
pub fn open_provider(spec: &SourceSpec) -> io::Result<Box<dyn LandmarkProvider>> {
    let provider: Box<dyn LandmarkProvider> = match spec {
        SourceSpec::Keyboard => Box::new(KeyboardHand::new()),
        SourceSpec::Stdin => Box::new(StreamProvider::stdin()),
        SourceSpec::File(path) => Box::new(StreamProvider::open_file(path)?),
        SourceSpec::Command(cmd) => Box::new(StreamProvider::spawn(cmd)?),
    };
    log::info!("Tracking source: {}", provider.describe());
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_spec_parsing() {
        assert_eq!("keyboard".parse::<SourceSpec>(), Ok(SourceSpec::Keyboard));
        assert_eq!("-".parse::<SourceSpec>(), Ok(SourceSpec::Stdin));
        assert_eq!(
            "cmd:python3 tracker.py --cam 0".parse::<SourceSpec>(),
            Ok(SourceSpec::Command("python3 tracker.py --cam 0".to_string()))
        );
        assert_eq!(
            "frames.jsonl".parse::<SourceSpec>(),
            Ok(SourceSpec::File(PathBuf::from("frames.jsonl")))
        );
        assert!("cmd:  ".parse::<SourceSpec>().is_err());
        assert!("".parse::<SourceSpec>().is_err());
    }

    #[test]
    fn test_source_spec_display_roundtrips_through_parse() {
        for spec in [
            SourceSpec::Keyboard,
            SourceSpec::Stdin,
            SourceSpec::Command("tracker --json".to_string()),
        ] {
            assert_eq!(spec.to_string().parse::<SourceSpec>(), Ok(spec));
        }
    }

    #[test]
    fn test_open_missing_file_fails() {
        let spec = SourceSpec::File(PathBuf::from("/definitely/not/here.jsonl"));
        assert!(open_provider(&spec).is_err());
    }
}
