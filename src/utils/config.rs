//! User configuration, read from `<config_dir>/gesture-arcade/config.json`.
//!
//! Every field is optional in the file; missing fields take their defaults.
//! Command-line flags override whatever the file says.

use crate::games::GameKind;
use crate::tracking::SourceSpec;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "gesture-arcade";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "gesture-arcade.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("no home directory to look for a config in")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_game: GameKind,
    pub source: SourceSpec,
    /// Frame rate to run at instead of the game's own.
    pub fps_override: Option<u32>,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
    /// `env_logger` filter; `RUST_LOG` wins when set.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_game: GameKind::default(),
            source: SourceSpec::default(),
            fps_override: None,
            seed: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", APP_NAME).ok_or(ConfigError::NoConfigDir)
}

impl Config {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit path (which must exist), or from the default
    /// location (where a missing file means defaults).
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::parse(&fs::read_to_string(path)?, path),
            None => Self::load_or_default(&Self::default_path()?),
        }
    }

    /// Load `path`, treating a missing file as an empty config.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::parse(&json, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn parse(json: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Where log output goes: the configured file, else the data directory.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| project_dirs().ok().map(|d| d.data_dir().join(LOG_FILE_NAME)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Config, ConfigError> {
        Config::parse(json, Path::new("config.json"))
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = parse("{}");
        assert!(matches!(config, Ok(ref c) if *c == Config::default()));
    }

    #[test]
    fn test_partial_config() {
        let config = parse(
            r#"{"default_game": "shooter", "source": {"command": "tracker --json"}, "seed": 7}"#,
        );
        let Ok(config) = config else {
            panic!("config should parse");
        };
        assert_eq!(config.default_game, GameKind::Shooter);
        assert_eq!(
            config.source,
            SourceSpec::Command("tracker --json".to_string())
        );
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.fps_override, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_game_is_a_parse_error() {
        let err = parse(r#"{"default_game": "pong"}"#);
        assert!(matches!(err, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_default_file_gives_defaults() {
        let path = std::env::temp_dir().join("gesture-arcade-no-such-config.json");
        let config = Config::load_or_default(&path);
        assert!(matches!(config, Ok(ref c) if *c == Config::default()));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("gesture-arcade-no-such-explicit.json");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_configured_log_file_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/arcade.log")),
            ..Config::default()
        };
        assert_eq!(config.log_file_path(), Some(PathBuf::from("/tmp/arcade.log")));
    }
}
