//! Command-line parsing and merging with the config file.

use crate::games::GameKind;
use crate::tracking::SourceSpec;
use crate::utils::Config;
use std::path::PathBuf;

pub const HELP: &str = "\
Gesture Arcade - hand-gesture minigames for the terminal

Usage: gesture-arcade [GAME] [OPTIONS]

Games:
  lock       Pop the Lock: close your fist when the bar crosses the marker
  catch      Taco Catch: tilt your finger to walk under falling tacos
  shooter    Asteroid Therapy: point your thumb to steer, shots are automatic

Options:
  --source SRC   Tracking source: keyboard (default), stdin, a JSON-lines file,
                 or cmd:COMMAND to spawn a tracker
  --fps N        Frame rate (defaults to the game's own)
  --seed N       Seed the random generator for a reproducible session
  --config PATH  Config file (default: <config dir>/gesture-arcade/config.json)
  --version      Show version information
  --help         Show this help message
";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{0} needs a value")]
    MissingValue(String),

    #[error("invalid value '{value}' for {flag}: {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("unknown argument: {0}")]
    Unknown(String),
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliArgs),
    Version,
    Help,
}

/// Flags given on the command line. `None` means "use the config".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub game: Option<GameKind>,
    pub source: Option<SourceSpec>,
    pub fps: Option<u32>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
}

/// Parse arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--source" => {
                let value = take_value(&mut args, &arg)?;
                parsed.source = Some(parse_value(&arg, value)?);
            }
            "--fps" => {
                let value = take_value(&mut args, &arg)?;
                let fps: u32 = parse_value(&arg, value.clone())?;
                if fps == 0 {
                    return Err(ArgsError::InvalidValue {
                        flag: arg,
                        value,
                        reason: "must be at least 1".to_string(),
                    });
                }
                parsed.fps = Some(fps);
            }
            "--seed" => {
                let value = take_value(&mut args, &arg)?;
                parsed.seed = Some(parse_value(&arg, value)?);
            }
            "--config" => {
                parsed.config = Some(PathBuf::from(take_value(&mut args, &arg)?));
            }
            other if other.starts_with('-') => return Err(ArgsError::Unknown(arg)),
            _ if parsed.game.is_none() => {
                parsed.game = Some(parse_value("GAME", arg)?);
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(Command::Run(parsed))
}

fn take_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ArgsError> {
    args.next()
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

fn parse_value<T>(flag: &str, value: String) -> Result<T, ArgsError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ArgsError::InvalidValue {
        flag: flag.to_string(),
        reason: e.to_string(),
        value,
    })
}

/// Effective settings after command-line flags override the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub game: GameKind,
    pub source: SourceSpec,
    pub fps: u32,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn resolve(config: &Config, args: &CliArgs) -> Self {
        let game = args.game.unwrap_or(config.default_game);
        Self {
            game,
            source: args.source.clone().unwrap_or_else(|| config.source.clone()),
            fps: args
                .fps
                .or(config.fps_override)
                .unwrap_or_else(|| game.frame_rate()),
            seed: args.seed.or(config.seed),
        }
    }
}
