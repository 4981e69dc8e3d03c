//! File logging. The terminal belongs to the TUI, so `log` output is piped
//! into a file instead of stderr.

use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Route `log` output to `path`, filtered by `RUST_LOG` or else `level`.
///
/// Returns false and leaves logging disabled when the file cannot be opened
/// or a logger is already installed.
pub fn init_file_logging(path: &Path, level: &str) -> bool {
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return false;
        }
    }
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unopenable_log_file_disables_logging() {
        // A regular file cannot be a parent directory.
        let blocker = std::env::temp_dir().join("gesture-arcade-log-blocker");
        if fs::write(&blocker, b"").is_err() {
            return;
        }
        let path = blocker.join("arcade.log");
        assert!(!init_file_logging(&path, "debug"));
        let _ = fs::remove_file(&blocker);
    }
}
