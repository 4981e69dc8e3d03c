//! Utility modules: build info, configuration, logging.

pub mod build_info;
pub mod config;
pub mod logging;

pub use config::{Config, ConfigError};
