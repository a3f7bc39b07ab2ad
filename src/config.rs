// ABOUTME: Environment-driven runtime configuration for data directory and log level
// ABOUTME: Unset or unparseable values fall back to defaults instead of failing startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! Runtime configuration read from `MEETPREP_*` environment variables.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::Level;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "MEETPREP_DATA_DIR";

/// Environment variable overriding the log level
pub const LOG_LEVEL_ENV: &str = "MEETPREP_LOG_LEVEL";

const STATE_FILE_NAME: &str = "state.json";
const TRAINING_LOG_FILE_NAME: &str = "training_log.json";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to a `tracing` level
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string, falling back to `Info` for unrecognized values
    #[must_use]
    pub fn from_str_or_default(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the state file and training log
    pub data_dir: PathBuf,
    /// Base log level, overridable per module via `RUST_LOG`
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = env::var(DATA_DIR_ENV).map_or_else(|_| default_data_dir(), PathBuf::from);
        let log_level = env::var(LOG_LEVEL_ENV)
            .map(|raw| LogLevel::from_str_or_default(&raw))
            .unwrap_or_default();
        Self {
            data_dir,
            log_level,
        }
    }

    /// Path of the persisted state snapshot
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE_NAME)
    }

    /// Path of the append-only training log
    #[must_use]
    pub fn training_log_path(&self) -> PathBuf {
        self.data_dir.join(TRAINING_LOG_FILE_NAME)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: LogLevel::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("."), |base| base.join("meetprep"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_falls_back_to_info() {
        assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
    }

    #[test]
    fn paths_are_rooted_in_the_data_dir() {
        let config = AppConfig {
            data_dir: PathBuf::from("/tmp/meetprep-test"),
            log_level: LogLevel::Info,
        };
        assert_eq!(
            config.state_path(),
            PathBuf::from("/tmp/meetprep-test/state.json")
        );
        assert_eq!(
            config.training_log_path(),
            PathBuf::from("/tmp/meetprep-test/training_log.json")
        );
    }
}
