//! Logging tree configuration handed to the external runtime.
//!
//! The runtime logger level follows the `LOG_LEVEL` environment variable and
//! defaults to INFO; the application logger is fixed at INFO. Both write to
//! the console handler.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{APP_LOGGER_NAME, RUNTIME_LOGGER_NAME};

/// Severity level for a configured logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

/// Error returned when a log level override cannot be parsed.
#[derive(Debug, Error)]
#[error("unknown log level: {0}")]
pub struct InvalidLogLevel(pub String);

impl FromStr for LogLevel {
    type Err = InvalidLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(InvalidLogLevel(other.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}

/// A named logger bound to handlers at a severity level.
#[derive(Debug, Clone, Serialize)]
pub struct LoggerConfig {
    pub name: String,
    pub handlers: Vec<String>,
    pub level: LogLevel,
}

/// The full logging tree: handlers plus the loggers wired to them.
#[derive(Debug, Clone, Serialize)]
pub struct LoggingConfig {
    pub disable_existing_loggers: bool,
    pub handlers: Vec<String>,
    pub loggers: Vec<LoggerConfig>,
}

impl LoggingConfig {
    /// Build the console logging tree with the given runtime logger level.
    ///
    /// The application logger level is fixed and does not follow the
    /// override.
    pub fn console_tree(runtime_level: LogLevel) -> Self {
        Self {
            disable_existing_loggers: false,
            handlers: vec!["console".to_string()],
            loggers: vec![
                LoggerConfig {
                    name: RUNTIME_LOGGER_NAME.to_string(),
                    handlers: vec!["console".to_string()],
                    level: runtime_level,
                },
                LoggerConfig {
                    name: APP_LOGGER_NAME.to_string(),
                    handlers: vec!["console".to_string()],
                    level: LogLevel::Info,
                },
            ],
        }
    }

    /// Level of the named logger, if configured.
    pub fn level_of(&self, name: &str) -> Option<LogLevel> {
        self.loggers
            .iter()
            .find(|logger| logger.name == name)
            .map(|logger| logger.level)
    }
}
