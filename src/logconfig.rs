//! Logging-configuration injection
//!
//! The firmware's debug logging subsystem is configured entirely at compile
//! time through preprocessor defines. This module holds the build's logging
//! configuration and turns it into the `-D` flags the C compiler needs.
//!
//! Developers do not edit the defaults here; they drop a
//! `config/local/log.toml` into the project (see [`crate::paths`]) and that
//! file is merged over the defaults. A `--log-level` command-line override
//! wins over both, merged in [`crate::options`] so there is exactly one
//! merge point.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur loading a logging configuration
#[derive(Debug, Error)]
pub enum LogConfigError {
    /// IO error reading the config file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML in the config file
    #[error("invalid log config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A firmware log level, ordered from silent to most verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging compiled in
    None,
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Verbose,
}

/// Error parsing a log level name
#[derive(Debug, Error)]
#[error("unknown log level: {0} (options: NONE, ERROR, WARN, INFO, DEBUG, VERBOSE)")]
pub struct ParseLevelError(String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "verbose" => Ok(Self::Verbose),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl LogLevel {
    /// The C define token for this level, e.g. `LOG_LEVEL_INFO`
    #[must_use]
    pub const fn define_token(self) -> &'static str {
        match self {
            Self::None => "LOG_LEVEL_NONE",
            Self::Error => "LOG_LEVEL_ERROR",
            Self::Warn => "LOG_LEVEL_WARN",
            Self::Info => "LOG_LEVEL_INFO",
            Self::Debug => "LOG_LEVEL_DEBUG",
            Self::Verbose => "LOG_LEVEL_VERBOSE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.define_token())
    }
}

/// Logging configuration for a build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level applied to sources without a file-specific entry
    #[serde(default)]
    pub default_level: LogLevel,

    /// Prefix each log line with its level
    #[serde(default = "default_true")]
    pub print_level: bool,

    /// Prefix each log line with a timestamp
    #[serde(default = "default_true")]
    pub print_time: bool,

    /// Prefix each log line with the source file name
    #[serde(default = "default_true")]
    pub print_filename: bool,

    /// File-specific log levels, keyed by source file name.
    /// Declared last so the TOML table serializes after the scalar keys.
    #[serde(default)]
    pub levels: BTreeMap<String, LogLevel>,
}

const fn default_true() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: LogLevel::default(),
            print_level: true,
            print_time: true,
            print_filename: true,
            levels: BTreeMap::new(),
        }
    }
}

impl LogConfig {
    /// Load from a TOML file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LogConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// The log level in effect for one source file
    #[must_use]
    pub fn level_for(&self, source: &str) -> LogLevel {
        self.levels.get(source).copied().unwrap_or(self.default_level)
    }

    /// Compiler flags shared by every source file in the build
    #[must_use]
    pub fn global_flags(&self) -> Vec<String> {
        let mut flags = Vec::new();
        if self.print_level {
            flags.push("-DLOG_PRINT_LEVEL".to_string());
        }
        if self.print_time {
            flags.push("-DLOG_PRINT_TIME".to_string());
        }
        if self.print_filename {
            flags.push("-DLOG_PRINT_FILENAME".to_string());
        }
        flags
    }

    /// Compiler flags for one source file: its logging file name and the
    /// log level in effect for it
    #[must_use]
    pub fn flags_for(&self, source: &Path) -> Vec<String> {
        let file = source
            .file_name()
            .map_or_else(|| source.to_string_lossy(), |n| n.to_string_lossy());
        vec![
            format!("-DLOG_FILENAME=\\\"{file}\\\""),
            format!("-DLOG_LEVEL={}", self.level_for(&file)),
        ]
    }
}
