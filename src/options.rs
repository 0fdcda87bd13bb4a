//! Build options resolved at a single merge point
//!
//! The original build scattered its option state across ambient build
//! environment mutations (a jobs default set at startup, a `--log-level`
//! command-line option poked into the environment). Here the same knobs are
//! an explicit struct: defaults, then file configuration, then command-line
//! overrides, merged once in [`BuildOptions::resolve`].

use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logconfig::{LogConfig, LogLevel};
use crate::paths;
use crate::style::DEFAULT_LINT_CMD;

/// Errors that can occur loading build options
#[derive(Debug, Error)]
pub enum OptionsError {
    /// IO error reading a config file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML in a config file
    #[error("invalid options file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options read from a config file; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileOptions {
    /// Parallel job count
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Lint command for style checks
    #[serde(default)]
    pub lint_cmd: Option<String>,

    /// Default log level override
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl FileOptions {
    /// Load options from the project config, falling back to the
    /// user-global config, then to empty
    pub fn load() -> Result<Self, OptionsError> {
        let project = paths::project_config();
        if project.exists() {
            return Self::from_file(&project);
        }
        let global = paths::global_config();
        if global.exists() {
            return Self::from_file(&global);
        }
        Ok(Self::default())
    }

    /// Load options from a specific TOML file
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Command-line overrides; applied last
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--jobs`
    pub jobs: Option<usize>,
    /// `--lint-cmd`
    pub lint_cmd: Option<String>,
    /// `--log-level`
    pub log_level: Option<LogLevel>,
}

/// Fully resolved build options
#[derive(Debug, Clone, Serialize)]
pub struct BuildOptions {
    /// Parallel job count handed to the build orchestrator
    pub jobs: usize,

    /// Lint command for style checks
    pub lint_cmd: String,

    /// Logging configuration, log-level override already applied
    pub log: LogConfig,
}

impl BuildOptions {
    /// Merge defaults, file options, and command-line overrides.
    ///
    /// This is the only place option sources meet; callers never patch the
    /// result afterwards.
    #[must_use]
    pub fn resolve(file: FileOptions, log: LogConfig, overrides: Overrides) -> Self {
        let mut log = log;
        if let Some(level) = overrides.log_level.or(file.log_level) {
            log.default_level = level;
        }
        Self {
            jobs: overrides.jobs.or(file.jobs).unwrap_or_else(default_jobs),
            lint_cmd: overrides
                .lint_cmd
                .or(file.lint_cmd)
                .unwrap_or_else(|| DEFAULT_LINT_CMD.to_string()),
            log,
        }
    }
}

/// Default parallel job count: 1.5x the core count, to keep every core busy
/// while some jobs block on IO. The `--jobs` option overrides this.
#[must_use]
pub fn default_jobs() -> usize {
    let cores = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
    (cores * 3 / 2).max(1)
}
