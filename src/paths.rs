//! Centralized path definitions for sitetool
//!
//! Single source of truth for the config files sitetool reads.
//!
//! ## Layout
//!
//! ```text
//! project/                       # Project root (invocation directory)
//! ├── .sitetool.toml             # SHARED: committed build options
//! └── config/
//!     └── local/
//!         └── log.toml           # LOCAL: per-developer logging config
//!
//! ~/.config/sitetool/
//! └── config.toml                # User-level option defaults
//! ```

use std::path::PathBuf;

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".sitetool.toml";

/// Per-developer logging configuration, relative to the project root
pub const LOG_CONFIG: &str = "config/local/log.toml";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project's `.sitetool.toml`
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Get path to the developer's local logging config
#[must_use]
pub fn log_config() -> PathBuf {
    PathBuf::from(LOG_CONFIG)
}

/// Get the user-global sitetool config directory
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sitetool")
}

/// Get the user-global config file path
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
