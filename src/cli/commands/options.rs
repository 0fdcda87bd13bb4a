//! Show the resolved build options

use sitetool::logconfig::LogConfig;
use sitetool::options::{BuildOptions, FileOptions, Overrides};
use sitetool::output::{OptionsResult, OutputMode};
use sitetool::paths;

/// Resolve and print the build options (defaults, file config, overrides)
pub fn run(overrides: Overrides, mode: OutputMode) -> anyhow::Result<()> {
    let file = FileOptions::load()?;
    let log = LogConfig::load(paths::log_config())?;
    let options = BuildOptions::resolve(file, log, overrides);

    OptionsResult { options }.render(mode);
    Ok(())
}
