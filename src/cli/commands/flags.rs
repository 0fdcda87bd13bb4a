//! Print the compiler defines for the logging configuration

use std::path::PathBuf;

use sitetool::logconfig::{LogConfig, LogLevel};
use sitetool::options::{BuildOptions, FileOptions, Overrides};
use sitetool::output::{FlagsResult, OutputMode, SourceFlags};
use sitetool::paths;

/// Compute and print the logging defines, optionally per source file
pub fn run(sources: &[PathBuf], log_level: Option<LogLevel>, mode: OutputMode) -> anyhow::Result<()> {
    let log = LogConfig::load(paths::log_config())?;
    let file = FileOptions::load()?;
    let options = BuildOptions::resolve(
        file,
        log,
        Overrides {
            log_level,
            ..Overrides::default()
        },
    );

    let result = FlagsResult {
        global: options.log.global_flags(),
        per_source: sources
            .iter()
            .map(|source| SourceFlags {
                source: source.display().to_string(),
                flags: options.log.flags_for(source),
            })
            .collect(),
    };
    result.render(mode);
    Ok(())
}
