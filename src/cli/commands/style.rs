//! Run the external style checker and capture artifacts

use std::path::{Path, PathBuf};

use sitetool::logconfig::LogConfig;
use sitetool::options::{BuildOptions, FileOptions, Overrides};
use sitetool::output::{OutputMode, StyleResult};
use sitetool::paths;
use sitetool::style::StyleRunner;

/// Run the lint tool over `files`, writing artifacts derived from `target`
pub fn run(
    files: &[PathBuf],
    target: &Path,
    lint_cmd: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let file = FileOptions::load()?;
    let log = LogConfig::load(paths::log_config())?;
    let options = BuildOptions::resolve(
        file,
        log,
        Overrides {
            lint_cmd,
            ..Overrides::default()
        },
    );

    let runner = StyleRunner::new(options.lint_cmd);
    let report = runner.run(files, target)?;
    let result = StyleResult::new(report);
    result.render(mode);

    if !result.passed {
        // Propagate the lint exit code so the build fails the target
        std::process::exit(result.report.exit_code.max(1));
    }
    Ok(())
}
