//! Style-check wrapper around an external lint tool
//!
//! Runs the project's C style checker (cpplint by default) over a set of
//! source files and captures its stdout and stderr into a pair of artifact
//! files derived from a target name. The build treats a nonzero lint exit
//! as a failed target, so the exit code travels in the report rather than
//! as an error.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use thiserror::Error;

/// Default lint command
pub const DEFAULT_LINT_CMD: &str = "cpplint";

/// Errors that can occur while running the style checker
#[derive(Debug, Error)]
pub enum StyleError {
    /// The lint command could not be spawned
    #[error("failed to run {cmd}: {source}")]
    Spawn {
        /// The command that failed to start
        cmd: String,
        /// The underlying spawn error
        source: std::io::Error,
    },

    /// An artifact file could not be written
    #[error("failed to write {path}: {source}")]
    WriteArtifact {
        /// The artifact path
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },
}

/// Outcome of one style-check run
#[derive(Debug, Serialize)]
pub struct StyleReport {
    /// Lint tool exit code (`-1` when killed by a signal)
    pub exit_code: i32,
    /// Number of `.c` files handed to the lint tool
    pub files_checked: usize,
    /// Captured lint stdout
    pub stdout: String,
    /// Captured lint stderr
    pub stderr: String,
    /// Artifact file holding the captured stdout
    pub stdout_artifact: PathBuf,
    /// Artifact file holding the captured stderr
    pub stderr_artifact: PathBuf,
}

impl StyleReport {
    /// Whether the lint tool reported a clean run
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.exit_code == 0
    }
}

/// Derive the artifact files for a style target: `-stderr` and `-stdout`
/// suffixed onto the target's stem, extension preserved.
///
/// `report.txt` becomes `report-stderr.txt` and `report-stdout.txt`.
#[must_use]
pub fn artifact_paths(target: &Path) -> (PathBuf, PathBuf) {
    (with_suffix(target, "-stderr"), with_suffix(target, "-stdout"))
}

fn with_suffix(target: &Path, suffix: &str) -> PathBuf {
    let stem = target
        .file_stem()
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
    let name = match target.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    target.with_file_name(name)
}

/// Runner for the external style checker
#[derive(Debug, Clone)]
pub struct StyleRunner {
    /// The lint command to invoke
    lint_cmd: String,
}

impl Default for StyleRunner {
    fn default() -> Self {
        Self::new(DEFAULT_LINT_CMD)
    }
}

impl StyleRunner {
    /// Create a runner invoking the given lint command
    #[must_use]
    pub fn new(lint_cmd: impl Into<String>) -> Self {
        Self {
            lint_cmd: lint_cmd.into(),
        }
    }

    /// Run the lint tool over the `.c` files in `files`, writing the
    /// captured stderr and stdout to the artifact files derived from
    /// `target`. Non-C inputs (headers, generated files) are skipped.
    pub fn run(&self, files: &[PathBuf], target: &Path) -> Result<StyleReport, StyleError> {
        let sources: Vec<&PathBuf> = files
            .iter()
            .filter(|f| f.extension().is_some_and(|ext| ext == "c"))
            .collect();

        let mut cmd = Command::new(&self.lint_cmd);
        cmd.args(&sources);
        log::info!(
            "{} {}",
            self.lint_cmd,
            sources.iter().map(|s| s.display().to_string()).collect::<Vec<_>>().join(" ")
        );

        let output = cmd.output().map_err(|source| StyleError::Spawn {
            cmd: self.lint_cmd.clone(),
            source,
        })?;

        let (stderr_artifact, stdout_artifact) = artifact_paths(target);
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        write_artifact(&stderr_artifact, &stderr)?;
        write_artifact(&stdout_artifact, &stdout)?;

        Ok(StyleReport {
            exit_code: output.status.code().unwrap_or(-1),
            files_checked: sources.len(),
            stdout,
            stderr,
            stdout_artifact,
            stderr_artifact,
        })
    }
}

fn write_artifact(path: &Path, content: &str) -> Result<(), StyleError> {
    std::fs::write(path, content).map_err(|source| StyleError::WriteArtifact {
        path: path.to_path_buf(),
        source,
    })
}
