//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Human mode for `sources`
//! and `flags` is deliberately bare (one item per line) so build files can
//! consume it directly.

use colored::Colorize;
use serde::Serialize;

use crate::options::BuildOptions;
use crate::style::StyleReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a sources enumeration
#[derive(Debug, Serialize)]
pub struct SourcesResult {
    /// Number of matches
    pub count: usize,
    /// Matched paths, relative to the origin directory, in walk order
    pub files: Vec<String>,
}

impl SourcesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for file in &self.files {
                    println!("{file}");
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// Result of a compiler-flags computation
#[derive(Debug, Serialize)]
pub struct FlagsResult {
    /// Flags shared by the whole build
    pub global: Vec<String>,
    /// Per-source flag sets, keyed by the source path as given
    pub per_source: Vec<SourceFlags>,
}

/// The flags for one source file
#[derive(Debug, Serialize)]
pub struct SourceFlags {
    /// The source file these flags are for
    pub source: String,
    /// The compiler flags
    pub flags: Vec<String>,
}

impl FlagsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for flag in &self.global {
                    println!("{flag}");
                }
                for entry in &self.per_source {
                    println!("{}: {}", entry.source, entry.flags.join(" "));
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// Result of a style-check run
#[derive(Debug, Serialize)]
pub struct StyleResult {
    /// Whether the lint tool exited cleanly
    pub passed: bool,
    /// The report from the runner
    #[serde(flatten)]
    pub report: StyleReport,
}

impl StyleResult {
    /// Wrap a runner report
    #[must_use]
    pub const fn new(report: StyleReport) -> Self {
        Self {
            passed: report.passed(),
            report,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if !self.report.stdout.is_empty() {
            println!("{}", self.report.stdout);
        }
        if !self.report.stderr.is_empty() {
            eprintln!("{}", self.report.stderr);
        }
        let verdict = if self.passed {
            "style check passed".green()
        } else {
            "style check failed".red()
        };
        println!(
            "{verdict}: {} file(s), artifacts {} / {}",
            self.report.files_checked,
            self.report.stderr_artifact.display(),
            self.report.stdout_artifact.display()
        );
    }
}

/// Result of an options query
#[derive(Debug, Serialize)]
pub struct OptionsResult {
    /// The resolved build options
    pub options: BuildOptions,
}

impl OptionsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("jobs: {}", self.options.jobs);
                println!("lint_cmd: {}", self.options.lint_cmd);
                println!("log_level: {}", self.options.log.default_level);
                for (file, level) in &self.options.log.levels {
                    println!("log_level[{file}]: {level}");
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
