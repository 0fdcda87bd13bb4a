//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sitetool::logconfig::LogLevel;
use sitetool::options::Overrides;
use sitetool::output::OutputMode;

use super::commands;

/// sitetool - build-site tooling for C firmware projects
#[derive(Parser, Debug)]
#[command(
    name = "sitetool",
    version,
    about = "Build-site tooling for C firmware projects",
    long_about = "Build configuration helpers for C firmware projects.\n\n\
                  Enumerates source files relative to a build origin, turns\n\
                  logging options into compiler defines, and wraps the\n\
                  external style checker."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recursively enumerate sources relative to an origin directory
    Sources {
        /// Directory tree to search
        search: PathBuf,

        /// Directory results are made relative to (the build origin)
        #[arg(short, long, default_value = ".")]
        origin: PathBuf,

        /// Filename glob pattern, matched per directory
        #[arg(short, long, default_value = "*.c")]
        pattern: String,
    },

    /// Print the compiler defines for the logging configuration
    Flags {
        /// Source files to emit per-file defines for
        source: Vec<PathBuf>,

        /// Force log level (options: NONE, ERROR, WARN, INFO (default), DEBUG, VERBOSE)
        #[arg(long)]
        log_level: Option<LogLevel>,
    },

    /// Run the style checker and capture its output into artifact files
    Style {
        /// Files to check (non-.c files are skipped)
        files: Vec<PathBuf>,

        /// Target name the -stderr/-stdout artifacts are derived from
        #[arg(short, long)]
        target: PathBuf,

        /// Lint command to invoke
        #[arg(long)]
        lint_cmd: Option<String>,
    },

    /// Show the resolved build options
    Options {
        /// Parallel job count
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Force log level
        #[arg(long)]
        log_level: Option<LogLevel>,

        /// Lint command to invoke
        #[arg(long)]
        lint_cmd: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Sources {
            search,
            origin,
            pattern,
        }) => commands::sources::run(&search, &origin, &pattern, output_mode),
        Some(Command::Flags { source, log_level }) => {
            commands::flags::run(&source, log_level, output_mode)
        },
        Some(Command::Style {
            files,
            target,
            lint_cmd,
        }) => commands::style::run(&files, &target, lint_cmd, output_mode),
        Some(Command::Options {
            jobs,
            log_level,
            lint_cmd,
        }) => commands::options::run(
            Overrides {
                jobs,
                lint_cmd,
                log_level,
            },
            output_mode,
        ),
        Some(Command::Version) => {
            println!("sitetool v{}", sitetool::VERSION);
            Ok(())
        },
        None => {
            println!("sitetool v{}", sitetool::VERSION);
            println!("Build-site tooling for C firmware projects");
            println!("Run `sitetool --help` for usage.");
            Ok(())
        },
    }
}
