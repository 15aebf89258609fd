// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `buildwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "buildwatch",
    version,
    about = "Watch a source tree and rerun a build command on real changes.",
    long_about = None
)]
pub struct CliArgs {
    /// Root directory to watch.
    ///
    /// Default: the current working directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Build command to run when a change is detected, e.g. "go build".
    ///
    /// Overrides `command` from the config file.
    #[arg(long, value_name = "CMD")]
    pub command: Option<String>,

    /// Source file extension that triggers rebuilds (without the dot).
    ///
    /// Overrides `extension` from the config file.
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Buildwatch.toml` in the root directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BUILDWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Extra arguments appended verbatim to the build command.
    ///
    /// Everything after `--` is forwarded, mirroring how the program itself
    /// was invoked: `buildwatch -- -tags dev` runs `go build -tags dev`.
    #[arg(last = true, value_name = "BUILD_ARGS")]
    pub build_args: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
