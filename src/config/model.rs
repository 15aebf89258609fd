// src/config/model.rs

use serde::Deserialize;

use crate::cli::CliArgs;

/// Build command used when neither the CLI nor the config file names one.
pub const DEFAULT_COMMAND: &str = "go build";

/// Source extension watched by default (without the dot).
pub const DEFAULT_EXTENSION: &str = "go";

/// Configuration as read from a TOML file:
///
/// ```toml
/// command = "go build"
/// extension = "go"
/// exclude = ["vendor/**", "**/*_gen.go"]
/// ```
///
/// All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Build command, e.g. `"go build"`.
    pub command: Option<String>,

    /// Source extension that triggers rebuilds, with or without a leading dot.
    pub extension: Option<String>,

    /// Glob patterns (relative to the watch root) excluded from watching.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub command: String,
    pub extra_args: Vec<String>,
    pub extension: String,
    pub exclude: Vec<String>,
}

impl Settings {
    /// CLI flag if given, else config file value, else the built-in default.
    pub fn resolve(args: &CliArgs, file: &ConfigFile) -> Self {
        let command = args
            .command
            .clone()
            .or_else(|| file.command.clone())
            .unwrap_or_else(|| DEFAULT_COMMAND.to_string());

        let extension = args
            .ext
            .clone()
            .or_else(|| file.extension.clone())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        Self {
            command,
            extra_args: args.build_args.clone(),
            extension: extension.trim_start_matches('.').to_string(),
            exclude: file.exclude.clone(),
        }
    }
}
