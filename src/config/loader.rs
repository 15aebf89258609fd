// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::config::model::ConfigFile;
use crate::errors::Result;

/// File name looked up in the watch root when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "Buildwatch.toml";

/// Load the configuration for a run.
///
/// - With an explicit path, the file must exist and parse; failure is a
///   startup error.
/// - Without one, `Buildwatch.toml` in `root` is used if present, and its
///   absence simply yields the defaults.
pub fn load_config(explicit: Option<&Path>, root: &Path) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_from_path(path),
        None => {
            let candidate = root.join(DEFAULT_CONFIG_NAME);
            if candidate.is_file() {
                load_from_path(&candidate)
            } else {
                Ok(ConfigFile::default())
            }
        }
    }
}

fn load_from_path(path: &Path) -> Result<ConfigFile> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading config file at {path:?}"))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {path:?}"))?;

    Ok(config)
}
