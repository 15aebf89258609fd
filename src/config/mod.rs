// src/config/mod.rs

//! Optional TOML configuration.
//!
//! Everything has a default, so `buildwatch` runs with no config file at all;
//! a `Buildwatch.toml` in the watch root (or `--config`) can pin the build
//! command, the source extension, and exclude globs. CLI flags always win.

pub mod loader;
pub mod model;

pub use loader::load_config;
pub use model::{ConfigFile, Settings};
