// src/exec/mod.rs

//! Process execution layer.
//!
//! This module owns the rebuild action: running the external build command
//! with `tokio::process::Command` and turning its exit status and combined
//! output into a single `Result` for the dispatch loop.

pub mod rebuild;

pub use rebuild::{BuildCommand, RebuildAction};
