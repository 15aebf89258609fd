// src/report.rs

//! User-visible terminal output.
//!
//! All failure paths in the steady-state loop funnel through [`failure`], so
//! digest errors, watch-layer errors, and build failures look the same to the
//! user: an audible bell followed by a red `ERROR:` line. Logging via
//! `tracing` is separate and carries the structured detail.

use std::path::Path;

use owo_colors::OwoColorize;

/// Bell character, sounded before every reported failure.
const CHIME: &str = "\x07";

/// Report a recoverable failure: chime, then a red `ERROR:` line on stderr.
pub fn failure(msg: &str) {
    eprint!("{CHIME}");
    eprintln!("{}", format!("ERROR: {msg}").red());
}

/// Announce a detected change before the rebuild runs.
pub fn change(path: &Path) {
    println!("{}", format!("CHANGE: {}", path.display()).green());
}

/// Printed once after watch registration succeeds.
pub fn watching() {
    println!("{}", "Watching for changes...".cyan());
}
