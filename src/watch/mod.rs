// src/watch/mod.rs

//! File watching: directory enumeration, watch registration, and the
//! path-based ignore filter.
//!
//! This module is responsible for:
//! - Walking the root directory to find every subdirectory worth watching.
//! - Wiring up a cross-platform filesystem watcher (`notify`) and exposing
//!   its notifications and errors as two channels.
//! - Deciding, purely from the path string, which notifications are worth
//!   handing to the change detector at all.
//!
//! It does **not** decide whether a file actually changed; that is the job of
//! `detect::ChangeDetector`.

pub mod filter;
pub mod scan;
pub mod watcher;

pub use filter::PathFilter;
pub use scan::enumerate_watch_dirs;
pub use watcher::{spawn_watcher, WatcherHandle};
