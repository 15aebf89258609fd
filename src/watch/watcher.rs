// src/watch/watcher.rs

use std::path::PathBuf;

use anyhow::Context as _;
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::Result;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle releases every watch
/// registration; that only happens at whole-process shutdown.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Register a non-recursive watch on every directory in `dirs` and expose the
/// raw results as two channels: one of changed paths, one of watch-layer
/// error messages.
///
/// The caller enumerates subdirectories itself (see [`super::scan`]), so each
/// registration is non-recursive. Any registration failure is fatal; no
/// partial watch set is left running.
///
/// Both channels are unbounded: the notify callback runs on its own thread
/// and must never block on a slow consumer, and the dispatch loop is expected
/// to drain both continuously.
pub fn spawn_watcher(
    dirs: &[PathBuf],
) -> Result<(
    WatcherHandle,
    mpsc::UnboundedReceiver<PathBuf>,
    mpsc::UnboundedReceiver<String>,
)> {
    let (path_tx, path_rx) = mpsc::unbounded_channel::<PathBuf>();
    let (error_tx, error_rx) = mpsc::unbounded_channel::<String>();

    // Closure called synchronously by notify whenever an event arrives.
    // Send failures mean the dispatch loop is gone, which only happens
    // during shutdown, so they are ignored.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<notify::Event>| match res {
            Ok(event) => {
                debug!(?event, "raw notify event");
                for path in event.paths {
                    let _ = path_tx.send(path);
                }
            }
            Err(err) => {
                let _ = error_tx.send(err.to_string());
            }
        },
        Config::default(),
    )
    .context("initialising filesystem watcher")?;

    for dir in dirs {
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("registering watch on {dir:?}"))?;
    }

    info!(count = dirs.len(), "watch registrations complete");

    Ok((WatcherHandle { _inner: watcher }, path_rx, error_rx))
}
