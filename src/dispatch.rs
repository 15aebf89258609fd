// src/dispatch.rs

//! The steady-state dispatch loop.
//!
//! One task drains the event source's notification and error channels,
//! applies the ignore filter, asks the change detector for a decision, and
//! runs the rebuild action on a positive one. Every per-event failure is
//! reported and swallowed here; nothing recoverable may unwind past this
//! loop.

use std::path::PathBuf;

use tokio::sync::mpsc;
use tracing::debug;

use crate::detect::ChangeDetector;
use crate::exec::RebuildAction;
use crate::report;
use crate::watch::PathFilter;

/// Owns the change detector for the lifetime of the run and turns raw path
/// notifications into rebuild invocations.
#[derive(Debug)]
pub struct DispatchLoop<R: RebuildAction> {
    detector: ChangeDetector,
    filter: PathFilter,
    action: R,
    notifications: mpsc::UnboundedReceiver<PathBuf>,
    watch_errors: mpsc::UnboundedReceiver<String>,
}

impl<R: RebuildAction> DispatchLoop<R> {
    pub fn new(
        detector: ChangeDetector,
        filter: PathFilter,
        action: R,
        notifications: mpsc::UnboundedReceiver<PathBuf>,
        watch_errors: mpsc::UnboundedReceiver<String>,
    ) -> Self {
        Self {
            detector,
            filter,
            action,
            notifications,
            watch_errors,
        }
    }

    /// Drain both channels until they close.
    ///
    /// Notifications are processed strictly one at a time in arrival order;
    /// while a rebuild runs, further notifications queue in the channel and
    /// are drained afterwards, not dropped. The two channels are merged here
    /// so neither can starve the other.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(path) = self.notifications.recv() => {
                    self.handle_notification(path).await;
                }
                Some(msg) = self.watch_errors.recv() => {
                    report::failure(&msg);
                }
                else => break,
            }
        }
        debug!("dispatch loop ended, channels closed");
    }

    async fn handle_notification(&mut self, path: PathBuf) {
        if !self.filter.wants(&path) {
            debug!(?path, "ignored by filter");
            return;
        }

        match self.detector.did_change(&path) {
            Err(err) => report::failure(&format!("{err:#}")),
            Ok(false) => debug!(?path, "no content change, suppressed"),
            Ok(true) => {
                report::change(&path);
                if let Err(err) = self.action.rebuild().await {
                    report::failure(&format!("{err:#}"));
                }
            }
        }
    }
}
