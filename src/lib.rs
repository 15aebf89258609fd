// src/lib.rs

pub mod cli;
pub mod config;
pub mod detect;
pub mod dispatch;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;
pub mod watch;

use std::env;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{load_config, Settings};
use crate::detect::ChangeDetector;
use crate::dispatch::DispatchLoop;
use crate::exec::BuildCommand;
use crate::watch::{enumerate_watch_dirs, spawn_watcher, PathFilter};

/// High-level entry point used by `main.rs`.
///
/// Startup is all-or-nothing: resolving the root, loading config,
/// enumerating directories, and registering watches each short-circuit with
/// an error before the watch loop ever starts. Once watching, the process
/// only ends on Ctrl-C.
pub async fn run(args: CliArgs) -> Result<()> {
    let root = match &args.root {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("determining working directory")?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("resolving watch root {root:?}"))?;

    let cfg = load_config(args.config.as_deref(), &root)?;
    let settings = Settings::resolve(&args, &cfg);
    info!(?root, command = %settings.command, extension = %settings.extension, "starting up");

    let filter = PathFilter::new(&root, &settings.extension, &settings.exclude)?;
    let action = BuildCommand::new(&settings.command, &settings.extra_args)?;

    let dirs = enumerate_watch_dirs(&root)?;
    let (watcher, notifications, watch_errors) = spawn_watcher(&dirs)?;

    report::watching();

    let dispatch = DispatchLoop::new(
        ChangeDetector::new(),
        filter,
        action,
        notifications,
        watch_errors,
    );

    // The dispatch loop only returns when the watcher's channels close, so
    // in practice this select ends via Ctrl-C.
    tokio::select! {
        _ = dispatch.run() => {}
        res = tokio::signal::ctrl_c() => {
            res.context("listening for Ctrl-C")?;
            info!("shutdown requested");
        }
    }

    drop(watcher);
    Ok(())
}
