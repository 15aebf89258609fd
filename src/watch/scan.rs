// src/watch/scan.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::errors::Result;

/// Recursively collect `root` and every subdirectory below it.
///
/// Hidden directories (name starting with `.`) are skipped and not descended
/// into, so `.git` and editor state directories never generate watch
/// registrations. A traversal failure anywhere (for example permission denial
/// at the root) propagates as an error; no partial watch set is returned.
pub fn enumerate_watch_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    collect_dirs(root, &mut dirs)?;
    debug!(count = dirs.len(), ?root, "enumerated watch directories");
    Ok(dirs)
}

fn collect_dirs(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    out.push(dir.to_path_buf());

    let entries =
        fs::read_dir(dir).with_context(|| format!("reading directory: {dir:?}"))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("reading entry in: {dir:?}"))?;
        let path = entry.path();

        if is_hidden(&path) {
            continue;
        }

        let file_type = entry
            .file_type()
            .with_context(|| format!("stat-ing entry: {path:?}"))?;
        if file_type.is_dir() {
            collect_dirs(&path, out)?;
        }
    }

    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
