// src/watch/filter.rs

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::errors::Result;

/// Path-based ignore filter applied before any digest work.
///
/// A notification is discarded when:
/// - the final path segment starts with `.` (editor swap files, VCS state),
/// - the extension differs from the configured source extension,
/// - the path matches one of the configured exclude globs.
///
/// This is a pure function of the path string; it never touches the
/// filesystem. Exclude globs are evaluated against the path relative to the
/// watch root, with forward slashes, e.g. `"vendor/**"`.
#[derive(Clone)]
pub struct PathFilter {
    root: PathBuf,
    extension: String,
    exclude: Option<GlobSet>,
}

impl fmt::Debug for PathFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathFilter")
            .field("root", &self.root)
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

impl PathFilter {
    /// Build a filter for source files with `extension` (without the dot)
    /// under `root`, excluding paths matching any of `exclude_patterns`.
    pub fn new(
        root: impl Into<PathBuf>,
        extension: &str,
        exclude_patterns: &[String],
    ) -> Result<Self> {
        let exclude = if exclude_patterns.is_empty() {
            None
        } else {
            Some(build_globset(exclude_patterns)?)
        };

        Ok(Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
            exclude,
        })
    }

    /// Returns true if a notification for `path` should reach the change
    /// detector.
    pub fn wants(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if name.starts_with('.') {
            return false;
        }

        if !path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.extension)
        {
            return false;
        }

        if let Some(exclude) = &self.exclude {
            if exclude.is_match(self.relative_str(path)) {
                return false;
            }
        }

        true
    }

    /// Path as a string relative to the watch root, with forward slashes.
    ///
    /// Paths outside the root are matched as-is; globs anchored at the root
    /// simply won't match them.
    fn relative_str(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.to_string_lossy().replace('\\', "/")
    }
}

/// Build a GlobSet from simple string patterns.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat).with_context(|| format!("invalid exclude pattern: {pat}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}
