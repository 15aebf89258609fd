// src/detect.rs

//! Content-digest change detection.
//!
//! Filesystem watch APIs fire several raw notifications for one logical save
//! when an editor writes to a temp file and renames it over the original.
//! [`ChangeDetector`] collapses those into a single actionable decision by
//! remembering a digest of every file it has looked at and only reporting a
//! change when the digest actually differs.

use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use blake3::{Hash, Hasher};
use tracing::debug;

use crate::errors::Result;

/// Tracks the last known content digest per watched path.
///
/// The mapping lives for one process run and is owned by exactly one value;
/// the dispatch loop drives it from a single task, so no locking is needed.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    digests: HashMap<PathBuf, Hash>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether `path` meaningfully changed since the last call.
    ///
    /// - First sighting of a path always counts as a change, so a file that
    ///   is created and immediately edited is never missed. The cost is one
    ///   extra trigger the first time a previously-unseen path is touched.
    /// - A digest equal to the stored one is the debounce case: the same save
    ///   produced multiple notifications, or content is unchanged.
    /// - A missing file with a stored entry is a deletion, which is a change;
    ///   a missing file that was never tracked is not actionable.
    ///
    /// Read failures other than not-found propagate to the caller and leave
    /// the mapping untouched.
    pub fn did_change(&mut self, path: &Path) -> Result<bool> {
        let Some(digest) = digest_file(path)? else {
            let was_tracked = self.digests.remove(path).is_some();
            if was_tracked {
                debug!(?path, "tracked file removed, treating as change");
            }
            return Ok(was_tracked);
        };

        if let Some(prev) = self.digests.get(path) {
            if *prev == digest {
                debug!(?path, "digest unchanged");
                return Ok(false);
            }
            self.digests.insert(path.to_path_buf(), digest);
            debug!(?path, "digest updated");
        } else {
            self.digests.insert(path.to_path_buf(), digest);
            debug!(?path, "first sighting, digest stored");
        }
        Ok(true)
    }

    /// Whether a digest is currently stored for `path`.
    pub fn is_tracked(&self, path: &Path) -> bool {
        self.digests.contains_key(path)
    }

    /// Number of paths currently tracked.
    pub fn tracked_count(&self) -> usize {
        self.digests.len()
    }
}

/// Digest the full contents of the file at `path`.
///
/// Returns `Ok(None)` if the file does not exist; any other open or read
/// failure is an error. BLAKE3 is used for speed and low collision
/// probability, not for any security property.
fn digest_file(path: &Path) -> Result<Option<Hash>> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("opening file for digest: {path:?}"));
        }
    };

    let mut hasher = Hasher::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = file
            .read(&mut buf)
            .with_context(|| format!("reading file for digest: {path:?}"))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(Some(hasher.finalize()))
}
