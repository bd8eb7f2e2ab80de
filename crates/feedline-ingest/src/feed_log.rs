//! Feed log: append-only text file of rendered records.
//!
//! Every entry is followed by [`SEPARATOR`]. A batch is written with a single
//! open/write/close cycle so entries from one input file stay contiguous and
//! in order.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Written after every entry: a line of 40 dashes flanked by newlines.
pub const SEPARATOR: &str = "\n----------------------------------------\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLog {
    path: PathBuf,
}

impl FeedLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `entries` in order. An empty batch leaves the file untouched.
    /// Returns the number of bytes written.
    pub fn append<S: AsRef<str>>(&self, entries: &[S]) -> io::Result<usize> {
        if entries.is_empty() {
            return Ok(0);
        }

        let mut buf = String::new();
        for entry in entries {
            buf.push_str(entry.as_ref());
            buf.push_str(SEPARATOR);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(buf.as_bytes())?;
        synced(file.sync_data(), &self.path);
        Ok(buf.len())
    }

    pub fn append_one(&self, entry: &str) -> io::Result<usize> {
        self.append(&[entry])
    }
}

/// Once `write_all` has returned the batch is in the feed, so a failed sync
/// is logged and the append still succeeds.
fn synced(result: io::Result<()>, path: &Path) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(feed = %path.display(), error = %err, "feed log written but not synced");
            false
        }
    }
}
