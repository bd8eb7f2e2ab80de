//! File ingestion controller.
//!
//! Drives one input file through parser → dispatcher → feed log, then removes
//! the file if at least one record from it was committed. Bad blocks are
//! counted and reported, never raised; only an unreadable input file (or an
//! unwritable feed log) fails the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use feedline_core::{dispatch_rendered, split_blocks, Clock, FailureClass, SystemClock};
use serde::Serialize;

use crate::error::IngestError;
use crate::feed_log::FeedLog;

/// Default input file extension for folder batches.
pub const DEFAULT_EXTENSION: &str = "txt";

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Per-file result.
///
/// `success_count + failed_count == total_blocks`: every block is accounted
/// for, including those rejected before a type could be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub success_count: usize,
    pub failed_count: usize,
    pub total_blocks: usize,
    /// Why each failed block was rejected, in block order.
    pub rejected: Vec<Rejection>,
    pub cleanup: Cleanup,
}

/// A block the dispatcher refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// 1-based position among the file's blocks.
    pub block: usize,
    /// 1-based line in the input file where the block starts.
    pub start_line: usize,
    pub class: FailureClass,
    pub reason: String,
}

/// What happened to the input file after its records were committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum Cleanup {
    /// At least one record was committed and the file was deleted.
    Removed,
    /// Nothing was committed, so the file was left in place.
    Kept,
    /// Records were committed but the file could not be deleted.
    RemoveFailed(String),
}

// ---------------------------------------------------------------------------
// Ingestor
// ---------------------------------------------------------------------------

/// Ingests input files into a single feed log.
#[derive(Debug, Clone)]
pub struct Ingestor<C = SystemClock> {
    feed: FeedLog,
    clock: C,
    extension: String,
}

impl Ingestor<SystemClock> {
    pub fn new(feed: FeedLog) -> Self {
        Self::with_clock(feed, SystemClock)
    }
}

impl<C: Clock> Ingestor<C> {
    pub fn with_clock(feed: FeedLog, clock: C) -> Self {
        Self {
            feed,
            clock,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Restrict folder batches to files with this extension (no dot).
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Ingest one input file.
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome, IngestError> {
        let text = fs::read_to_string(path).map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let blocks = split_blocks(&text);
        let mut committed = Vec::with_capacity(blocks.len());
        let mut rejected = Vec::new();

        for (idx, block) in blocks.iter().enumerate() {
            match dispatch_rendered(block, &self.clock) {
                Ok(rendered) => committed.push(rendered.text),
                Err(err) => {
                    tracing::debug!(
                        file = %path.display(),
                        block = idx + 1,
                        line = block.start_line,
                        class = %err.class(),
                        error = %err,
                        "block rejected"
                    );
                    rejected.push(Rejection {
                        block: idx + 1,
                        start_line: block.start_line,
                        class: err.class(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        self.feed
            .append(&committed)
            .map_err(|source| IngestError::Append {
                path: self.feed.path().to_path_buf(),
                source,
            })?;

        let cleanup = if committed.is_empty() {
            Cleanup::Kept
        } else {
            remove_source(path)
        };

        let outcome = FileOutcome {
            success_count: committed.len(),
            failed_count: rejected.len(),
            total_blocks: blocks.len(),
            rejected,
            cleanup,
        };
        tracing::info!(
            file = %path.display(),
            success = outcome.success_count,
            failed = outcome.failed_count,
            total = outcome.total_blocks,
            "file processed"
        );
        Ok(outcome)
    }

    /// Ingest every matching file in `dir`, in file-name order. A file that
    /// fails does not stop the others; its error is returned in its slot.
    pub fn process_folder(
        &self,
        dir: &Path,
    ) -> Result<BTreeMap<String, Result<FileOutcome, IngestError>>, IngestError> {
        let mut results = BTreeMap::new();
        for path in self.input_files(dir)? {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let result = self.process_file(&path);
            if let Err(err) = &result {
                tracing::warn!(file = %path.display(), error = %err, "file skipped");
            }
            results.insert(name, result);
        }
        Ok(results)
    }

    /// Regular files in `dir` with the configured extension, sorted by name.
    pub fn input_files(&self, dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
        let list_err = |source| IngestError::ListFolder {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(list_err)? {
            let path = entry.map_err(list_err)?.path();
            let matches = path
                .extension()
                .is_some_and(|ext| ext == self.extension.as_str());
            if matches && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Best-effort removal of a consumed input file. Failure is reported in the
/// outcome and logged, never raised.
fn remove_source(path: &Path) -> Cleanup {
    match fs::remove_file(path) {
        Ok(()) => Cleanup::Removed,
        Err(err) => {
            tracing::warn!(file = %path.display(), error = %err, "could not remove consumed input file");
            Cleanup::RemoveFailed(err.to_string())
        }
    }
}
