use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// File-level failures. Anything below the file (a bad block) is counted in
/// the outcome instead.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read input file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening or writing the feed log failed. Part of the batch may have
    /// landed; the input file is kept.
    #[error("failed to append to feed log {}: {source}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list input folder {}: {source}", path.display())]
    ListFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
