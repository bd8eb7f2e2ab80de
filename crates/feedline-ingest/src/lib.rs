//! feedline-ingest: feed log writer and file ingestion controller.
//!
//! [`Ingestor::process_file`] reads one input file, dispatches each block,
//! appends the committed records to the [`FeedLog`] in block order and then
//! deletes the input if anything was committed. [`Ingestor::process_folder`]
//! does the same for every matching file in a folder.

pub mod error;
pub mod feed_log;
pub mod ingestor;

pub use error::IngestError;
pub use feed_log::{FeedLog, SEPARATOR};
pub use ingestor::{Cleanup, FileOutcome, Ingestor, Rejection};
