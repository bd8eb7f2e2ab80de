//! feedline: block-structured record ingestion.
//!
//! Reads loosely structured text files made of `KEY: VALUE` blocks, turns each
//! block into a typed record (news, private ad, recipe), renders it, and
//! appends it to an append-only feed log. This crate re-exports the workspace
//! layers so that integration tests and the binary can import them directly.
//!
//! # Architecture
//!
//! ```text
//! input file ──► parser ──► dispatch ──► record ──► feed log
//!     ▲                                                │
//!     └──────────── removed once anything committed ◄──┘
//! ```
//!
//! Everything runs synchronously on the caller's thread; the feed log assumes
//! a single writer.

pub use feedline_core::{clock, config, dispatch, error, factory, parser, record, types};
pub use feedline_core::{
    dispatch_rendered, split_blocks, AdStatus, BlockError, Clock, Complexity, FailureClass,
    FixedClock, News, ParsedFields, PrivateAd, RawBlock, Record, RecordError, RecordKind, Recipe,
    Rendered, SystemClock,
};
pub use feedline_ingest::{
    feed_log, ingestor, Cleanup, FeedLog, FileOutcome, IngestError, Ingestor, Rejection,
    SEPARATOR,
};
