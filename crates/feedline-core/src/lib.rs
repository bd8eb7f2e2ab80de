//! feedline-core: record model and parsing pipeline for feedline.
//!
//! This crate exposes the pure layers of the ingestion pipeline as public
//! modules, plus the shared types used across them.
//!
//! # Architecture
//!
//! ```text
//! text ──► parser ──► dispatch ──► record ──► rendered text
//!            │            │
//!        RawBlock     BlockError
//! ```
//!
//! Nothing here touches the feed log or the input files; see `feedline-ingest`.

pub mod clock;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod factory;
pub mod parser;
pub mod record;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatch::{dispatch, dispatch_rendered, Rendered};
pub use error::{BlockError, FailureClass, RecordError};
pub use parser::{split_blocks, ParsedFields, RawBlock};
pub use record::{News, PrivateAd, Record, Recipe};
pub use types::{AdStatus, Complexity, RecordKind};
