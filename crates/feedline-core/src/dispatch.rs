//! Record dispatcher: turns one raw block into a record or a rejection.
//!
//! Failures are returned as [`BlockError`] values, never raised past the block.
//! The caller decides what to count and what to log.

use crate::clock::Clock;
use crate::error::BlockError;
use crate::parser::{ParsedFields, RawBlock};
use crate::record::{News, PrivateAd, Record, Recipe};
use crate::types::RecordKind;

/// Build the record declared by `block`.
pub fn dispatch(block: &RawBlock, clock: impl Clock) -> Result<Record, BlockError> {
    let fields = ParsedFields::parse(block)?;
    let tag = fields.get("TYPE").ok_or(BlockError::MissingType)?;
    let kind = RecordKind::from_tag(tag).ok_or_else(|| BlockError::UnknownType(tag.to_string()))?;
    build(kind, &fields, clock)
}

/// Build a record of a known `kind` from already-parsed fields.
pub fn build(kind: RecordKind, fields: &ParsedFields, clock: impl Clock) -> Result<Record, BlockError> {
    let record: Record = match kind {
        RecordKind::News => {
            News::new(fields.require("TEXT")?, fields.require("CITY")?, clock)?.into()
        }
        RecordKind::PrivateAd => {
            PrivateAd::new(fields.require("TEXT")?, fields.require("EXPIRES")?, clock)?.into()
        }
        RecordKind::Recipe => Recipe::new(
            fields.require("TITLE")?,
            fields.require("INGREDIENTS")?,
            clock,
        )?
        .into(),
    };
    Ok(record)
}

/// A block that made it through dispatch, already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub kind: RecordKind,
    pub text: String,
}

/// Dispatch and render in one step.
pub fn dispatch_rendered(block: &RawBlock, clock: impl Clock) -> Result<Rendered, BlockError> {
    let record = dispatch(block, clock)?;
    Ok(Rendered {
        kind: record.kind(),
        text: record.render(),
    })
}
