//! Block parser: splits input text into blocks and blocks into fields.
//!
//! Purely syntactic. [`split_blocks`] never fails; [`ParsedFields::parse`]
//! rejects a whole block as soon as one line is not a `KEY: VALUE` pair.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BlockError, RecordError};

/// Line that closes a block.
pub const BLOCK_SEPARATOR: &str = "---";

static KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<key>[A-Za-z]+):\s*(?P<value>.*)$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Raw blocks
// ---------------------------------------------------------------------------

/// The non-blank lines between two separators, trailing whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// 1-based line number of the first content line in the source text.
    pub start_line: usize,
    pub lines: Vec<String>,
}

impl RawBlock {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

fn is_separator(line: &str) -> bool {
    line.trim_end() == BLOCK_SEPARATOR
}

/// Split `text` into blocks in source order. Blank lines are dropped, empty
/// blocks are never emitted, and an unterminated final block is kept.
pub fn split_blocks(text: &str) -> Vec<RawBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<RawBlock> = None;

    for (idx, line) in text.lines().enumerate() {
        if is_separator(line) {
            blocks.extend(current.take());
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        current
            .get_or_insert_with(|| RawBlock {
                start_line: idx + 1,
                lines: Vec::new(),
            })
            .lines
            .push(line.trim_end().to_string());
    }
    blocks.extend(current);
    blocks
}

// ---------------------------------------------------------------------------
// Parsed fields
// ---------------------------------------------------------------------------

/// Upper-cased field names mapped to trimmed values. A repeated key keeps
/// its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    fields: HashMap<String, String>,
}

impl ParsedFields {
    /// Parse every line of `block`. Any non-conforming line rejects the block.
    pub fn parse(block: &RawBlock) -> Result<Self, BlockError> {
        let mut fields = HashMap::with_capacity(block.lines.len());
        for (idx, line) in block.lines().enumerate() {
            let caps = KEY_VALUE
                .captures(line)
                .ok_or_else(|| BlockError::MalformedLine {
                    line: idx + 1,
                    text: line.to_string(),
                })?;
            fields.insert(
                caps["key"].to_ascii_uppercase(),
                caps["value"].trim().to_string(),
            );
        }
        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Look up a field the record variant cannot do without.
    pub fn require(&self, key: &'static str) -> Result<&str, RecordError> {
        self.get(key).ok_or(RecordError::MissingField(key))
    }
}
