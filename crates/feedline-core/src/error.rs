//! Error types for record construction and block dispatch.

use serde::Serialize;
use thiserror::Error;

/// A record could not be built from its raw inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("field `{field}` has invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Why a block was rejected by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    /// `line` is 1-based within the block's non-blank lines.
    #[error("line {line} is not a `KEY: VALUE` pair: {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("block has no TYPE field")]
    MissingType,

    #[error("unknown record type {0:?}")]
    UnknownType(String),

    #[error(transparent)]
    Invalid(#[from] RecordError),
}

/// Coarse grouping of [`BlockError`] for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureClass {
    /// The block's shape is wrong: bad line, no TYPE, unknown TYPE.
    Structural,
    /// The block is well-shaped but a field failed its variant's rules.
    Validation,
}

impl BlockError {
    pub fn class(&self) -> FailureClass {
        match self {
            BlockError::MalformedLine { .. } | BlockError::MissingType | BlockError::UnknownType(_) => {
                FailureClass::Structural
            }
            BlockError::Invalid(_) => FailureClass::Validation,
        }
    }
}

impl std::fmt::Display for FailureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureClass::Structural => write!(f, "structural"),
            FailureClass::Validation => write!(f, "validation"),
        }
    }
}
