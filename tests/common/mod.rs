//! Shared test utilities for feedline integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. All helpers pin time with a [`FixedClock`] so rendered
//! output is deterministic.
//!
//! [`FixedClock`]: feedline::FixedClock

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
