//! Core types for feedline-core.
//!
//! This module defines the small closed enums shared across the pipeline:
//! the [`RecordKind`] discriminant, the recipe [`Complexity`] label and the
//! private-ad [`AdStatus`].

use phf::phf_map;
use serde::Serialize;

/// Lower-cased `TYPE` tags accepted in input blocks.
static RECORD_TAGS: phf::Map<&'static str, RecordKind> = phf_map! {
    "news" => RecordKind::News,
    "ad" => RecordKind::PrivateAd,
    "recipe" => RecordKind::Recipe,
};

/// Which record variant a block declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    News,
    PrivateAd,
    Recipe,
}

impl RecordKind {
    /// Resolve a raw `TYPE` value. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn from_tag(raw: &str) -> Option<Self> {
        RECORD_TAGS
            .get(raw.trim().to_ascii_lowercase().as_str())
            .copied()
    }

    /// The canonical input tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            RecordKind::News => "news",
            RecordKind::PrivateAd => "ad",
            RecordKind::Recipe => "recipe",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::News => write!(f, "News"),
            RecordKind::PrivateAd => write!(f, "Private Ad"),
            RecordKind::Recipe => write!(f, "Recipe"),
        }
    }
}

/// Recipe complexity, derived from the ingredient count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    /// `SIMPLE` up to 4 ingredients, `MODERATE` for 5..=8, `COMPLEX` above.
    pub fn for_count(count: usize) -> Self {
        match count {
            0..=4 => Complexity::Simple,
            5..=8 => Complexity::Moderate,
            _ => Complexity::Complex,
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Simple => write!(f, "SIMPLE"),
            Complexity::Moderate => write!(f, "MODERATE"),
            Complexity::Complex => write!(f, "COMPLEX"),
        }
    }
}

/// Expiry status of a private ad relative to its reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdStatus {
    Expired,
    DaysLeft(i64),
}

impl std::fmt::Display for AdStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdStatus::Expired => write!(f, "EXPIRED"),
            AdStatus::DaysLeft(n) => write!(f, "Days left: {n}"),
        }
    }
}
