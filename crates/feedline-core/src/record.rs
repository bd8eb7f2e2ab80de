//! Record model: the three feed record variants and their canonical text form.
//!
//! All validation happens in the constructors. Once a record exists its
//! rendering is total, and it never reads the clock again: `published` and the
//! reference date used for derived values are captured at construction.
//!
//! Rendered layouts (no trailing separator; the feed log appends it):
//!
//! ```text
//! NEWS: <text>
//! City: <city>
//! Published: YYYY-MM-DD HH:MM:SS
//!
//! PRIVATE AD: <text>
//! Expires: YYYY-MM-DD (Days left: N | EXPIRED)
//! Published: YYYY-MM-DD HH:MM:SS
//!
//! RECIPE: <title>
//! Ingredients (<n>): a, b, c
//! Avg name length: <x.x> | Complexity: <SIMPLE|MODERATE|COMPLEX>
//! Published: YYYY-MM-DD HH:MM:SS
//! ```

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::clock::Clock;
use crate::error::RecordError;
use crate::types::{AdStatus, Complexity, RecordKind};

/// `strftime` layout of every `Published:` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Input and output layout of ad expiration dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn required_text(field: &'static str, raw: &str) -> Result<String, RecordError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(RecordError::EmptyField(field));
    }
    Ok(value.to_string())
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct News {
    text: String,
    city: String,
    published: NaiveDateTime,
}

impl News {
    pub fn new(text: &str, city: &str, clock: impl Clock) -> Result<Self, RecordError> {
        Ok(Self {
            text: required_text("TEXT", text)?,
            city: city.trim().to_string(),
            published: clock.now(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn published(&self) -> NaiveDateTime {
        self.published
    }
}

impl fmt::Display for News {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NEWS: {}", self.text)?;
        writeln!(f, "City: {}", self.city)?;
        write!(f, "Published: {}", self.published.format(TIMESTAMP_FORMAT))
    }
}

// ---------------------------------------------------------------------------
// Private ad
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateAd {
    text: String,
    expiration: NaiveDate,
    published: NaiveDateTime,
    /// Reference date for days-left; the date part of `published`.
    as_of: NaiveDate,
}

impl PrivateAd {
    /// `expires` must be `YYYY-MM-DD`; surrounding whitespace is ignored.
    pub fn new(text: &str, expires: &str, clock: impl Clock) -> Result<Self, RecordError> {
        let text = text.trim().to_string();
        let raw = expires.trim();
        let expiration = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|source| {
            RecordError::InvalidDate {
                field: "EXPIRES",
                value: raw.to_string(),
                source,
            }
        })?;
        let published = clock.now();
        Ok(Self {
            text,
            expiration,
            published,
            as_of: published.date(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    pub fn published(&self) -> NaiveDateTime {
        self.published
    }

    /// Whole days until expiration, floored at zero.
    pub fn days_left(&self) -> i64 {
        (self.expiration - self.as_of).num_days().max(0)
    }

    pub fn status(&self) -> AdStatus {
        if self.as_of > self.expiration {
            AdStatus::Expired
        } else {
            AdStatus::DaysLeft(self.days_left())
        }
    }
}

impl fmt::Display for PrivateAd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PRIVATE AD: {}", self.text)?;
        writeln!(
            f,
            "Expires: {} ({})",
            self.expiration.format(DATE_FORMAT),
            self.status()
        )?;
        write!(f, "Published: {}", self.published.format(TIMESTAMP_FORMAT))
    }
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    title: String,
    ingredients: Vec<String>,
    published: NaiveDateTime,
}

impl Recipe {
    /// `ingredients` is a comma- or semicolon-separated list. Empty entries
    /// are dropped; an empty list is allowed.
    pub fn new(title: &str, ingredients: &str, clock: impl Clock) -> Result<Self, RecordError> {
        Ok(Self {
            title: title.trim().to_string(),
            ingredients: split_ingredients(ingredients),
            published: clock.now(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn published(&self) -> NaiveDateTime {
        self.published
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Mean ingredient name length in characters, `0.0` when there are none.
    pub fn avg_name_length(&self) -> f64 {
        if self.ingredients.is_empty() {
            return 0.0;
        }
        let total: usize = self.ingredients.iter().map(|i| i.chars().count()).sum();
        total as f64 / self.ingredients.len() as f64
    }

    pub fn complexity(&self) -> Complexity {
        Complexity::for_count(self.ingredient_count())
    }
}

fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RECIPE: {}", self.title)?;
        writeln!(
            f,
            "Ingredients ({}): {}",
            self.ingredient_count(),
            self.ingredients.join(", ")
        )?;
        writeln!(
            f,
            "Avg name length: {:.1} | Complexity: {}",
            self.avg_name_length(),
            self.complexity()
        )?;
        write!(f, "Published: {}", self.published.format(TIMESTAMP_FORMAT))
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A validated feed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    News(News),
    PrivateAd(PrivateAd),
    Recipe(Recipe),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::News(_) => RecordKind::News,
            Record::PrivateAd(_) => RecordKind::PrivateAd,
            Record::Recipe(_) => RecordKind::Recipe,
        }
    }

    pub fn published(&self) -> NaiveDateTime {
        match self {
            Record::News(r) => r.published(),
            Record::PrivateAd(r) => r.published(),
            Record::Recipe(r) => r.published(),
        }
    }

    /// Canonical multi-line text form, without the feed separator.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::News(r) => r.fmt(f),
            Record::PrivateAd(r) => r.fmt(f),
            Record::Recipe(r) => r.fmt(f),
        }
    }
}

impl From<News> for Record {
    fn from(r: News) -> Self {
        Record::News(r)
    }
}

impl From<PrivateAd> for Record {
    fn from(r: PrivateAd) -> Self {
        Record::PrivateAd(r)
    }
}

impl From<Recipe> for Record {
    fn from(r: Recipe) -> Self {
        Record::Recipe(r)
    }
}
