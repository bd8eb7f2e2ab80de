//! Test builders: ergonomic constructors for input blocks, input files and
//! ingestors.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use feedline::{FeedLog, FixedClock, Ingestor};

use super::assertions::feed_entries;

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// The date every harness treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// 2025-06-01 09:30:05.
pub fn fixed_clock() -> FixedClock {
    FixedClock::at(today(), 9, 30, 5).unwrap()
}

/// `today()` shifted by `days`, formatted `YYYY-MM-DD`.
pub fn date_from_today(days: i64) -> String {
    (today() + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

// ---------------------------------------------------------------------------
// BlockBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one input block.
///
/// # Example
///
/// ```rust
/// let block = BlockBuilder::news("Market reaches all-time high", "Tokyo").build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockBuilder {
    lines: Vec<String>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn news(text: &str, city: &str) -> Self {
        Self::new()
            .field("TYPE", "News")
            .field("TEXT", text)
            .field("CITY", city)
    }

    pub fn ad(text: &str, expires: &str) -> Self {
        Self::new()
            .field("TYPE", "Ad")
            .field("TEXT", text)
            .field("EXPIRES", expires)
    }

    pub fn recipe(title: &str, ingredients: &str) -> Self {
        Self::new()
            .field("TYPE", "Recipe")
            .field("TITLE", title)
            .field("INGREDIENTS", ingredients)
    }

    pub fn field(self, key: &str, value: &str) -> Self {
        self.line(format!("{key}: {value}"))
    }

    /// Append a raw line verbatim (use for malformed content).
    pub fn line(mut self, raw: impl Into<String>) -> Self {
        self.lines.push(raw.into());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

// ---------------------------------------------------------------------------
// InputFile
// ---------------------------------------------------------------------------

/// Joins blocks with `---` separator lines.
#[derive(Debug, Clone)]
pub struct InputFile {
    blocks: Vec<String>,
    trailing_separator: bool,
}

impl InputFile {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            trailing_separator: true,
        }
    }

    pub fn blocks<I, S>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks.extend(blocks.into_iter().map(Into::into));
        self
    }

    pub fn block(mut self, block: impl Into<String>) -> Self {
        self.blocks.push(block.into());
        self
    }

    pub fn without_trailing_separator(mut self) -> Self {
        self.trailing_separator = false;
        self
    }

    pub fn render(&self) -> String {
        let mut out = self.blocks.join("\n---\n");
        if self.trailing_separator && !self.blocks.is_empty() {
            out.push_str("\n---\n");
        }
        out
    }

    /// Write to `dir/name` and return the path.
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.render()).unwrap();
        path
    }
}

impl Default for InputFile {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Sandbox
// ---------------------------------------------------------------------------

/// A temp directory with an `inbox/` folder and a feed log path.
pub struct Sandbox {
    pub dir: tempfile::TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("inbox")).unwrap();
        Self { dir }
    }

    pub fn inbox(&self) -> PathBuf {
        self.dir.path().join("inbox")
    }

    pub fn feed_path(&self) -> PathBuf {
        self.dir.path().join("feed.txt")
    }

    pub fn ingestor(&self) -> Ingestor<FixedClock> {
        Ingestor::with_clock(FeedLog::new(self.feed_path()), fixed_clock())
    }

    /// Write an input file into the inbox.
    pub fn drop_file(&self, name: &str, input: &InputFile) -> PathBuf {
        input.write_to(&self.inbox(), name)
    }

    /// Feed log entries, or an empty list if nothing was ever written.
    pub fn feed_entries(&self) -> Vec<String> {
        feed_entries(&self.feed_path())
    }
}
