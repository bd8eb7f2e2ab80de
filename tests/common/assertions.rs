//! Domain-specific assertion helpers for feedline harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* ingestion invariant was violated.

use std::path::Path;

use feedline::{FileOutcome, SEPARATOR};

// ---------------------------------------------------------------------------
// Outcome assertions
// ---------------------------------------------------------------------------

/// Assert the three counters of a [`FileOutcome`].
///
/// ```rust
/// assert_counts!(outcome, success: 2, failed: 0, total: 2);
/// ```
#[macro_export]
macro_rules! assert_counts {
    ($outcome:expr, success: $s:expr, failed: $f:expr, total: $t:expr) => {{
        let outcome: &feedline::FileOutcome = &$outcome;
        let actual = (outcome.success_count, outcome.failed_count, outcome.total_blocks);
        let expected: (usize, usize, usize) = ($s, $f, $t);
        if actual != expected {
            panic!(
                "assert_counts! failed:\n  expected (success, failed, total): {:?}\n  actual:                            {:?}\n  rejected: {:#?}",
                expected, actual, outcome.rejected
            );
        }
    }};
}

/// Every block is either committed or rejected, never dropped.
pub fn assert_accounted(outcome: &FileOutcome) {
    assert_eq!(
        outcome.success_count + outcome.failed_count,
        outcome.total_blocks,
        "blocks went missing from the count: {outcome:#?}"
    );
    assert_eq!(
        outcome.rejected.len(),
        outcome.failed_count,
        "every failed block must carry a rejection"
    );
}

// ---------------------------------------------------------------------------
// Feed log helpers
// ---------------------------------------------------------------------------

/// Split a feed log into its entries. A missing file has no entries.
pub fn feed_entries(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            assert!(
                content.is_empty() || content.ends_with(SEPARATOR),
                "feed log must end with a separator: {content:?}"
            );
            content
                .split(SEPARATOR)
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect()
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => panic!("cannot read feed log {}: {e}", path.display()),
    }
}

/// First line of every entry, in feed order.
pub fn headlines(entries: &[String]) -> Vec<&str> {
    entries
        .iter()
        .map(|e| e.lines().next().unwrap_or_default())
        .collect()
}
