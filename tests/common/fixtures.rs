//! Static input corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of single blocks (no separator
//! lines). Well-formed blocks all dispatch under [`fixed_clock`]; malformed
//! blocks are each rejected for a different reason.
//!
//! [`fixed_clock`]: super::fixed_clock

/// Blocks that must dispatch successfully.
pub const CORPUS_WELL_FORMED: &[&str] = &[
    "TYPE: News\nTEXT: Market reaches all-time high\nCITY: Tokyo",
    "type: news\ntext: Bridge reopens after repairs\ncity: Porto",
    "TYPE: Ad\nTEXT: Selling vintage guitar\nEXPIRES: 2025-12-31",
    "TYPE: AD\nTEXT: Flat for rent\nEXPIRES: 2025-06-01",
    "TYPE: Recipe\nTITLE: Soup\nINGREDIENTS: water, salt",
    "TYPE: recipe\nTITLE: Chocolate Cake\nINGREDIENTS: flour; sugar; cocoa powder; eggs; butter; vanilla; salt",
    "TYPE: News\n\nTEXT: Blank lines inside a block are ignored\n\nCITY: Lima",
];

/// Blocks that must be rejected.
pub const CORPUS_MALFORMED: &[&str] = &[
    // line without a colon
    "TYPE: News\nTEXT: Hello\nthis line has no key",
    // no TYPE
    "TEXT: Orphan\nCITY: Nowhere",
    // unknown TYPE
    "TYPE: Poem\nTEXT: Roses are red",
    // missing required field
    "TYPE: Ad\nTEXT: Bike for sale",
    // unparseable date
    "TYPE: Ad\nTEXT: Bike for sale\nEXPIRES: next tuesday",
    // empty headline
    "TYPE: News\nTEXT:\nCITY: Oslo",
    // recipe missing ingredients
    "TYPE: Recipe\nTITLE: Mystery stew",
    // key with a digit
    "TYPE: News\nTEXT2: Hello\nCITY: Rome",
];

/// The two-block example from the file format documentation.
pub const EXAMPLE_INPUT: &str = "\
TYPE: News
TEXT: Market reaches all-time high
CITY: Tokyo
---
TYPE: Recipe
TITLE: Soup
INGREDIENTS: water, salt
---
";

/// Generate `n` well-formed news blocks with distinct headlines
/// (`Headline 0`, `Headline 1`, ...).
pub fn numbered_news(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("TYPE: News\nTEXT: Headline {i}\nCITY: City {}", i % 7))
        .collect()
}
