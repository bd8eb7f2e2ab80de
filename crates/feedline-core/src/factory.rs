//! Record factories for callers that already hold the raw inputs.
//!
//! Each factory validates, constructs and renders in one call, going through
//! the same constructors the dispatcher uses.

use crate::clock::Clock;
use crate::error::RecordError;
use crate::record::{News, PrivateAd, Recipe};

pub fn publish_news(clock: impl Clock, text: &str, city: &str) -> Result<String, RecordError> {
    Ok(News::new(text, city, clock)?.to_string())
}

/// `expires` is `YYYY-MM-DD`.
pub fn publish_ad(clock: impl Clock, text: &str, expires: &str) -> Result<String, RecordError> {
    Ok(PrivateAd::new(text, expires, clock)?.to_string())
}

/// `ingredients` is comma- or semicolon-separated.
pub fn publish_recipe(
    clock: impl Clock,
    title: &str,
    ingredients: &str,
) -> Result<String, RecordError> {
    Ok(Recipe::new(title, ingredients, clock)?.to_string())
}
