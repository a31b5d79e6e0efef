//! Location extraction from the original-case report text.

use crate::models::LOCATION_NOT_SPECIFIED;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tried in order; the first pattern that matches anywhere wins
static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"in\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
        r"at\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
        r"near\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// Find a capitalized place name introduced by "in", "at" or "near".
///
/// The prepositions are matched without word boundaries, so "rain Kochi"
/// yields "Kochi" through the "in" pattern.
pub fn extract_location(text: &str) -> Option<String> {
    LOCATION_PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Like [`extract_location`] but substitutes the "not specified" sentinel
pub fn location_or_sentinel(text: &str) -> String {
    extract_location(text).unwrap_or_else(|| LOCATION_NOT_SPECIFIED.to_string())
}
