use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::{Regex, RegexSet};

/// Closed vocabulary of topic terms.
///
/// "ai" is shorter than the four-letter minimum and never matches; it stays
/// so the list reads the same everywhere it is documented.
pub const VOCABULARY: &[&str] = &[
    "ai",
    "model",
    "token",
    "context",
    "thought",
    "brainstorm",
    "memory",
    "query",
    "response",
    "logic",
    "plan",
    "goal",
    "system",
];

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b[a-zA-Z]{4,}\b").unwrap();
    static ref SELF_REFERENCE: RegexSet = RegexSet::new([
        r"as i.*mentioned",
        r"you.*asked",
        r"earlier",
        r"previously",
        r"in the.*conversation",
        r"we.*talked",
    ])
    .unwrap();
}

/// Vocabulary terms found in `text`, deduplicated and sorted
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();

    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| VOCABULARY.contains(word))
        .map(str::to_string)
        .collect()
}

/// Whether `text` points back at earlier turns ("as I mentioned", "earlier", ...)
pub fn detect_self_reference(text: &str) -> bool {
    SELF_REFERENCE.is_match(&text.to_lowercase())
}
