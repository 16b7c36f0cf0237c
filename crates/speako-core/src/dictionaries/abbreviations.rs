//! Abbreviation dictionary for sentence boundary detection.
//!
//! Limited to forms that survive speech-to-text output. Short spoken words
//! that double as abbreviations ("no", "in", "sun") are left out so that
//! "I said no." still ends a sentence.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations that should not trigger sentence breaks.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "hon", "esq", "phd", "capt",
        "col", "gen", "lt", "maj", "sgt", "gov", "pres",
    ]);

    // Academic degrees
    set.extend(["b.a", "b.s", "m.a", "m.s", "m.b.a", "ph.d", "m.d"]);

    // Common abbreviations
    set.extend(["etc", "vs", "e.g", "i.e", "cf", "viz", "n.b", "p.s"]);

    // Time and places
    set.extend([
        "a.m", "p.m", "b.c", "a.d", "jan", "feb", "aug", "sept", "oct", "nov", "dec", "st",
        "ave", "blvd", "apt", "dept", "u.s", "u.k", "u.s.a", "e.u",
    ]);

    // Business and organizations
    set.extend(["inc", "corp", "ltd", "llc", "co", "bros", "intl"]);

    // Measurement
    set.extend(["approx", "avg", "kg", "km", "mph", "lbs", "oz"]);

    set
});

/// Check if a word is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    let trimmed = word_lower.trim_matches('.');
    ABBREVIATIONS.contains(trimmed)
}
