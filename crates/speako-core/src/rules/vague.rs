//! Placeholder nouns and overused intensifiers.

use crate::tagger::TaggedDocument;
use crate::word_lists::{VAGUE_INTENSIFIERS, VAGUE_NOUNS};

use super::{Category, Issue, RuleOutcome, Severity};

const WEIGHT: u32 = 1;

/// Flag "stuff"-style nouns and "really"-style intensifiers.
pub fn check(doc: &TaggedDocument<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    for token in doc.tokens() {
        let message = if VAGUE_NOUNS.contains(token.lower.as_str()) {
            format!("\"{}\" is vague; name the specific thing", token.text)
        } else if VAGUE_INTENSIFIERS.contains(token.lower.as_str()) {
            format!(
                "\"{}\" is an overused intensifier; cut it or pick a precise word",
                token.text
            )
        } else {
            continue;
        };
        outcome.push(
            Issue::at(token.span, Category::Vocabulary, Severity::Suggestion, message),
            WEIGHT,
        );
    }
    outcome
}
