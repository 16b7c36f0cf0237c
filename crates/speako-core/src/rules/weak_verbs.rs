//! Overused verbs ("get", "put") and "find out".
//!
//! Informational only: these issues cost no clarity points.

use crate::tagger::{Step, TaggedDocument};
use crate::word_lists::{FIND_FORMS, FIND_OUT_REPLACEMENT, WEAK_VERBS};

use super::{Category, Issue, RuleOutcome, Severity};

const WEIGHT: u32 = 0;

const FIND_OUT: &[Step] = &[Step::OneOf(FIND_FORMS), Step::Word("out")];

/// Flag weak verbs and suggest more precise ones.
pub fn check(doc: &TaggedDocument<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    for token in doc.tokens() {
        if let Some((base, replacement)) = WEAK_VERBS.get(token.lower.as_str()) {
            let issue = Issue::at(
                token.span,
                Category::Vocabulary,
                Severity::Suggestion,
                format!("\"{}\" is a weak verb ({base}); be more specific", token.text),
            )
            .with_replacement(*replacement);
            outcome.push(issue, WEIGHT);
        }
    }

    for m in doc.find_pattern(FIND_OUT) {
        let span = doc.span_of(m);
        let issue = Issue::at(
            span,
            Category::Vocabulary,
            Severity::Suggestion,
            format!("\"{}\" is informal; use a single precise verb", doc.slice(span)),
        )
        .with_replacement(FIND_OUT_REPLACEMENT);
        outcome.push(issue, WEIGHT);
    }

    outcome
}
