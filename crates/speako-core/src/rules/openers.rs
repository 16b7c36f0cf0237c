//! Consecutive sentences opening with the same weak connector.

use crate::tagger::TaggedDocument;
use crate::word_lists::WEAK_CONNECTORS;

use super::{Category, Issue, RuleOutcome, Severity};

const WEIGHT: u32 = 2;

/// Flag a sentence whose first word is a weak connector also opening the
/// previous sentence.
pub fn check(doc: &TaggedDocument<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let openers: Vec<_> = doc
        .sentences()
        .iter()
        .map(|s| doc.sentence_tokens(s).first())
        .collect();

    for pair in openers.windows(2) {
        let (Some(previous), Some(current)) = (pair[0], pair[1]) else {
            continue;
        };
        if current.lower == previous.lower && WEAK_CONNECTORS.contains(current.lower.as_str()) {
            let issue = Issue::at(
                current.span,
                Category::Clarity,
                Severity::Suggestion,
                format!(
                    "Another sentence starting with \"{}\"; vary how sentences begin",
                    current.text
                ),
            );
            outcome.push(issue, WEIGHT);
        }
    }
    outcome
}
