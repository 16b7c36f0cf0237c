//! Hedging phrases that undercut the speaker's confidence.

use std::sync::LazyLock;

use crate::tagger::{PhraseMatcher, TaggedDocument};
use crate::word_lists::HEDGING_PHRASES;

use super::{Category, Issue, RuleOutcome, Severity};

const WEIGHT: u32 = 3;

static MATCHER: LazyLock<PhraseMatcher> = LazyLock::new(|| PhraseMatcher::new(HEDGING_PHRASES));

/// Flag each hedge.
pub fn check(doc: &TaggedDocument<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    for m in MATCHER.find_all(doc) {
        let issue = Issue::at(
            m.span,
            Category::Confidence,
            Severity::Warning,
            format!("\"{}\" softens your point; state it directly", doc.slice(m.span)),
        );
        outcome.push(issue, WEIGHT);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_hedges() {
        let doc = TaggedDocument::new("I think it works. Maybe it's kind of slow.");
        let outcome = check(&doc);
        assert_eq!(outcome.issues.len(), 3);
        assert_eq!(outcome.deductions, 9);
        assert_eq!(outcome.issues[0].offset, 0);
        assert_eq!(outcome.issues[0].length, 7);
        assert!(outcome.issues[1].message.contains("Maybe"));
    }

    #[test]
    fn typographic_apostrophe() {
        let doc = TaggedDocument::new("I\u{2019}m not sure about that.");
        assert_eq!(check(&doc).issues.len(), 1);
    }

    #[test]
    fn no_partial_words() {
        let doc = TaggedDocument::new("I thinker, probablyish.");
        assert!(check(&doc).issues.is_empty());
    }
}
