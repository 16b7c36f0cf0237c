//! "very" + weak adjective.

use crate::tagger::{Step, Tag, TaggedDocument};
use crate::word_lists::WEAK_ADJECTIVES;

use super::{Category, Issue, RuleOutcome, Severity};

const WEIGHT: u32 = 1;

const PATTERN: &[Step] = &[Step::Word("very"), Step::Tag(Tag::Adjective)];

/// Flag "very" propping up an adjective that has a stronger single-word
/// alternative.
pub fn check(doc: &TaggedDocument<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    for m in doc.find_pattern(PATTERN) {
        let adjective = &doc.tokens()[m.last];
        let Some(stronger) = WEAK_ADJECTIVES.get(adjective.lower.as_str()) else {
            continue;
        };
        let span = doc.span_of(m);
        let issue = Issue::at(
            span,
            Category::Vocabulary,
            Severity::Suggestion,
            format!("\"{}\" is weak; use a stronger adjective", doc.slice(span)),
        )
        .with_replacement(*stronger);
        outcome.push(issue, WEIGHT);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn very_good() {
        let doc = TaggedDocument::new("The food was very good.");
        let outcome = check(&doc);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.deductions, 1);
        let issue = &outcome.issues[0];
        assert_eq!(issue.offset, 13);
        assert_eq!(issue.length, 9);
        assert_eq!(issue.replacement.as_deref(), Some("excellent / superb"));
    }

    #[test]
    fn case_insensitive() {
        let doc = TaggedDocument::new("VERY Tired today.");
        let outcome = check(&doc);
        assert_eq!(
            outcome.issues[0].replacement.as_deref(),
            Some("exhausted / drained")
        );
        assert!(outcome.issues[0].message.contains("VERY Tired"));
    }

    #[test]
    fn adjective_not_on_list() {
        let doc = TaggedDocument::new("It was very new and very quickly done.");
        assert!(check(&doc).issues.is_empty());
    }
}
