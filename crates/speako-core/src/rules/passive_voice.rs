//! Passive voice with an explicit agent.
//!
//! Matches a form of "be", an optional adverb, a past participle and "by"
//! ("was quickly approved by"). Agentless passives are left alone: in speech
//! they are usually deliberate ("I was born in Lyon").

use crate::tagger::{Step, Tag, TaggedDocument, TokenMatch};

use super::{Category, Issue, RuleOutcome, Severity};

const WEIGHT: u32 = 2;

const BE_FORMS: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being"];

const PATTERN: &[Step] = &[
    Step::OneOf(BE_FORMS),
    Step::Optional(Tag::Adverb),
    Step::Tag(Tag::Participle),
    Step::Word("by"),
];

/// Flag passive constructions that name their agent.
pub fn check(doc: &TaggedDocument<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    for m in doc.find_pattern(PATTERN) {
        // Stop before "by".
        let verb = doc.span_of(TokenMatch {
            first: m.first,
            last: m.last - 1,
        });
        let issue = Issue::at(
            verb,
            Category::Clarity,
            Severity::Suggestion,
            format!("Passive voice (\"{}\"); lead with who did it", doc.slice(verb)),
        );
        outcome.push(issue, WEIGHT);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_participle() {
        let doc = TaggedDocument::new("The decision was made by the team.");
        let outcome = check(&doc);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.deductions, 2);
        assert_eq!(outcome.issues[0].offset, 13);
        assert_eq!(outcome.issues[0].length, 8);
    }

    #[test]
    fn adverb_between() {
        let doc = TaggedDocument::new("It was quickly approved by the board.");
        let outcome = check(&doc);
        assert_eq!(outcome.issues.len(), 1);
        assert!(outcome.issues[0].message.contains("was quickly approved"));
    }

    #[test]
    fn perfect_passive() {
        let doc = TaggedDocument::new("The house has been painted by my father.");
        assert_eq!(check(&doc).issues.len(), 1);
    }

    #[test]
    fn no_agent_no_issue() {
        let doc = TaggedDocument::new("The report was written yesterday.");
        assert!(check(&doc).issues.is_empty());
    }

    #[test]
    fn adjective_is_not_passive() {
        let doc = TaggedDocument::new("I was tired by noon.");
        assert!(check(&doc).issues.is_empty());
    }
}
