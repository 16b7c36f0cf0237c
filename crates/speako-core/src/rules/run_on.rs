//! Run-on sentences.

use crate::tagger::TaggedDocument;

use super::{Category, Issue, RuleOutcome, Severity};

const WEIGHT: u32 = 5;

/// Sentences with more words than this are run-ons.
pub const MAX_SENTENCE_WORDS: usize = 40;

/// Flag every sentence longer than [`MAX_SENTENCE_WORDS`].
pub fn check(doc: &TaggedDocument<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    for sentence in doc.sentences() {
        let words = sentence.tokens.len();
        if words > MAX_SENTENCE_WORDS {
            let issue = Issue::at(
                sentence.span,
                Category::Clarity,
                Severity::Warning,
                format!("This sentence runs to {words} words; break it up"),
            );
            outcome.push(issue, WEIGHT);
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn long_sentence() {
        let text = format!("Short one. {}.", words(41));
        let doc = TaggedDocument::new(&text);
        let outcome = check(&doc);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.deductions, 5);
        assert_eq!(outcome.issues[0].offset, 11);
        assert_eq!(outcome.issues[0].length, text.chars().count() - 11);
        assert!(outcome.issues[0].message.contains("41 words"));
    }

    #[test]
    fn exactly_at_limit() {
        let text = format!("{}.", words(40));
        assert!(check(&TaggedDocument::new(&text)).issues.is_empty());
    }

    #[test]
    fn unterminated_transcript() {
        let text = words(60);
        let doc = TaggedDocument::new(&text);
        assert_eq!(check(&doc).issues.len(), 1);
    }
}
