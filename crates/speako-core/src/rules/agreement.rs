//! Pronoun subject-verb agreement and double negatives.
//!
//! Informational only: these issues cost no clarity points.

use crate::tagger::{Span, Step, Tag, TaggedDocument, TokenMatch};

use super::{Category, Issue, RuleOutcome, Severity};

const WEIGHT: u32 = 0;

const SINGULAR_PLURAL: &[Step] = &[
    Step::OneOf(&["he", "she", "it"]),
    Step::OneOf(&["are", "were", "have"]),
];

const PLURAL_SINGULAR: &[Step] = &[
    Step::OneOf(&["they", "we", "you"]),
    Step::OneOf(&["is", "was", "has"]),
];

const DOUBLE_NEGATIVE: &[Step] = &[
    Step::OneOf(&[
        "don't", "doesn't", "didn't", "won't", "can't", "couldn't", "shouldn't", "wouldn't",
    ]),
    Step::Any,
    Step::OneOf(&["no", "nothing", "nobody", "never", "nowhere", "neither"]),
];

/// Words that introduce a subjunctive "were" ("if it were", "I wish he were").
const SUBJUNCTIVE_MARKERS: &[&str] = &["if", "wish", "wished", "as", "though"];

/// Verbs that take "no" as a quoted answer rather than a negative object.
const REPORTING_VERBS: &[&str] = &["say", "says", "said", "answer", "reply"];

/// Flag agreement errors and double negatives.
pub fn check(doc: &TaggedDocument<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    let checks = [
        (SINGULAR_PLURAL, "singular subject with plural verb"),
        (PLURAL_SINGULAR, "plural subject with singular verb"),
    ];
    for (pattern, problem) in checks {
        for m in doc.find_pattern(pattern) {
            if is_question_inversion(doc, m) || is_subjunctive(doc, m) {
                continue;
            }
            let span = doc.span_of(m);
            let issue = Issue::at(
                span,
                Category::Grammar,
                Severity::Warning,
                format!("\"{}\": {problem}", doc.slice(span)),
            );
            outcome.push(issue, WEIGHT);
        }
    }

    for m in doc.find_pattern(DOUBLE_NEGATIVE) {
        if !negates_verb_object(doc, m) {
            continue;
        }
        let span = doc.span_of(m);
        let issue = Issue::at(
            span,
            Category::Grammar,
            Severity::Warning,
            format!("Double negative (\"{}\")", doc.slice(span)),
        );
        outcome.push(issue, WEIGHT);
    }

    outcome
}

/// "Does it have", "Will you have": an auxiliary right before the pronoun
/// means the pronoun is not the subject of the following verb.
fn is_question_inversion(doc: &TaggedDocument<'_>, m: TokenMatch) -> bool {
    let tokens = doc.tokens();
    m.first
        .checked_sub(1)
        .map(|i| &tokens[i])
        .is_some_and(|prev| {
            prev.sentence == tokens[m.first].sentence && prev.tag == Tag::Auxiliary
        })
}

fn is_subjunctive(doc: &TaggedDocument<'_>, m: TokenMatch) -> bool {
    let tokens = doc.tokens();
    tokens[m.last].lower == "were"
        && m.first
            .checked_sub(1)
            .map(|i| &tokens[i])
            .is_some_and(|prev| {
                prev.sentence == tokens[m.first].sentence
                    && SUBJUNCTIVE_MARKERS.contains(&prev.lower.as_str())
            })
}

/// The middle word must be a verb that the negative word directly follows,
/// with no punctuation between them ("didn't do nothing", not "don't know, no").
fn negates_verb_object(doc: &TaggedDocument<'_>, m: TokenMatch) -> bool {
    let tokens = doc.tokens();
    let verb = &tokens[m.first + 1];
    let negative = &tokens[m.last];
    let gap = Span {
        start: verb.span.end,
        end: negative.span.start,
    };
    matches!(verb.tag, Tag::Verb | Tag::Auxiliary)
        && !REPORTING_VERBS.contains(&verb.lower.as_str())
        && doc.slice(gap).chars().all(char::is_whitespace)
}
