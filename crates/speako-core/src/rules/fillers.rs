//! Filler words ("um", "you know").
//!
//! Every filler costs clarity points. A single document-level warning is
//! raised once fillers make up more than 5% of a long enough transcript.

use std::sync::LazyLock;

use crate::tagger::{PhraseMatcher, TaggedDocument};
use crate::word_lists::FILLER_PHRASES;

use super::{Category, Issue, RuleOutcome, Severity};

const WEIGHT: u32 = 2;

/// Transcripts of this many words or fewer never get the density warning.
pub const MIN_WORDS_FOR_DENSITY: usize = 10;

/// Filler share of all words above which the warning is raised.
pub const MAX_FILLER_DENSITY: f64 = 0.05;

static MATCHER: LazyLock<PhraseMatcher> = LazyLock::new(|| PhraseMatcher::new(FILLER_PHRASES));

/// Count fillers and warn when they are too dense.
pub fn check(doc: &TaggedDocument<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let fillers = MATCHER.find_all(doc).len();
    let filler_weight = u32::try_from(fillers).unwrap_or(u32::MAX);
    outcome.deduct(filler_weight.saturating_mul(WEIGHT));

    let word_count = doc.word_count();
    if word_count > MIN_WORDS_FOR_DENSITY {
        let density = fillers as f64 / word_count as f64;
        if density > MAX_FILLER_DENSITY {
            outcome.issues.push(Issue::document(
                Category::Clarity,
                Severity::Warning,
                format!(
                    "{fillers} filler words ({:.0}% of your words); pause silently instead",
                    density * 100.0
                ),
            ));
        }
    }
    outcome
}
