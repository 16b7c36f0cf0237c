//! Word Error Rate.
//!
//! Both strings are normalized (case and punctuation removed) before a
//! word-level Levenshtein alignment. WER is the edit count divided by the
//! number of reference words, so it can exceed 1 when the hypothesis has
//! many insertions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Edit counts from aligning a hypothesis against a reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WerBreakdown {
    /// Reference words replaced by a different word.
    pub substitutions: usize,
    /// Reference words missing from the hypothesis.
    pub deletions: usize,
    /// Hypothesis words with no reference counterpart.
    pub insertions: usize,
    /// Words in the normalized reference.
    pub reference_words: usize,
    /// Words in the normalized hypothesis.
    pub hypothesis_words: usize,
    /// (S + D + I) / N.
    pub wer: f64,
}

impl WerBreakdown {
    /// Total edits.
    pub const fn errors(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }
}

/// Lowercase, drop everything except letters, digits and whitespace, then
/// collapse whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Word Error Rate of `hypothesis` against `reference`.
///
/// Two empty strings score 0; an empty reference against a non-empty
/// hypothesis scores 1.
pub fn wer(reference: &str, hypothesis: &str) -> f64 {
    align(reference, hypothesis).wer
}

/// Align two transcripts and count each kind of edit.
#[tracing::instrument(
    skip_all,
    fields(reference_len = reference.len(), hypothesis_len = hypothesis.len())
)]
pub fn align(reference: &str, hypothesis: &str) -> WerBreakdown {
    let reference = normalize(reference);
    let hypothesis = normalize(hypothesis);
    let r: Vec<&str> = reference.split_whitespace().collect();
    let h: Vec<&str> = hypothesis.split_whitespace().collect();

    let (substitutions, deletions, insertions) = edit_counts(&r, &h);
    let errors = substitutions + deletions + insertions;
    let wer = match (r.len(), errors) {
        (0, 0) => 0.0,
        (0, _) => 1.0,
        (n, e) => e as f64 / n as f64,
    };

    WerBreakdown {
        substitutions,
        deletions,
        insertions,
        reference_words: r.len(),
        hypothesis_words: h.len(),
        wer,
    }
}

/// Fill the Levenshtein matrix and walk back from the corner.
fn edit_counts(r: &[&str], h: &[&str]) -> (usize, usize, usize) {
    let cols = h.len() + 1;
    let mut d = vec![0_usize; (r.len() + 1) * cols];
    let at = |i: usize, j: usize| i * cols + j;

    for i in 0..=r.len() {
        d[at(i, 0)] = i;
    }
    for j in 0..=h.len() {
        d[at(0, j)] = j;
    }
    for i in 1..=r.len() {
        for j in 1..=h.len() {
            let cost = usize::from(r[i - 1] != h[j - 1]);
            d[at(i, j)] = (d[at(i - 1, j - 1)] + cost)
                .min(d[at(i - 1, j)] + 1)
                .min(d[at(i, j - 1)] + 1);
        }
    }

    let (mut subs, mut dels, mut ins) = (0, 0, 0);
    let (mut i, mut j) = (r.len(), h.len());
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let cost = usize::from(r[i - 1] != h[j - 1]);
            if d[at(i, j)] == d[at(i - 1, j - 1)] + cost {
                subs += cost;
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && d[at(i, j)] == d[at(i - 1, j)] + 1 {
            dels += 1;
            i -= 1;
        } else {
            ins += 1;
            j -= 1;
        }
    }
    (subs, dels, ins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical() {
        assert_eq!(wer("the cat sat", "the cat sat"), 0.0);
    }

    #[test]
    fn empty_cases() {
        assert_eq!(wer("", ""), 0.0);
        assert_eq!(wer("", "hello"), 1.0);
        assert_eq!(wer("hello world", ""), 1.0);
        assert_eq!(wer("?!", "..."), 0.0);
    }

    #[test]
    fn case_and_punctuation_invariant() {
        assert_eq!(wer("Hello, World!", "hello world"), 0.0);
        assert_eq!(wer("It's fine.", "its FINE"), 0.0);
    }

    #[test]
    fn one_substitution() {
        let b = align("the cat sat on the mat", "the cat sit on the mat");
        assert_eq!((b.substitutions, b.deletions, b.insertions), (1, 0, 0));
        assert!((b.wer - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn deletion_and_insertion() {
        let b = align("a b c d", "a c d e f");
        assert_eq!(b.deletions, 1);
        assert_eq!(b.insertions, 2);
        assert_eq!(b.substitutions, 0);
        assert_eq!(b.errors(), 3);
        assert_eq!(b.reference_words, 4);
        assert_eq!(b.hypothesis_words, 5);
        assert!((b.wer - 0.75).abs() < 1e-12);
    }

    #[test]
    fn can_exceed_one() {
        assert!(wer("hi", "oh hi there friend") > 1.0);
    }

    #[test]
    fn normalize_is_idempotent() {
        for text in ["  Hello,   WORLD!! ", "Ça va? Très bien.", "", "a\tb\nc"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
        }
        assert_eq!(normalize("  Hello,   WORLD!! "), "hello world");
        assert_eq!(normalize("a\tb\nc"), "a b c");
    }
}
