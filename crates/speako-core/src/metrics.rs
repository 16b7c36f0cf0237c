//! Lexical and structural metrics.
//!
//! Counts words, distinct words and complex words, measures average sentence
//! length, and folds in the CEFR estimate and, when word timings are present,
//! pronunciation and speaking rate.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cefr::{self, CefrLevel};
use crate::dictionaries::common_words::is_common_word;
use crate::pronunciation;
use crate::rules;
use crate::text;
use crate::transcript::Word;
use crate::word_lists::ACADEMIC_SUFFIXES;

/// Words of this many characters or more are complex unless common.
pub const COMPLEX_WORD_MIN_CHARS: usize = 10;

/// Metrics for one transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Metrics {
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of characters in the text.
    pub character_count: usize,
    /// Number of distinct word tokens, case-insensitive.
    pub unique_words: usize,
    /// Number of complex word tokens.
    pub complex_words: usize,
    /// Number of sentences (terminator split, blanks dropped).
    pub sentence_count: usize,
    /// Words per sentence; 0 when there are no sentences.
    pub average_sentence_length: f64,
    /// Heuristic CEFR level.
    pub cefr_level: CefrLevel,
    /// Mean ASR word confidence (0-100), when word timings were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation_score: Option<u8>,
    /// Words per minute, when word timings were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaking_rate_wpm: Option<f64>,
}

/// Whether a lowercase token counts as complex vocabulary.
pub fn is_complex_word(word: &str) -> bool {
    if is_common_word(word) {
        return false;
    }
    word.chars().count() >= COMPLEX_WORD_MIN_CHARS
        || ACADEMIC_SUFFIXES.iter().any(|s| word.ends_with(s))
}

/// Compute metrics for `text`, running the issue rules to obtain the clarity
/// score the CEFR estimate needs.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn compute_metrics(text: &str, words: Option<&[Word]>) -> Metrics {
    let clarity = rules::analyze_text(text).clarity_score;
    metrics_with_clarity(text, words, clarity)
}

/// Compute metrics given an already known clarity score.
pub fn metrics_with_clarity(text: &str, words: Option<&[Word]>, clarity_score: u8) -> Metrics {
    let tokens = text::extract_words(text);
    let word_count = tokens.len();
    let unique_words = tokens.iter().collect::<HashSet<_>>().len();
    let complex_words = tokens.iter().filter(|w| is_complex_word(w)).count();
    let sentence_count = text::count_terminated_sentences(text);
    let average_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        word_count as f64 / sentence_count as f64
    };

    let words = words.filter(|w| !w.is_empty());
    let mut metrics = Metrics {
        word_count,
        character_count: text.chars().count(),
        unique_words,
        complex_words,
        sentence_count,
        average_sentence_length,
        cefr_level: CefrLevel::A1,
        pronunciation_score: words.and_then(pronunciation::pronunciation_score),
        speaking_rate_wpm: words.and_then(pronunciation::speaking_rate_wpm),
    };
    metrics.cefr_level = cefr::estimate_cefr(&metrics, clarity_score);

    tracing::debug!(
        word_count,
        complex_words,
        sentence_count,
        level = %metrics.cefr_level,
        "metrics computed"
    );
    metrics
}
