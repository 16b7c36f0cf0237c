//! Text processing utilities.
//!
//! Provides word extraction and two sentence splitters: an offset-preserving
//! splitter with abbreviation and decimal awareness (used by the tagger), and
//! the plain terminator split used for average sentence length.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;

/// Alphabetic word runs, keeping internal apostrophes ("don't", "it's").
pub(crate) static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Alphabetic}+(?:['\u{2019}]\p{Alphabetic}+)*").expect("valid regex")
});

/// A sentence located in the original text.
///
/// Offsets count `char`s, `end` is exclusive, surrounding whitespace is
/// excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSpan {
    /// Offset of the first character.
    pub start: usize,
    /// Offset one past the last character.
    pub end: usize,
}

impl SentenceSpan {
    /// Length in characters.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no characters.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Lowercase a word token and fold typographic apostrophes to `'`.
pub fn normalize_token(token: &str) -> String {
    token.to_lowercase().replace('\u{2019}', "'")
}

/// Extract lowercase alphabetic word tokens from text.
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| normalize_token(m.as_str()))
        .collect()
}

/// Count sentences by splitting on `.`, `!` and `?` and discarding blank
/// fragments.
pub fn count_terminated_sentences(text: &str) -> usize {
    text.split(is_sentence_terminator)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Split text into sentence spans with abbreviation and decimal awareness.
///
/// Uses a character-by-character scan with context-based boundary detection.
/// Fragments without any alphanumeric character (stray punctuation) are
/// dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentence_spans(text: &str) -> Vec<SentenceSpan> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut start = 0;

    for (i, &ch) in chars.iter().enumerate() {
        if !is_sentence_terminator(ch) {
            continue;
        }
        let context = extract_context(&chars, i);
        if is_sentence_boundary(&context) {
            push_trimmed(&chars, start, i + 1, &mut spans);
            start = i + 1;
        }
    }

    // Remaining text
    push_trimmed(&chars, start, chars.len(), &mut spans);

    spans
}

fn push_trimmed(chars: &[char], start: usize, end: usize, spans: &mut Vec<SentenceSpan>) {
    let mut s = start;
    let mut e = end;
    while s < e && chars[s].is_whitespace() {
        s += 1;
    }
    while e > s && chars[e - 1].is_whitespace() {
        e -= 1;
    }
    if chars[s..e].iter().any(|c| c.is_alphanumeric()) {
        spans.push(SentenceSpan { start: s, end: e });
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    word_before: String,
    char_before: Option<char>,
    next_char: Option<char>,
}

fn extract_context(chars: &[char], pos: usize) -> SentenceContext {
    SentenceContext {
        punctuation: chars[pos],
        word_before: get_word_before(chars, pos),
        char_before: pos.checked_sub(1).map(|p| chars[p]),
        next_char: chars.get(pos + 1).copied(),
    }
}

fn get_word_before(chars: &[char], pos: usize) -> String {
    let mut word_chars = Vec::new();
    let mut i = pos;

    while i > 0 {
        i -= 1;
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
    }

    word_chars.reverse();
    word_chars.iter().collect()
}

fn is_sentence_boundary(context: &SentenceContext) -> bool {
    // Runs of terminators ("?!", "...") end on their last character.
    if context.next_char.is_some_and(is_sentence_terminator) {
        return false;
    }

    if context.punctuation != '.' {
        return true;
    }

    // Ellipsis reads as a pause, not a full stop
    if context.char_before == Some('.') {
        return false;
    }

    // Digit on both sides = decimal number (e.g., "3.14")
    if context.next_char.is_some_and(|c| c.is_ascii_digit())
        && context.char_before.is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }

    // Letter directly after the period = inside a token ("e.g", "u.s")
    if context.next_char.is_some_and(char::is_alphabetic) {
        return false;
    }

    !is_likely_abbreviation(&context.word_before)
}

fn is_likely_abbreviation(word: &str) -> bool {
    let word_clean = word.trim_end_matches('.');
    if word_clean.is_empty() {
        return false;
    }
    if is_abbreviation(word_clean) {
        return true;
    }
    // Single uppercase letter other than the pronoun = likely an initial
    let mut letters = word_clean.chars();
    matches!((letters.next(), letters.next()), (Some(c), None) if c.is_uppercase() && c != 'I')
}
