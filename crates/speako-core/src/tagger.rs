//! Tagged transcript view used by the issue rules.
//!
//! [`TaggedDocument`] tokenizes the transcript once, assigns each token a
//! coarse part-of-speech [`Tag`] from closed lexicons and suffix heuristics,
//! groups tokens into sentences, and answers two kinds of queries:
//!
//! - token patterns ([`Step`] sequences such as "very" + adjective), matched
//!   within a sentence
//! - multi-word phrase lists ([`PhraseMatcher`]), matched against the raw text
//!   with word-boundary checks
//!
//! All offsets in results are `char` offsets into the original text, so issues
//! point at exactly what the speaker said.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::dictionaries::irregular_verbs::{is_adjective_exception, is_past_participle};
use crate::text::{self, WORD_PATTERN};
use crate::word_lists::WEAK_ADJECTIVES;

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Person, place, thing or idea (the fallback tag).
    Noun,
    /// Main verb.
    Verb,
    /// Forms of be/have/do and modal verbs.
    Auxiliary,
    /// Past participle ("written", "completed").
    Participle,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Article, demonstrative or possessive determiner.
    Determiner,
    /// Personal pronoun, including contracted forms ("i'm").
    Pronoun,
    /// Preposition.
    Preposition,
    /// Coordinating or subordinating conjunction.
    Conjunction,
    /// Hesitation sounds and discourse particles ("um", "oh").
    Interjection,
}

/// A run of characters in the original text. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Offset of the first character.
    pub start: usize,
    /// Offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Length in characters.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no characters.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A word token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token exactly as written.
    pub text: String,
    /// Lowercase form with typographic apostrophes folded.
    pub lower: String,
    /// Location in the original text.
    pub span: Span,
    /// Part-of-speech tag.
    pub tag: Tag,
    /// Index of the sentence containing this token.
    pub sentence: usize,
}

/// A sentence and the tokens it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Location in the original text, whitespace trimmed.
    pub span: Span,
    /// Indices into [`TaggedDocument::tokens`].
    pub tokens: Range<usize>,
}

/// One step of a token pattern.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Exactly this lowercase word.
    Word(&'static str),
    /// Any of these lowercase words.
    OneOf(&'static [&'static str]),
    /// Any token with this tag.
    Tag(Tag),
    /// Zero or one token with this tag.
    Optional(Tag),
    /// Exactly one token of any kind.
    Any,
}

impl Step {
    fn accepts(&self, token: &Token) -> bool {
        match self {
            Self::Word(w) => token.lower == *w,
            Self::OneOf(words) => words.contains(&token.lower.as_str()),
            Self::Tag(tag) | Self::Optional(tag) => token.tag == *tag,
            Self::Any => true,
        }
    }
}

/// A pattern match: token indices `first..=last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch {
    /// Index of the first matched token.
    pub first: usize,
    /// Index of the last matched token.
    pub last: usize,
}

/// An immutable, tagged view of one transcript.
#[derive(Debug, Clone)]
pub struct TaggedDocument<'a> {
    text: &'a str,
    char_starts: Vec<usize>,
    tokens: Vec<Token>,
    sentences: Vec<Sentence>,
}

impl<'a> TaggedDocument<'a> {
    /// Tokenize, tag and segment `text`.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn new(text: &'a str) -> Self {
        let char_starts: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        let to_char = |byte: usize| char_starts.partition_point(|&b| b < byte);

        let sentence_spans = text::split_sentence_spans(text);
        let mut tokens: Vec<Token> = Vec::new();
        let mut sentence = 0;

        for m in WORD_PATTERN.find_iter(text) {
            let span = Span {
                start: to_char(m.start()),
                end: to_char(m.end()),
            };
            while sentence + 1 < sentence_spans.len() && span.start >= sentence_spans[sentence].end
            {
                sentence += 1;
            }
            let lower = text::normalize_token(m.as_str());
            let prev = tokens.last().map(|t| t.tag);
            tokens.push(Token {
                text: m.as_str().to_string(),
                tag: tag_word(&lower, prev),
                lower,
                span,
                sentence,
            });
        }

        let sentences = sentence_spans
            .iter()
            .enumerate()
            .map(|(idx, s)| {
                let first = tokens.partition_point(|t| t.sentence < idx);
                let last = tokens.partition_point(|t| t.sentence <= idx);
                Sentence {
                    span: Span {
                        start: s.start,
                        end: s.end,
                    },
                    tokens: first..last,
                }
            })
            .collect();

        Self {
            text,
            char_starts,
            tokens,
            sentences,
        }
    }

    /// The original text.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.char_starts.len()
    }

    /// All word tokens in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of word tokens.
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    /// All sentences in order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Tokens of one sentence.
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        &self.tokens[sentence.tokens.clone()]
    }

    /// The span covering tokens `first..=last`.
    pub fn span_of(&self, m: TokenMatch) -> Span {
        Span {
            start: self.tokens[m.first].span.start,
            end: self.tokens[m.last].span.end,
        }
    }

    /// The text covered by a character span.
    pub fn slice(&self, span: Span) -> &'a str {
        let start = self.byte_offset(span.start);
        let end = self.byte_offset(span.end);
        &self.text[start..end]
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.char_starts
            .get(char_offset)
            .copied()
            .unwrap_or(self.text.len())
    }

    fn char_offset(&self, byte_offset: usize) -> usize {
        self.char_starts.partition_point(|&b| b < byte_offset)
    }

    /// Find non-overlapping matches of `pattern`, never crossing a sentence
    /// boundary.
    pub fn find_pattern(&self, pattern: &[Step]) -> Vec<TokenMatch> {
        let mut matches = Vec::new();
        for sentence in &self.sentences {
            let limit = sentence.tokens.end;
            let mut idx = sentence.tokens.start;
            while idx < limit {
                match self.match_at(pattern, idx, limit) {
                    Some(end) if end > idx => {
                        matches.push(TokenMatch {
                            first: idx,
                            last: end - 1,
                        });
                        idx = end;
                    }
                    _ => idx += 1,
                }
            }
        }
        matches
    }

    /// Returns the index one past the last matched token.
    fn match_at(&self, steps: &[Step], idx: usize, limit: usize) -> Option<usize> {
        let Some((step, rest)) = steps.split_first() else {
            return Some(idx);
        };
        let accepts = idx < limit && step.accepts(&self.tokens[idx]);
        match step {
            Step::Optional(_) => accepts
                .then(|| self.match_at(rest, idx + 1, limit))
                .flatten()
                .or_else(|| self.match_at(rest, idx, limit)),
            _ if accepts => self.match_at(rest, idx + 1, limit),
            _ => None,
        }
    }
}

/// A phrase found by a [`PhraseMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    /// The canonical (lowercase) phrase from the list.
    pub phrase: &'static str,
    /// Where it occurs.
    pub span: Span,
}

/// Case-insensitive whole-word matcher over a closed phrase list.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    automaton: AhoCorasick,
    /// Canonical phrase for each automaton pattern.
    canonical: Vec<&'static str>,
}

impl PhraseMatcher {
    /// Build a matcher. Phrases must be lowercase; apostrophes also match
    /// their typographic form.
    ///
    /// # Panics
    ///
    /// Panics if the automaton cannot be built, which only happens for
    /// pathologically large phrase lists.
    pub fn new(phrases: &[&'static str]) -> Self {
        let mut patterns = Vec::new();
        let mut canonical = Vec::new();
        for &phrase in phrases {
            patterns.push(phrase.to_string());
            canonical.push(phrase);
            if phrase.contains('\'') {
                patterns.push(phrase.replace('\'', "\u{2019}"));
                canonical.push(phrase);
            }
        }
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .expect("valid phrase patterns");
        Self {
            automaton,
            canonical,
        }
    }

    /// All whole-word occurrences in the document, in text order.
    pub fn find_all(&self, doc: &TaggedDocument<'_>) -> Vec<PhraseMatch> {
        let text = doc.text();
        self.automaton
            .find_iter(text)
            .filter(|m| is_word_boundary(text, m.start(), m.end()))
            .map(|m| PhraseMatch {
                phrase: self.canonical[m.pattern().as_usize()],
                span: Span {
                    start: doc.char_offset(m.start()),
                    end: doc.char_offset(m.end()),
                },
            })
            .collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '\u{2019}'
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

// -- Lexicons ---------------------------------------------------------------

static INTERJECTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "um", "uh", "uhm", "er", "erm", "ah", "hmm", "oh", "wow", "hey", "yeah", "ok", "okay",
        "yep", "nope",
    ]
    .into_iter()
    .collect()
});

static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its",
        "our", "their", "some", "any", "every", "each", "no", "both", "another",
    ]
    .into_iter()
    .collect()
});

static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "i'm", "i've",
        "i'll", "i'd", "you're", "he's", "she's", "it's", "we're", "they're", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "themselves", "someone",
        "everyone", "nobody", "nothing", "something", "everything", "anything",
    ]
    .into_iter()
    .collect()
});

static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "can", "could", "shall", "should", "may", "might",
        "must", "isn't", "aren't", "wasn't", "weren't", "don't", "doesn't", "didn't", "won't",
        "can't", "couldn't", "shouldn't", "wouldn't",
    ]
    .into_iter()
    .collect()
});

static PREPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "in", "on", "at", "to", "from", "by", "with", "for", "of", "about", "as", "into", "like",
        "through", "after", "over", "between", "out", "against", "during", "without", "before",
        "under", "around", "among", "up", "down", "off", "near", "across", "behind",
    ]
    .into_iter()
    .collect()
});

static CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "and", "but", "or", "so", "because", "if", "when", "while", "although", "though",
        "unless", "until", "since", "nor", "yet", "whereas",
    ]
    .into_iter()
    .collect()
});

static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "very", "too", "quite", "rather", "just", "also", "not", "never", "always", "often",
        "sometimes", "here", "there", "now", "then", "still", "already", "almost", "even",
        "super", "soon", "again", "once", "well", "maybe", "perhaps",
    ]
    .into_iter()
    .collect()
});

static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "new", "other", "great", "little", "young", "long", "high", "low", "same", "right",
        "wrong", "early", "late", "few", "many", "much", "own", "quick", "lazy", "brown", "red",
        "blue", "green", "black", "white", "free", "full", "true", "whole", "real", "best",
        "better", "worse", "worst",
    ]
    .into_iter()
    .collect()
});

/// Tag a lowercase word given the tag of the preceding token.
pub fn tag_word(lower: &str, prev: Option<Tag>) -> Tag {
    if INTERJECTIONS.contains(lower) {
        return Tag::Interjection;
    }
    if DETERMINERS.contains(lower) {
        return Tag::Determiner;
    }
    if PRONOUNS.contains(lower) {
        return Tag::Pronoun;
    }
    if AUXILIARIES.contains(lower) {
        return Tag::Auxiliary;
    }
    if PREPOSITIONS.contains(lower) {
        return Tag::Preposition;
    }
    if CONJUNCTIONS.contains(lower) {
        return Tag::Conjunction;
    }
    if ADVERBS.contains(lower) {
        return Tag::Adverb;
    }
    if ADJECTIVES.contains(lower) || WEAK_ADJECTIVES.contains_key(lower) {
        return Tag::Adjective;
    }
    if is_adjective_exception(lower) {
        return Tag::Adjective;
    }
    if is_past_participle(lower) {
        return Tag::Participle;
    }
    tag_by_suffix(lower, prev)
}

fn tag_by_suffix(lower: &str, prev: Option<Tag>) -> Tag {
    const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ment", "ness", "ity", "ism", "ance", "ence"];
    const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical"];

    if lower.len() > 4 && lower.ends_with("ly") {
        return Tag::Adverb;
    }
    if lower.len() > 5 && lower.ends_with("ing") {
        return Tag::Verb;
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Tag::Noun;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Tag::Adjective;
    }
    match prev {
        Some(Tag::Pronoun | Tag::Auxiliary) => Tag::Verb,
        _ => Tag::Noun,
    }
}
