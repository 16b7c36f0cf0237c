//! Curated word lists for the issue rules.
//!
//! Weak adjectives with stronger alternatives, vague nouns and intensifiers,
//! weak verbs, hedges, fillers, weak sentence connectors and the strong
//! vocabulary that earns praise.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Adjectives that "very" usually props up, with stronger replacements.
pub static WEAK_ADJECTIVES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("good", "excellent / superb"),
        ("bad", "terrible / awful"),
        ("big", "enormous / huge"),
        ("small", "tiny / minute"),
        ("happy", "delighted / thrilled"),
        ("sad", "miserable / heartbroken"),
        ("tired", "exhausted / drained"),
        ("hungry", "starving / famished"),
        ("cold", "freezing / frigid"),
        ("hot", "scorching / boiling"),
        ("important", "crucial / essential"),
        ("interesting", "fascinating / compelling"),
        ("nice", "delightful / pleasant"),
        ("pretty", "beautiful / gorgeous"),
        ("beautiful", "stunning / exquisite"),
        ("scared", "terrified / petrified"),
        ("angry", "furious / livid"),
        ("old", "ancient / aged"),
        ("fast", "rapid / swift"),
        ("slow", "sluggish / gradual"),
        ("easy", "effortless / simple"),
        ("hard", "challenging / arduous"),
        ("difficult", "challenging / arduous"),
        ("clean", "spotless / immaculate"),
        ("dirty", "filthy / squalid"),
        ("funny", "hilarious / hysterical"),
        ("smart", "brilliant / clever"),
        ("tasty", "delicious / delectable"),
        ("busy", "swamped / hectic"),
        ("quiet", "silent / hushed"),
        ("loud", "deafening / thunderous"),
        ("sure", "certain / confident"),
        ("different", "distinct / contrasting"),
        ("bright", "brilliant / dazzling"),
        ("strong", "powerful / robust"),
        ("weak", "feeble / frail"),
        ("rich", "wealthy / affluent"),
        ("poor", "destitute / impoverished"),
    ]
    .into_iter()
    .collect()
});

/// Placeholder nouns that carry almost no meaning.
pub static VAGUE_NOUNS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["stuff", "thing", "things", "whatever"].into_iter().collect());

/// Intensifiers that are overused in casual speech.
pub static VAGUE_INTENSIFIERS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["really", "totally", "super"].into_iter().collect());

/// Overused verbs, keyed by inflected form, with the base form used in the
/// message and suggested alternatives.
pub static WEAK_VERBS: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        const GET: (&str, &str) = ("get/got", "obtain / receive / become");
        const PUT: (&str, &str) = ("put", "place / position / set");
        [
            ("get", GET),
            ("gets", GET),
            ("got", GET),
            ("gotten", GET),
            ("getting", GET),
            ("put", PUT),
            ("puts", PUT),
            ("putting", PUT),
        ]
        .into_iter()
        .collect()
    });

/// Inflections of "find" that combine with "out".
pub const FIND_FORMS: &[&str] = &["find", "finds", "found", "finding"];

/// Replacement for "find out".
pub const FIND_OUT_REPLACEMENT: &str = "discover / learn";

/// Phrases that soften a statement and undercut the speaker's authority.
pub const HEDGING_PHRASES: &[&str] = &[
    "i think",
    "i guess",
    "i suppose",
    "i believe",
    "i feel like",
    "i'm not sure",
    "it seems",
    "kind of",
    "sort of",
    "maybe",
    "perhaps",
    "probably",
];

/// Filler words and phrases that pad speech without content.
pub const FILLER_PHRASES: &[&str] = &[
    "um",
    "uh",
    "uhm",
    "er",
    "erm",
    "ah",
    "hmm",
    "you know",
    "i mean",
    "basically",
    "literally",
];

/// Connectors that make weak sentence openers when repeated.
pub static WEAK_CONNECTORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["and", "so", "but", "then", "also", "well"]
        .into_iter()
        .collect()
});

/// Vocabulary worth praising in a learner's speech.
pub const STRONG_VOCABULARY: &[&str] = &[
    "fundamental",
    "essential",
    "comprehensive",
    "intricate",
    "significant",
    "crucial",
    "substantial",
    "remarkable",
    "exceptional",
    "profound",
    "nuanced",
    "meticulous",
    "articulate",
    "eloquent",
    "innovative",
    "perspective",
    "demonstrate",
    "consequently",
    "furthermore",
    "moreover",
    "nevertheless",
    "nonetheless",
    "therefore",
    "in contrast",
    "on the other hand",
    "as a result",
];

/// Suffixes that mark academic vocabulary.
pub const ACADEMIC_SUFFIXES: &[&str] = &[
    "tion", "ment", "ence", "ance", "ity", "ive", "ous", "ism", "ist",
];
