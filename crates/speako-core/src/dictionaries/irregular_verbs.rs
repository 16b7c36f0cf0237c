//! Verb-form dictionaries for participle tagging.
//!
//! Contains irregular past participles and the -ed words that speakers almost
//! always use as adjectives ("I was tired"), so the tagger can tell a passive
//! construction from a predicate adjective.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Irregular past participles.
pub static IRREGULAR_PAST_PARTICIPLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Most common in speech
    set.extend([
        "been", "done", "gone", "seen", "known", "given", "taken", "made", "become", "written",
        "spoken", "broken", "chosen", "driven", "eaten", "fallen", "forgotten", "forgiven",
        "frozen", "gotten", "hidden", "ridden", "risen", "shaken", "shown", "stolen", "sworn",
        "torn", "thrown", "worn", "beaten", "bitten", "blown", "drawn", "flown", "grown",
        "withdrawn", "begun", "drunk", "rung", "sung", "swum", "spun", "won", "hung", "struck",
        "stuck", "swung", "stung",
    ]);

    // Participles shared with the simple past
    set.extend([
        "said", "paid", "laid", "heard", "sold", "told", "held", "left", "kept", "felt", "dealt",
        "meant", "sent", "spent", "lent", "built", "brought", "bought", "caught", "fought",
        "found", "fed", "led", "lit", "lost", "met", "sought", "taught", "thought", "understood",
        "bound", "bred", "dug", "fled", "hit", "hurt", "let", "put", "quit", "read", "set",
        "shed", "shot", "shut", "spread", "cast", "forecast", "upset", "overcome", "proven",
        "mistaken", "forbidden", "woven", "sown", "slain", "arisen", "awoken", "undone",
    ]);

    set
});

/// Words ending in -ed/-en that are typically adjectives, not passive voice.
pub static ADJECTIVE_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "tired", "excited", "interested", "bored", "confused", "worried", "scared", "frightened",
        "amazed", "surprised", "shocked", "pleased", "satisfied", "disappointed", "frustrated",
        "embarrassed", "ashamed", "annoyed", "delighted", "thrilled", "stunned", "overwhelmed",
        "talented", "gifted", "blessed", "aged", "beloved", "skilled", "experienced", "advanced",
        "supposed", "concerned", "determined", "devoted", "educated", "informed", "inspired",
        "involved", "limited", "mixed", "organized", "packed", "prepared", "qualified",
        "relaxed", "relieved", "reserved", "retired", "sophisticated", "trained", "married",
        "used", "varied", "wasted", "wounded", "crowded", "naked", "wicked", "sacred",
    ]
    .into_iter()
    .collect()
});

/// Check if a lowercase word is an irregular past participle.
pub fn is_irregular_past_participle(word: &str) -> bool {
    IRREGULAR_PAST_PARTICIPLES.contains(word)
}

/// Check if a lowercase word is an -ed form normally used as an adjective.
pub fn is_adjective_exception(word: &str) -> bool {
    ADJECTIVE_EXCEPTIONS.contains(word)
}

/// Check if a lowercase word is likely a past participle.
///
/// Irregular forms come from the dictionary; regular forms are `-ed` words of
/// five or more letters ("need", "bed" and "used" do not qualify).
pub fn is_past_participle(word: &str) -> bool {
    if is_adjective_exception(word) {
        return false;
    }
    is_irregular_past_participle(word) || (word.len() >= 5 && word.ends_with("ed"))
}
