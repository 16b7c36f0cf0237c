//! Positive reinforcement for strong vocabulary.

use std::sync::LazyLock;

use crate::tagger::{PhraseMatcher, TaggedDocument};
use crate::word_lists::STRONG_VOCABULARY;

/// At most this many words are named in the praise.
pub const MAX_PRAISED: usize = 3;

static MATCHER: LazyLock<PhraseMatcher> =
    LazyLock::new(|| PhraseMatcher::new(STRONG_VOCABULARY));

/// Praise for strong vocabulary, if any was used.
///
/// Returns at most one string naming up to [`MAX_PRAISED`] distinct items in
/// order of first appearance.
pub fn positive_points(doc: &TaggedDocument<'_>) -> Vec<String> {
    let mut found: Vec<&str> = Vec::new();
    for m in MATCHER.find_all(doc) {
        if !found.contains(&m.phrase) {
            found.push(m.phrase);
            if found.len() == MAX_PRAISED {
                break;
            }
        }
    }

    if found.is_empty() {
        return Vec::new();
    }
    vec![format!(
        "Strong vocabulary: {}",
        found
            .iter()
            .map(|w| format!("\"{w}\""))
            .collect::<Vec<_>>()
            .join(", ")
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_first_three_distinct() {
        let doc = TaggedDocument::new(
            "A fundamental, essential and fundamental idea. Moreover, it is crucial.",
        );
        assert_eq!(
            positive_points(&doc),
            vec!["Strong vocabulary: \"fundamental\", \"essential\", \"moreover\"".to_string()]
        );
    }

    #[test]
    fn multiword_items() {
        let doc = TaggedDocument::new("On the other hand, the cost rose.");
        let points = positive_points(&doc);
        assert_eq!(points.len(), 1);
        assert!(points[0].contains("on the other hand"));
    }

    #[test]
    fn nothing_to_praise() {
        let doc = TaggedDocument::new("It was fine.");
        assert!(positive_points(&doc).is_empty());
    }
}
