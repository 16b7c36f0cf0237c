//! Transcript input types produced by the speech-to-text collaborator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A transcript of one utterance or recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transcript {
    /// The full transcript text.
    pub text: String,
    /// Time-aligned words with ASR confidence. May be empty.
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Transcript {
    /// Build a transcript from text alone, without word timings.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            words: Vec::new(),
        }
    }

    /// The word timings, or `None` when the recognizer supplied none.
    pub fn word_timings(&self) -> Option<&[Word]> {
        if self.words.is_empty() {
            None
        } else {
            Some(&self.words)
        }
    }
}

/// A single recognized word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Word {
    /// The recognized word text.
    pub text: String,
    /// Start time in seconds.
    pub start_time: f64,
    /// End time in seconds (expected `>= start_time`).
    pub end_time: f64,
    /// Recognizer confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Word {
    /// Confidence clamped into `[0, 1]`, or `None` when it is not a number.
    pub fn clamped_confidence(&self) -> Option<f64> {
        self.confidence
            .is_finite()
            .then(|| self.confidence.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_words() {
        let t: Transcript = serde_json::from_str(r#"{"text": "hello there"}"#).unwrap();
        assert_eq!(t.text, "hello there");
        assert!(t.words.is_empty());
        assert!(t.word_timings().is_none());
    }

    #[test]
    fn deserializes_words() {
        let json = r#"{
            "text": "hi",
            "words": [{"text": "hi", "start_time": 0.0, "end_time": 0.4, "confidence": 0.93}]
        }"#;
        let t: Transcript = serde_json::from_str(json).unwrap();
        assert_eq!(t.words.len(), 1);
        assert_eq!(t.word_timings().map(<[Word]>::len), Some(1));
    }

    #[test]
    fn confidence_is_clamped() {
        let mut w = Word {
            text: "x".to_string(),
            start_time: 0.0,
            end_time: 0.1,
            confidence: 1.7,
        };
        assert_eq!(w.clamped_confidence(), Some(1.0));
        w.confidence = -0.2;
        assert_eq!(w.clamped_confidence(), Some(0.0));
        w.confidence = f64::NAN;
        assert_eq!(w.clamped_confidence(), None);
    }
}
