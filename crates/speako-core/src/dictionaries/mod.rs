//! Dictionaries for transcript analysis.
//!
//! Provides curated word sets used by the tagger, sentence splitting and the
//! complex-word heuristic.

pub mod abbreviations;
pub mod common_words;
pub mod irregular_verbs;
