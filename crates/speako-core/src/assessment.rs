//! The full per-transcript pipeline.
//!
//! Tags the transcript once, runs the issue rules, computes metrics and the
//! heuristic CEFR level, then lets an optional classifier override the level.
//! The [`Assessment`] is built only after that decision.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cefr::{self, CefrAssessment, CefrClassifier};
use crate::metrics::{self, Metrics};
use crate::rules::{self, AnalysisResult};
use crate::tagger::TaggedDocument;
use crate::transcript::Transcript;

/// Everything speako reports about one transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Assessment {
    /// Issues, clarity score and praise.
    pub analysis: AnalysisResult,
    /// Lexical metrics. `cefr_level` matches `cefr.level`.
    pub metrics: Metrics,
    /// The final CEFR level and where it came from.
    pub cefr: CefrAssessment,
}

/// Assess a transcript.
///
/// `classifier` is consulted at most once. If it is absent, not ready or
/// fails, the heuristic level is reported.
#[tracing::instrument(
    skip_all,
    fields(text_len = transcript.text.len(), words = transcript.words.len())
)]
pub fn assess(transcript: &Transcript, classifier: Option<&dyn CefrClassifier>) -> Assessment {
    let doc = TaggedDocument::new(&transcript.text);
    let analysis = rules::analyze_document(&doc);
    let mut metrics = metrics::metrics_with_clarity(
        &transcript.text,
        transcript.word_timings(),
        analysis.clarity_score,
    );
    let cefr = cefr::resolve_level(metrics.cefr_level, &transcript.text, classifier);
    metrics.cefr_level = cefr.level;

    tracing::debug!(
        issues = analysis.issues.len(),
        clarity = analysis.clarity_score,
        level = %cefr.level,
        "assessment complete"
    );

    Assessment {
        analysis,
        metrics,
        cefr,
    }
}
