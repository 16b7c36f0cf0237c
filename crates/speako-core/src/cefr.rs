//! CEFR level estimation.
//!
//! The heuristic combines three components into a 0-100 composite:
//!
//! | Component | Weight | Saturates at |
//! |-----------|--------|--------------|
//! | Average sentence length | 40 | 12 words |
//! | Complex-word ratio | 40 | 10% |
//! | Clarity score | 20 | 100 |
//!
//! An external [`CefrClassifier`] can be supplied; when it is ready and
//! returns a prediction, that prediction wins. Otherwise the heuristic level
//! stands and the fallback is logged.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, ParseLevelError};
use crate::metrics::Metrics;

/// Below this many words the heuristic always answers A1.
pub const MIN_WORDS_FOR_ESTIMATE: usize = 10;

/// Composite thresholds: a score below `LEVEL_THRESHOLDS[i]` maps to level `i`.
const LEVEL_THRESHOLDS: [f64; 5] = [25.0, 40.0, 55.0, 70.0, 85.0];

/// A level on the Common European Framework of Reference scale.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CefrLevel {
    /// Breakthrough.
    #[default]
    A1,
    /// Waystage.
    A2,
    /// Threshold.
    B1,
    /// Vantage.
    B2,
    /// Effective operational proficiency.
    C1,
    /// Mastery.
    C2,
}

impl CefrLevel {
    /// All levels, lowest first.
    pub const ALL: [Self; 6] = [Self::A1, Self::A2, Self::B1, Self::B2, Self::C1, Self::C2];

    /// The level label ("B2").
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        }
    }

    /// Map a composite score (0-100) to a level.
    pub fn from_composite(score: f64) -> Self {
        let idx = LEVEL_THRESHOLDS
            .iter()
            .position(|&t| score < t)
            .unwrap_or(LEVEL_THRESHOLDS.len());
        Self::ALL[idx]
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CefrLevel {
    type Err = ParseLevelError;

    /// Parse a level label. Case-insensitive; `+`/`-` suffixes are dropped
    /// and a bare `C` reads as C1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().trim_end_matches(['+', '-']).to_ascii_uppercase();
        match label.as_str() {
            "A1" => Ok(Self::A1),
            "A2" => Ok(Self::A2),
            "B1" => Ok(Self::B1),
            "B2" => Ok(Self::B2),
            "C" | "C1" => Ok(Self::C1),
            "C2" => Ok(Self::C2),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// One label's score from a classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabelScore {
    /// The label as the classifier reports it.
    pub label: String,
    /// Probability or score for the label.
    pub score: f64,
}

/// A classifier's prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CefrPrediction {
    /// Predicted level.
    pub level: CefrLevel,
    /// Confidence in the predicted level.
    pub confidence: f64,
    /// Scores for every label the classifier considered.
    pub all_scores: Vec<LabelScore>,
}

impl CefrPrediction {
    /// Build a prediction from raw label scores, choosing the best-scoring
    /// label as the level.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::InvalidPrediction`] when there are no scores,
    /// a score is not finite, or the best label is not a CEFR level.
    pub fn from_scores(all_scores: Vec<LabelScore>) -> Result<Self, ClassifierError> {
        if let Some(bad) = all_scores.iter().find(|s| !s.score.is_finite()) {
            return Err(ClassifierError::InvalidPrediction(format!(
                "non-finite score for {}",
                bad.label
            )));
        }
        let best = all_scores
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| ClassifierError::InvalidPrediction("no scores".to_string()))?;
        let level = best
            .label
            .parse()
            .map_err(|e: ParseLevelError| ClassifierError::InvalidPrediction(e.to_string()))?;
        let confidence = best.score;
        Ok(Self {
            level,
            confidence,
            all_scores,
        })
    }
}

impl CefrPrediction {
    /// Reject a non-finite confidence and clamp the rest into `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::InvalidPrediction`] for NaN or infinite
    /// confidence.
    pub fn validated(mut self) -> Result<Self, ClassifierError> {
        if !self.confidence.is_finite() {
            return Err(ClassifierError::InvalidPrediction(format!(
                "non-finite confidence {}",
                self.confidence
            )));
        }
        self.confidence = self.confidence.clamp(0.0, 1.0);
        Ok(self)
    }
}

/// An external CEFR classifier, such as a fine-tuned transformer behind an
/// inference service.
///
/// Implementations must be thread-safe; the assessment calls
/// [`predict`](Self::predict) at most once per transcript.
pub trait CefrClassifier: Send + Sync {
    /// Whether the classifier can answer right now.
    fn is_ready(&self) -> bool;

    /// Predict the level of `text`.
    ///
    /// # Errors
    ///
    /// Any [`ClassifierError`]; the caller falls back to the heuristic.
    fn predict(&self, text: &str) -> Result<CefrPrediction, ClassifierError>;
}

/// Where a CEFR level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CefrSource {
    /// The built-in composite heuristic.
    Heuristic,
    /// An external classifier.
    Classifier,
}

impl CefrSource {
    /// Stable lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heuristic => "heuristic",
            Self::Classifier => "classifier",
        }
    }
}

/// The final CEFR decision for a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CefrAssessment {
    /// The chosen level.
    pub level: CefrLevel,
    /// Which estimator produced it.
    pub source: CefrSource,
    /// What the composite heuristic estimated, whichever source won.
    pub heuristic_level: CefrLevel,
    /// Classifier confidence, when the classifier was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Classifier label scores, when the classifier was used.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_scores: Vec<LabelScore>,
}

impl CefrAssessment {
    /// A heuristic-only decision.
    pub const fn heuristic(level: CefrLevel) -> Self {
        Self {
            level,
            source: CefrSource::Heuristic,
            heuristic_level: level,
            confidence: None,
            all_scores: Vec::new(),
        }
    }

    /// A classifier decision that superseded `heuristic_level`.
    pub fn classified(prediction: CefrPrediction, heuristic_level: CefrLevel) -> Self {
        Self {
            level: prediction.level,
            source: CefrSource::Classifier,
            heuristic_level,
            confidence: Some(prediction.confidence),
            all_scores: prediction.all_scores,
        }
    }
}

/// Composite proficiency score (0-100) from metrics and clarity.
pub fn composite_score(metrics: &Metrics, clarity_score: u8) -> f64 {
    let complex_ratio = if metrics.word_count == 0 {
        0.0
    } else {
        metrics.complex_words as f64 / metrics.word_count as f64
    };
    let sentence = metrics.average_sentence_length.min(12.0) / 12.0 * 40.0;
    let vocabulary = complex_ratio.min(0.10) / 0.10 * 40.0;
    let grammar = f64::from(clarity_score.min(100)) / 100.0 * 20.0;
    sentence + vocabulary + grammar
}

/// Heuristic CEFR level. Ignores `metrics.cefr_level`.
pub fn estimate_cefr(metrics: &Metrics, clarity_score: u8) -> CefrLevel {
    if metrics.word_count < MIN_WORDS_FOR_ESTIMATE {
        return CefrLevel::A1;
    }
    CefrLevel::from_composite(composite_score(metrics, clarity_score))
}

/// Let the classifier override the heuristic level when it can.
#[tracing::instrument(skip_all, fields(heuristic = %heuristic, text_len = text.len()))]
pub fn resolve_level(
    heuristic: CefrLevel,
    text: &str,
    classifier: Option<&dyn CefrClassifier>,
) -> CefrAssessment {
    let Some(classifier) = classifier else {
        return CefrAssessment::heuristic(heuristic);
    };
    if !classifier.is_ready() {
        tracing::warn!(error = %ClassifierError::NotReady, "using heuristic CEFR estimate");
        return CefrAssessment::heuristic(heuristic);
    }
    match classifier.predict(text).and_then(CefrPrediction::validated) {
        Ok(prediction) => {
            tracing::debug!(
                level = %prediction.level,
                confidence = prediction.confidence,
                "classifier prediction accepted"
            );
            CefrAssessment::classified(prediction, heuristic)
        }
        Err(e) => {
            tracing::warn!(error = %e, "using heuristic CEFR estimate");
            CefrAssessment::heuristic(heuristic)
        }
    }
}
