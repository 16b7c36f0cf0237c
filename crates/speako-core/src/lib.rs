//! Core library for speako.
//!
//! Assesses a spoken-language transcript: rule-based issue detection, a
//! clarity score, lexical metrics, a CEFR (A1–C2) estimate and, for offline
//! evaluation, Word Error Rate against a reference transcript.
//!
//! # Modules
//!
//! - [`tagger`] - Tokens with character offsets, tags, sentences, pattern matching
//! - [`rules`] - The issue rule engine
//! - [`clarity`] - Clarity score aggregation
//! - [`metrics`] - Lexical and structural metrics
//! - [`cefr`] - CEFR estimation and the external classifier capability
//! - [`pronunciation`] - Per-word ASR confidence aggregation
//! - [`wer`] - Word Error Rate
//! - [`assessment`] - The full per-transcript pipeline
//! - [`benchmark`] - STM parsing and batch evaluation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use speako_core::assessment::assess;
//! use speako_core::transcript::Transcript;
//!
//! let transcript = Transcript::from_text("I got a new job. It is very good.");
//! let assessment = assess(&transcript, None);
//!
//! println!("clarity: {}", assessment.analysis.clarity_score);
//! println!("level: {}", assessment.metrics.cefr_level);
//! ```
#![deny(unsafe_code)]

pub mod assessment;
pub mod benchmark;
pub mod cefr;
pub mod clarity;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod metrics;
pub mod pronunciation;
pub mod rules;
pub mod tagger;
pub mod text;
pub mod transcript;
pub mod wer;
pub mod word_lists;

pub use assessment::{Assessment, assess};
pub use cefr::{CefrAssessment, CefrClassifier, CefrLevel, CefrPrediction, CefrSource};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ClassifierError, ConfigError, ConfigResult, ParseLevelError};
pub use metrics::{Metrics, compute_metrics};
pub use rules::{AnalysisResult, Category, Issue, Severity, analyze_text, detect_issues};
pub use transcript::{Transcript, Word};
pub use wer::{WerBreakdown, align, normalize, wer};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
