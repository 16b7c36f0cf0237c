//! Batch evaluation against labelled reference transcripts.
//!
//! Reads NIST STM files (`file channel speaker start end [<labels>] text`),
//! pairs reference and recognizer output per file, and reports mean WER and
//! how often the predicted CEFR level matches the reference label.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::assessment::assess;
use crate::cefr::{CefrClassifier, CefrLevel};
use crate::transcript::Transcript;
use crate::wer::{self, WerBreakdown};

/// One line of an STM file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StmSegment {
    /// Recording identifier.
    pub file: String,
    /// Audio channel.
    pub channel: String,
    /// Speaker identifier.
    pub speaker: String,
    /// Segment start in seconds.
    pub start: f64,
    /// Segment end in seconds.
    pub end: f64,
    /// CEFR level from the label field, if one was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CefrLevel>,
    /// Segment transcript.
    pub text: String,
}

/// Parse STM content.
///
/// Blank lines and `;;` comments are skipped, as are lines with too few
/// fields, unparseable times or no text. The first comma-separated label that
/// names a CEFR level becomes [`StmSegment::level`].
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn parse_stm(content: &str) -> Vec<StmSegment> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;") {
                return None;
            }
            let segment = parse_stm_line(line);
            if segment.is_none() {
                tracing::debug!(line = idx + 1, "skipping STM line");
            }
            segment
        })
        .collect()
}

fn parse_stm_line(line: &str) -> Option<StmSegment> {
    let mut rest = line;
    let mut fields = [""; 5];
    for field in &mut fields {
        let (head, tail) = next_field(rest)?;
        *field = head;
        rest = tail;
    }
    let [file, channel, speaker, start, end] = fields;

    let mut level = None;
    if let Some(labels) = rest.strip_prefix('<') {
        let close = labels.find('>')?;
        level = labels[..close]
            .split(',')
            .find_map(|label| label.trim().parse::<CefrLevel>().ok());
        rest = &labels[close + 1..];
    }

    let text = rest.trim();
    if text.is_empty() {
        return None;
    }

    Some(StmSegment {
        file: file.to_string(),
        channel: channel.to_string(),
        speaker: speaker.to_string(),
        start: start.parse().ok()?,
        end: end.parse().ok()?,
        level,
        text: text.to_string(),
    })
}

fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], s[end..].trim_start()))
}

/// All segments of one recording joined together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FileTranscript {
    /// Recording identifier.
    pub file: String,
    /// Segment texts joined with spaces, in input order.
    pub text: String,
    /// The first CEFR label seen for this recording.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CefrLevel>,
}

/// Join segments per recording, keeping recordings in first-seen order.
pub fn group_by_file(segments: &[StmSegment]) -> Vec<FileTranscript> {
    let mut files: Vec<FileTranscript> = Vec::new();
    for segment in segments {
        match files.iter_mut().find(|f| f.file == segment.file) {
            Some(existing) => {
                existing.text.push(' ');
                existing.text.push_str(&segment.text);
                existing.level = existing.level.or(segment.level);
            }
            None => files.push(FileTranscript {
                file: segment.file.clone(),
                text: segment.text.clone(),
                level: segment.level,
            }),
        }
    }
    files
}

/// One recording to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BenchmarkItem {
    /// Recording identifier.
    pub id: String,
    /// Ground-truth transcript.
    pub reference: String,
    /// Recognizer output.
    pub hypothesis: String,
    /// Ground-truth CEFR level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<CefrLevel>,
}

/// Pair reference and hypothesis recordings by file id.
///
/// Every reference recording yields one item; a recording the recognizer
/// missed gets an empty hypothesis. The reference label wins over the
/// hypothesis label.
pub fn pair_transcripts(
    reference: &[FileTranscript],
    hypothesis: &[FileTranscript],
) -> Vec<BenchmarkItem> {
    reference
        .iter()
        .map(|r| {
            let h = hypothesis.iter().find(|h| h.file == r.file);
            BenchmarkItem {
                id: r.file.clone(),
                reference: r.text.clone(),
                hypothesis: h.map(|h| h.text.clone()).unwrap_or_default(),
                level: r.level.or_else(|| h.and_then(|h| h.level)),
            }
        })
        .collect()
}

/// Result for one recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItemResult {
    /// Recording identifier.
    pub id: String,
    /// WER of the hypothesis against the reference.
    pub wer: WerBreakdown,
    /// Clarity score of the hypothesis.
    pub clarity_score: u8,
    /// CEFR level assessed from the hypothesis.
    pub predicted_level: CefrLevel,
    /// Ground-truth CEFR level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_level: Option<CefrLevel>,
}

impl ItemResult {
    /// Whether the prediction matches a known label.
    pub fn level_matches(&self) -> Option<bool> {
        self.expected_level.map(|e| e == self.predicted_level)
    }
}

/// Aggregate benchmark results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BenchmarkReport {
    /// Per-recording results in input order.
    pub items: Vec<ItemResult>,
    /// Mean WER across items; 0 with no items.
    pub mean_wer: f64,
    /// Share of labelled items whose level was predicted exactly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cefr_match_rate: Option<f64>,
    /// Items with a ground-truth level.
    pub labelled_items: usize,
    /// Labelled items predicted exactly.
    pub matched_items: usize,
}

impl BenchmarkReport {
    /// Aggregate per-item results.
    pub fn from_results(items: Vec<ItemResult>) -> Self {
        let mean_wer = if items.is_empty() {
            0.0
        } else {
            items.iter().map(|i| i.wer.wer).sum::<f64>() / items.len() as f64
        };
        let outcomes: Vec<bool> = items.iter().filter_map(ItemResult::level_matches).collect();
        let labelled_items = outcomes.len();
        let matched_items = outcomes.iter().filter(|&&m| m).count();
        let cefr_match_rate =
            (labelled_items > 0).then(|| matched_items as f64 / labelled_items as f64);
        Self {
            items,
            mean_wer,
            cefr_match_rate,
            labelled_items,
            matched_items,
        }
    }
}

/// Score one recording: WER against the reference, assessment of the
/// hypothesis.
pub fn evaluate_item(item: &BenchmarkItem, classifier: Option<&dyn CefrClassifier>) -> ItemResult {
    let assessment = assess(&Transcript::from_text(item.hypothesis.as_str()), classifier);
    ItemResult {
        id: item.id.clone(),
        wer: wer::align(&item.reference, &item.hypothesis),
        clarity_score: assessment.analysis.clarity_score,
        predicted_level: assessment.cefr.level,
        expected_level: item.level,
    }
}

/// Evaluate every item and aggregate.
#[tracing::instrument(skip_all, fields(items = items.len()))]
pub fn run_benchmark(
    items: &[BenchmarkItem],
    classifier: Option<&dyn CefrClassifier>,
) -> BenchmarkReport {
    let results = items.iter().map(|i| evaluate_item(i, classifier)).collect();
    BenchmarkReport::from_results(results)
}
