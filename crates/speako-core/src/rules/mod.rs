//! Issue rule engine.
//!
//! Decomposes speech feedback into independent rules, orchestrated by
//! [`detect_issues`]. Each rule is a pure function over a [`TaggedDocument`]
//! that returns the issues it found and the clarity deductions they cost.
//! The engine folds the outcomes in table order and sorts the issues by
//! offset.
//!
//! [`analyze_text`] adds the clarity score and the praise pass on top.

pub mod agreement;
pub mod fillers;
pub mod hedging;
pub mod openers;
pub mod passive_voice;
pub mod praise;
pub mod run_on;
pub mod vague;
pub mod weak_adjectives;
pub mod weak_verbs;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clarity;
use crate::tagger::{Span, TaggedDocument};

/// How an issue should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Hurts how the speaker comes across.
    Warning,
    /// Worth improving, not wrong.
    Suggestion,
    /// Something the speaker did well.
    Praise,
}

/// What aspect of speech an issue concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Word choice.
    Vocabulary,
    /// Structure and directness.
    Clarity,
    /// How assertive the speaker sounds.
    Confidence,
    /// Grammatical correctness.
    Grammar,
}

/// A detected issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    /// Human-readable description.
    pub message: String,
    /// Offset of the offending text, in characters.
    pub offset: usize,
    /// Length of the offending text in characters. Zero for document-level
    /// issues.
    pub length: usize,
    /// Presentation severity.
    pub severity: Severity,
    /// Issue category.
    pub category: Category,
    /// Suggested alternative wording.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl Issue {
    /// An issue anchored to a span of the text.
    pub fn at(
        span: Span,
        category: Category,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            offset: span.start,
            length: span.len(),
            severity,
            category,
            replacement: None,
        }
    }

    /// An issue about the whole document (offset 0, length 0).
    pub fn document(category: Category, severity: Severity, message: impl Into<String>) -> Self {
        Self::at(Span { start: 0, end: 0 }, category, severity, message)
    }

    /// Attach a suggested replacement.
    #[must_use]
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }
}

/// Issues found by one rule and the deductions they cost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Issues in detection order.
    pub issues: Vec<Issue>,
    /// Clarity deduction points.
    pub deductions: u32,
}

impl RuleOutcome {
    /// Record an issue and its deduction weight.
    pub fn push(&mut self, issue: Issue, weight: u32) {
        self.issues.push(issue);
        self.deductions += weight;
    }

    /// Add deduction points without an issue.
    pub const fn deduct(&mut self, weight: u32) {
        self.deductions += weight;
    }
}

/// A rule evaluator.
pub type Rule = fn(&TaggedDocument<'_>) -> RuleOutcome;

/// The rules in evaluation order.
pub const RULES: &[(&str, Rule)] = &[
    ("weak_adjectives", weak_adjectives::check),
    ("vague", vague::check),
    ("weak_verbs", weak_verbs::check),
    ("hedging", hedging::check),
    ("passive_voice", passive_voice::check),
    ("openers", openers::check),
    ("fillers", fillers::check),
    ("run_on", run_on::check),
    ("agreement", agreement::check),
];

/// Issues for a transcript and their summed deductions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IssueReport {
    /// Issues sorted by ascending offset.
    pub issues: Vec<Issue>,
    /// Sum of all rule deductions.
    pub deductions: u32,
}

/// Feedback on one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    /// Issues sorted by ascending offset.
    pub issues: Vec<Issue>,
    /// Clarity score (0-100).
    pub clarity_score: u8,
    /// Praise for strong vocabulary.
    pub positive_points: Vec<String>,
}

/// Run every rule over `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_issues(text: &str) -> IssueReport {
    detect_issues_in(&TaggedDocument::new(text))
}

/// Run every rule over an already tagged document.
pub fn detect_issues_in(doc: &TaggedDocument<'_>) -> IssueReport {
    let mut report = RULES
        .iter()
        .fold(IssueReport::default(), |mut report, (name, rule)| {
            let outcome = rule(doc);
            tracing::debug!(
                rule = name,
                issues = outcome.issues.len(),
                deductions = outcome.deductions,
                "rule evaluated"
            );
            report.issues.extend(outcome.issues);
            report.deductions += outcome.deductions;
            report
        });

    // Stable: ties keep rule order.
    report.issues.sort_by_key(|issue| issue.offset);
    report
}

/// Detect issues, score clarity and collect praise.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_text(text: &str) -> AnalysisResult {
    analyze_document(&TaggedDocument::new(text))
}

/// [`analyze_text`] over an already tagged document.
pub fn analyze_document(doc: &TaggedDocument<'_>) -> AnalysisResult {
    let report = detect_issues_in(doc);
    AnalysisResult {
        clarity_score: clarity::clarity_score(doc.word_count(), report.deductions),
        issues: report.issues,
        positive_points: praise::positive_points(doc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn very_good_stuff() {
        let result = analyze_text("This is very good stuff.");
        assert_eq!(result.issues.len(), 2);

        let intensifier = &result.issues[0];
        assert_eq!(intensifier.category, Category::Vocabulary);
        assert_eq!(intensifier.severity, Severity::Suggestion);
        let replacement = intensifier.replacement.as_deref().unwrap();
        assert!(replacement.contains("excellent") || replacement.contains("superb"));

        let vague = &result.issues[1];
        assert!(vague.message.contains("stuff"));
        assert_eq!(vague.category, Category::Vocabulary);
    }

    #[test]
    fn got_a_new_job() {
        let result = analyze_text("I got a new job.");
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].message.contains("get/got"));
        assert_eq!(
            result.issues[0].replacement.as_deref(),
            Some("obtain / receive / become")
        );
    }

    #[test]
    fn passive_with_agent() {
        let result = analyze_text("The decision was made by the team.");
        assert!(
            result
                .issues
                .iter()
                .any(|i| i.category == Category::Clarity && i.message.contains("assive"))
        );
    }

    #[test]
    fn clean_sentence() {
        let result = analyze_text("The quick brown fox jumps over the lazy dog.");
        assert!(result.issues.is_empty(), "{:?}", result.issues);
        assert_eq!(result.clarity_score, 100);
    }

    #[test]
    fn short_text_scores_full_clarity() {
        let result = analyze_text("Um, I think, um, maybe.");
        assert!(!result.issues.is_empty());
        assert_eq!(result.clarity_score, 100);
    }

    #[test]
    fn empty_input() {
        for text in ["", "   ", "?!..."] {
            let result = analyze_text(text);
            assert!(result.issues.is_empty());
            assert_eq!(result.clarity_score, 100);
            assert!(result.positive_points.is_empty());
        }
    }

    #[test]
    fn issues_sorted_by_offset() {
        let text = "So I think the report was written by Sam. So it was very bad stuff. \
                    They was really tired, you know.";
        let report = detect_issues(text);
        assert!(report.issues.len() >= 5);
        assert!(report.issues.windows(2).all(|w| w[0].offset <= w[1].offset));
    }

    #[test]
    fn offset_ties_keep_rule_order() {
        let text = "I think, um, we should, uh, ship it next week, uh, or the week after.";
        let report = detect_issues(text);
        let at_start: Vec<_> = report.issues.iter().filter(|i| i.offset == 0).collect();
        assert_eq!(at_start.len(), 2);
        // hedging runs before fillers in RULES
        assert_eq!(at_start[0].category, Category::Confidence);
        assert_eq!(at_start[0].length, 7);
        assert_eq!(at_start[1].category, Category::Clarity);
        assert_eq!(at_start[1].length, 0);
        assert!(at_start[1].message.contains("filler words"));
        assert_eq!(report.issues[0], *at_start[0]);
        assert_eq!(report.issues[1], *at_start[1]);
    }

    #[test]
    fn issues_fit_in_text() {
        let text = "Naïve café talk: I guess it was, um, very nice stuff.";
        let char_len = text.chars().count();
        for issue in detect_issues(text).issues {
            assert!(issue.length == 0 || issue.offset + issue.length <= char_len);
        }
    }

    #[test]
    fn hedging_lowers_clarity() {
        let text = "I think the plan could work and I guess we should try it next week \
                    because maybe it helps the whole team.";
        let result = analyze_text(text);
        let hedges = result
            .issues
            .iter()
            .filter(|i| i.category == Category::Confidence)
            .count();
        assert_eq!(hedges, 3);
        assert!(result.clarity_score < 100);
    }

    #[test]
    fn deductions_are_summed() {
        // hedge (3) + passive (2)
        let report = detect_issues("I think the song was written by Ann.");
        assert_eq!(report.deductions, 5);
    }

    #[test]
    fn issue_serializes_snake_case() {
        let issue = Issue::document(Category::Clarity, Severity::Warning, "too many fillers");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["category"], "clarity");
        assert_eq!(json["offset"], 0);
        assert!(json.get("replacement").is_none());
    }
}
