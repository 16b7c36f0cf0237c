//! Analyze command: issues, clarity, praise, metrics and CEFR level.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use speako_core::assessment;
use speako_core::rules::Severity;

use super::load_transcript;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Transcript file (.json with word timings, or plain text).
    pub file: Utf8PathBuf,

    /// Minimum acceptable clarity score (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_clarity: Option<u8>,
}

/// Assess a transcript file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_clarity: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_clarity = ?args.min_clarity, "executing analyze command");

    let transcript = load_transcript(&args.file, max_input_bytes)?;
    let min_clarity = args.min_clarity.or(config_min_clarity);

    let report = assessment::assess(&transcript, None);
    let clarity = report.analysis.clarity_score;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", args.file.bold());

        let score_str = if clarity >= 80 {
            clarity.to_string().green().to_string()
        } else if clarity >= 60 {
            clarity.to_string().yellow().to_string()
        } else {
            clarity.to_string().red().to_string()
        };
        let m = &report.metrics;
        println!(
            "\n  {} {}/100, {} issues",
            "Clarity:".cyan(),
            score_str,
            report.analysis.issues.len(),
        );
        println!(
            "  {} {} ({})",
            "CEFR:".cyan(),
            report.cefr.level.bold(),
            report.cefr.source.as_str(),
        );
        println!(
            "  {} {} words, {} unique, {} complex, {} sentences (avg {:.1})",
            "Metrics:".cyan(),
            m.word_count,
            m.unique_words,
            m.complex_words,
            m.sentence_count,
            m.average_sentence_length,
        );
        if let Some(score) = m.pronunciation_score {
            println!("  {} {}/100", "Pronunciation:".cyan(), score);
        }
        if let Some(wpm) = m.speaking_rate_wpm {
            println!("  {} {:.0} wpm", "Speaking rate:".cyan(), wpm);
        }

        if !report.analysis.issues.is_empty() {
            println!();
            for issue in &report.analysis.issues {
                let label = match issue.severity {
                    Severity::Warning => "WARN".yellow().to_string(),
                    Severity::Suggestion => "HINT".cyan().to_string(),
                    Severity::Praise => "GOOD".green().to_string(),
                };
                let excerpt: String = transcript
                    .text
                    .chars()
                    .skip(issue.offset)
                    .take(issue.length)
                    .collect();
                print!("  [{label}] {}", issue.message);
                if !excerpt.is_empty() {
                    print!(" {}", format!("@{}: \"{excerpt}\"", issue.offset).dimmed());
                }
                match &issue.replacement {
                    Some(r) => println!(" -> {}", r.green()),
                    None => println!(),
                }
            }
        }

        for point in &report.analysis.positive_points {
            println!("  {} {}", "+".green(), point);
        }
    }

    if let Some(min) = min_clarity
        && clarity < min
    {
        bail!(
            "{} clarity score {} is below minimum {}. Address the reported issues.",
            args.file,
            clarity,
            min,
        );
    }

    Ok(())
}
