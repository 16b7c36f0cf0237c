//! Metrics command: lexical metrics and the heuristic CEFR estimate.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use speako_core::CefrLevel;
use speako_core::metrics;

use super::load_transcript;

/// Arguments for the `metrics` subcommand.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Transcript file (.json with word timings, or plain text).
    pub file: Utf8PathBuf,

    /// Minimum acceptable CEFR level.
    #[arg(long, value_enum, ignore_case = true)]
    pub min_level: Option<CefrLevel>,
}

/// Compute metrics for a transcript file.
#[instrument(name = "cmd_metrics", skip_all, fields(file = %args.file))]
pub fn cmd_metrics(
    args: MetricsArgs,
    global_json: bool,
    config_min_level: Option<CefrLevel>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_level = ?args.min_level, "executing metrics command");

    let transcript = load_transcript(&args.file, max_input_bytes)?;
    let min_level = args.min_level.or(config_min_level);

    let m = metrics::compute_metrics(&transcript.text, transcript.word_timings());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&m)?);
    } else {
        println!("{}", args.file.bold());
        println!("  {}: {}", "Words".dimmed(), m.word_count);
        println!("  {}: {}", "Characters".dimmed(), m.character_count);
        println!("  {}: {}", "Unique words".dimmed(), m.unique_words);
        println!("  {}: {}", "Complex words".dimmed(), m.complex_words);
        println!("  {}: {}", "Sentences".dimmed(), m.sentence_count);
        println!(
            "  {}: {:.1}",
            "Avg sentence length".dimmed(),
            m.average_sentence_length
        );
        println!("  {}: {}", "CEFR level".dimmed(), m.cefr_level.cyan());
        if let Some(score) = m.pronunciation_score {
            println!("  {}: {}", "Pronunciation".dimmed(), score);
        }
        if let Some(wpm) = m.speaking_rate_wpm {
            println!("  {}: {:.0} wpm", "Speaking rate".dimmed(), wpm);
        }
    }

    if let Some(min) = min_level
        && m.cefr_level < min
    {
        bail!(
            "{} is estimated at {} (minimum: {}).",
            args.file,
            m.cefr_level,
            min,
        );
    }

    Ok(())
}
