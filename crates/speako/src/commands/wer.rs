//! WER command: word error rate of a hypothesis against a reference.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::load_transcript;

/// Arguments for the `wer` subcommand.
#[derive(Args, Debug)]
pub struct WerArgs {
    /// Ground-truth transcript file.
    pub reference: Utf8PathBuf,

    /// Recognizer output file.
    pub hypothesis: Utf8PathBuf,

    /// Maximum acceptable WER (e.g. 0.25).
    #[arg(long)]
    pub max_wer: Option<f64>,
}

/// Compare two transcript files.
#[instrument(
    name = "cmd_wer",
    skip_all,
    fields(reference = %args.reference, hypothesis = %args.hypothesis)
)]
pub fn cmd_wer(
    args: WerArgs,
    global_json: bool,
    config_max_wer: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(max_wer = ?args.max_wer, "executing wer command");

    let reference = load_transcript(&args.reference, max_input_bytes)?;
    let hypothesis = load_transcript(&args.hypothesis, max_input_bytes)?;
    let max_wer = args.max_wer.or(config_max_wer);

    let breakdown = speako_core::align(&reference.text, &hypothesis.text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else if let Some(max) = max_wer {
        if breakdown.wer <= max {
            println!(
                "{} {} WER {:.3} (max: {:.3})",
                "PASS:".green(),
                args.hypothesis,
                breakdown.wer,
                max,
            );
        }
    } else {
        println!("{:.3}", breakdown.wer);
        println!(
            "  {} substitutions, {} deletions, {} insertions over {} reference words",
            breakdown.substitutions,
            breakdown.deletions,
            breakdown.insertions,
            breakdown.reference_words,
        );
    }

    if let Some(max) = max_wer
        && breakdown.wer > max
    {
        bail!(
            "{} has WER {:.3} against {} (max: {:.3}). {} substitutions, {} deletions, {} insertions.",
            args.hypothesis,
            breakdown.wer,
            args.reference,
            max,
            breakdown.substitutions,
            breakdown.deletions,
            breakdown.insertions,
        );
    }

    Ok(())
}
