//! Benchmark command: WER and CEFR agreement over a labelled corpus.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, info, instrument};

use speako_core::benchmark::{self, BenchmarkItem, BenchmarkReport};

use super::read_input_file;

/// Arguments for the `benchmark` subcommand.
#[derive(Args, Debug)]
pub struct BenchmarkArgs {
    /// JSON manifest: an array of `{id, reference, hypothesis, level?}`.
    #[arg(
        long,
        conflicts_with_all = ["reference", "hypothesis"],
        required_unless_present = "reference"
    )]
    pub manifest: Option<Utf8PathBuf>,

    /// Reference transcripts in STM format.
    #[arg(long, requires = "hypothesis")]
    pub reference: Option<Utf8PathBuf>,

    /// Recognizer transcripts in STM format.
    #[arg(long, requires = "reference")]
    pub hypothesis: Option<Utf8PathBuf>,
}

/// Load the items to evaluate.
fn load_items(
    args: &BenchmarkArgs,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<Vec<BenchmarkItem>> {
    if let Some(ref manifest) = args.manifest {
        let content = read_input_file(manifest, max_input_bytes)?;
        return serde_json::from_str(&content)
            .with_context(|| format!("failed to parse benchmark manifest {manifest}"));
    }
    let (Some(reference), Some(hypothesis)) = (&args.reference, &args.hypothesis) else {
        bail!("either --manifest or both --reference and --hypothesis are required");
    };
    let reference = benchmark::parse_stm(&read_input_file(reference, max_input_bytes)?);
    let hypothesis = benchmark::parse_stm(&read_input_file(hypothesis, max_input_bytes)?);
    debug!(
        reference_segments = reference.len(),
        hypothesis_segments = hypothesis.len(),
        "parsed STM files"
    );
    Ok(benchmark::pair_transcripts(
        &benchmark::group_by_file(&reference),
        &benchmark::group_by_file(&hypothesis),
    ))
}

/// Evaluate a corpus.
#[instrument(name = "cmd_benchmark", skip_all)]
pub fn cmd_benchmark(
    args: BenchmarkArgs,
    global_json: bool,
    quiet: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(?args, "executing benchmark command");

    let items = load_items(&args, max_input_bytes)?;
    if items.is_empty() {
        bail!("benchmark input contains no recordings");
    }

    let progress = if quiet || global_json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(items.len() as u64)
    };
    progress.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(items.len());
    for item in &items {
        progress.set_message(item.id.clone());
        results.push(benchmark::evaluate_item(item, None));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let report = BenchmarkReport::from_results(results);
    info!(
        items = report.items.len(),
        mean_wer = report.mean_wer,
        labelled = report.labelled_items,
        matched = report.matched_items,
        "benchmark complete"
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for item in &report.items {
        let level = match item.level_matches() {
            Some(true) => item.predicted_level.green().to_string(),
            Some(false) => item.predicted_level.red().to_string(),
            None => item.predicted_level.to_string(),
        };
        let expected = item
            .expected_level
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        println!(
            "  {:<24} WER {:.3}  clarity {:>3}  level {} (expected {})",
            item.id, item.wer.wer, item.clarity_score, level, expected,
        );
    }
    println!();
    println!("{}: {:.3}", "Mean WER".bold(), report.mean_wer);
    match report.cefr_match_rate {
        Some(rate) => println!(
            "{}: {:.1}% ({}/{})",
            "CEFR match rate".bold(),
            rate * 100.0,
            report.matched_items,
            report.labelled_items,
        ),
        None => println!("{}: {}", "CEFR match rate".bold(), "no labelled items".dimmed()),
    }

    Ok(())
}
