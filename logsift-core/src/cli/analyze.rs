//! The `analyze` command
//!
//! source spec
//! resolve_inputs
//! Accumulator (one per input)
//! RawData::merge
//! derive
//! render / write_report

use crate::aggregate::{Accumulator, Criteria, RawData};
use crate::cli::AnalyzeArgs;
use crate::conf::{AnalyzeConfig, AnalyzeSpec, load_spec};
use crate::report::{render, write_report};
use crate::source::{read_lines, resolve_inputs};
use crate::stats::{Statistics, derive};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Result of a finished run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub statistics: Statistics,
    pub sources: usize,
    /// The rendered report text.
    pub report: String,
    /// Where the report was written; `None` when no output file was configured.
    pub report_path: Option<PathBuf>,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let outcome = run_with_config(&config)?;
    if outcome.report_path.is_none() {
        print!("{}", outcome.report);
    }
    print_summary(&outcome);
    Ok(())
}

/// Builds the run configuration from an optional config file and the flags.
pub fn resolve_config(args: &AnalyzeArgs) -> Result<AnalyzeConfig> {
    let file_spec = match &args.config {
        Some(path) => load_spec(path)?,
        None => AnalyzeSpec::default(),
    };

    let config = file_spec.overlay(args.to_spec()).resolve()?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

/// Runs the whole pipeline for an already resolved configuration.
///
/// The report is written to the configured output file; without one it is
/// only returned in the [`RunOutcome`].
pub fn run_with_config(config: &AnalyzeConfig) -> Result<RunOutcome> {
    let (raw, sources) = collect(&config.source, &config.criteria)?;

    let statistics = derive(raw).with_context(|| {
        format!(
            "nothing to report for '{}'; check the time window and filter",
            config.source
        )
    })?;

    let report = render(&statistics, config.format)?;
    let report_path = config
        .output
        .as_deref()
        .map(|output| write_report(&report, config.format, output))
        .transpose()?;

    Ok(RunOutcome {
        statistics,
        sources,
        report,
        report_path,
    })
}

/// Reads every input of `source` into its own accumulator and merges them.
///
/// Returns the merged data and the number of inputs read. The first input
/// that cannot be opened or read aborts the run.
pub fn collect(source: &str, criteria: &Criteria) -> Result<(RawData, usize)> {
    let inputs = resolve_inputs(source)?;

    let mut total = RawData::new();
    for input in &inputs {
        let name = input.name();
        let reader = input.open()?;

        let mut acc = Accumulator::new(criteria.clone());
        let lines = read_lines(reader, &name, |line| {
            acc.ingest(line);
        })?;

        let data = acc.into_raw_data();
        tracing::info!(
            source = %name,
            lines,
            accepted = data.processed,
            unparsed = data.unparsed,
            "source read"
        );
        total.merge(data);
    }

    Ok((total, inputs.len()))
}

fn print_summary(outcome: &RunOutcome) {
    let metrics = &outcome.statistics.metrics;

    eprintln!(
        "{} {} requests from {} source(s), {} unparsed",
        "✔".green(),
        metrics.processed.bold(),
        outcome.sources,
        metrics.unparsed
    );

    let rate = format!("{:.2}%", outcome.statistics.error_rate);
    if metrics.total_errors > 0 {
        eprintln!("{} error rate {}", "!".yellow(), rate.red().bold());
    } else {
        eprintln!("{} error rate {}", "✔".green(), rate);
    }

    if let Some(path) = &outcome.report_path {
        eprintln!("{} report written to {}", "✔".green(), path.display());
    }
}
