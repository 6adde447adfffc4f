//! Rendering of batch reports for humans, scripts, and CI.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use querysync_core::{BatchReport, BatchSummary, ItemOutcome};

/// Compact value written as the `output` step result.
#[derive(Debug, Serialize)]
pub struct OutputSummary {
    pub success: bool,
    #[serde(flatten)]
    pub summary: BatchSummary,
}

impl OutputSummary {
    pub fn from_report(report: &BatchReport) -> Self {
        Self {
            success: report.is_success(),
            summary: report.summary(),
        }
    }
}

#[derive(Serialize)]
struct ReportJson<'a> {
    success: bool,
    summary: BatchSummary,
    outcomes: &'a [ItemOutcome],
}

pub fn print_json(report: &BatchReport) -> Result<()> {
    let payload = ReportJson {
        success: report.is_success(),
        summary: report.summary(),
        outcomes: &report.outcomes,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize report JSON")?
    );
    Ok(())
}

pub fn print_report(report: &BatchReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    if report.is_noop() {
        println!("{prefix}✓ no changed query files — nothing to do");
        return;
    }

    for outcome in &report.outcomes {
        match outcome {
            ItemOutcome::Submitted { query_id, path } => println!(
                "  {}  query {query_id} ← {}",
                "✓".green(),
                path.display()
            ),
            ItemOutcome::Skipped { path } => {
                println!("  {}  skipped (deleted) {}", "·".bright_black(), path.display())
            }
            ItemOutcome::BuildFailed { path, reasons } => {
                println!("  {}  {}", "✗".red(), path.display());
                for reason in reasons {
                    println!("       {reason}");
                }
            }
            ItemOutcome::SubmitFailed {
                query_id,
                path,
                reason,
            } => println!(
                "  {}  query {query_id} ← {}: {reason}",
                "✗".red(),
                path.display()
            ),
        }
    }

    let summary = report.summary();
    let mark = if report.is_success() {
        "✓".green()
    } else {
        "✗".red()
    };
    println!("{prefix}{mark} {summary}");
}

/// Append `output=<json>` to a step-output file such as `$GITHUB_OUTPUT`.
pub fn write_step_output(path: &Path, report: &BatchReport) -> Result<()> {
    let value = serde_json::to_string(&OutputSummary::from_report(report))
        .context("failed to serialize step output")?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open step output file '{}'", path.display()))?;
    writeln!(file, "output={value}")
        .with_context(|| format!("cannot write step output file '{}'", path.display()))?;
    Ok(())
}
