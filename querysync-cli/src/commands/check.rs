//! `querysync check` — validate changed query files offline.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use querysync_sync::pipeline::{self, PlannedItem};

use super::ChangedQueries;

/// Arguments for `querysync check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: ChangedQueries,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct CheckRow {
    #[tabled(rename = "file")]
    file: String,
    #[tabled(rename = "query id")]
    query_id: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "detail")]
    detail: String,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let planned = pipeline::plan(&self.input.paths());
        let failed = planned
            .iter()
            .filter(|p| p.is_failure())
            .count();
        let rows: Vec<CheckRow> = planned.iter().map(to_row).collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows).context("failed to serialize check JSON")?
            );
        } else if rows.is_empty() {
            println!("✓ no changed query files — nothing to check");
        } else {
            let total = rows.len();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
            let mark = if failed == 0 { "✓".green() } else { "✗".red() };
            println!("{mark} {} of {total} files ready", total - failed);
        }

        if failed > 0 {
            bail!("{failed} changed query files are invalid");
        }
        Ok(())
    }
}

fn to_row(item: &PlannedItem) -> CheckRow {
    match item {
        PlannedItem::Ready(item) => CheckRow {
            file: item.source_path().display().to_string(),
            query_id: item.query_id().to_string(),
            status: "ready".to_string(),
            detail: format!("{} bytes", item.content().len()),
        },
        PlannedItem::Skipped { path } => CheckRow {
            file: path.display().to_string(),
            query_id: "-".to_string(),
            status: "skipped".to_string(),
            detail: "empty file (deleted)".to_string(),
        },
        PlannedItem::BuildFailed { path, reasons } => CheckRow {
            file: path.display().to_string(),
            query_id: "-".to_string(),
            status: "invalid".to_string(),
            detail: reasons.join("; "),
        },
    }
}
