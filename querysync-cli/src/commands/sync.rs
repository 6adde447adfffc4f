//! `querysync sync` — upload changed query files.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;

use querysync_sync::{
    pipeline, ClientConfig, DryRunClient, DuneClient, QueryClient, DEFAULT_BASE_URL,
};

use super::{output, ChangedQueries};

/// Arguments for `querysync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    #[command(flatten)]
    pub input: ChangedQueries,

    /// API key for the query service. Required unless `--dry-run` is set.
    #[arg(long, env = "DUNE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the query service.
    #[arg(long, env = "DUNE_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds (at least 1).
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Build and validate every file but send nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the full report as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Append `output=<summary json>` to this file (set by GitHub Actions).
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        // The client is built before any file is read: a bad credential
        // aborts the run up front.
        let client: Box<dyn QueryClient> = if self.dry_run {
            Box::new(DryRunClient)
        } else {
            let config = ClientConfig {
                api_key: self.api_key.clone(),
                base_url: self.base_url.clone(),
                timeout: Duration::from_secs(self.timeout_secs),
            };
            Box::new(DuneClient::new(config).context("cannot configure query service client")?)
        };

        let paths = self.input.paths();
        let report = pipeline::run(&paths, client.as_ref());

        if self.json {
            output::print_json(&report)?;
        } else {
            output::print_report(&report, self.dry_run);
        }
        if let Some(path) = self.github_output.as_deref() {
            output::write_step_output(path, &report)?;
        }

        if !report.is_success() {
            let summary = report.summary();
            bail!(
                "{} of {} changed queries failed to sync",
                summary.failed,
                summary.total
            );
        }
        Ok(())
    }
}
