pub mod check;
pub mod output;
pub mod sync;

use clap::Args;

/// The changed-files input shared by every subcommand.
#[derive(Args, Debug)]
pub struct ChangedQueries {
    /// Comma-separated list of changed query files (`*_{queryId}.sql`).
    /// An empty value means there is nothing to do.
    #[arg(long, env = "CHANGED_QUERIES", default_value = "")]
    pub changed_queries: String,
}

impl ChangedQueries {
    pub fn paths(&self) -> Vec<String> {
        querysync_core::paths::parse_changed_files(&self.changed_queries)
    }
}
