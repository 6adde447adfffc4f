//! Batch orchestration: build every changed file, then submit one at a time.
//!
//! Per-item states:
//!
//! ```text
//! Pending ─┬─> Skipped | BuildFailed            (never submitted)
//!          └─> submit ─┬─> Submitted            (service confirmed the same id)
//!                      └─> SubmitFailed         (service error or wrong id)
//! ```
//!
//! Nothing here returns an error. Every failure lands in the [`BatchReport`]
//! and the caller decides what the run as a whole means.

use std::path::{Path, PathBuf};

use querysync_core::{
    builder::{self, BuiltItem},
    paths::is_no_work,
    BatchReport, FailureReason, ItemOutcome, UpdateItem,
};

use crate::client::{QueryClient, QueryUpdate};

/// Result of the build phase for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedItem {
    /// Waiting for submission.
    Ready(UpdateItem),
    /// Empty file (deleted query); never submitted.
    Skipped { path: PathBuf },
    /// Could not be built; carries every error seen for the path.
    BuildFailed { path: PathBuf, reasons: Vec<String> },
}

impl PlannedItem {
    pub fn is_failure(&self) -> bool {
        matches!(self, PlannedItem::BuildFailed { .. })
    }
}

/// Build phase only: turn each path into a [`PlannedItem`], in input order.
///
/// A failure on one path never stops the others from being built.
pub fn plan<S: AsRef<str>>(paths: &[S]) -> Vec<PlannedItem> {
    if is_no_work(paths) {
        return Vec::new();
    }
    paths
        .iter()
        .map(|raw| plan_one(Path::new(raw.as_ref())))
        .collect()
}

fn plan_one(path: &Path) -> PlannedItem {
    match builder::build(path) {
        Ok(BuiltItem::Ready(item)) => PlannedItem::Ready(item),
        Ok(BuiltItem::Skipped) => {
            tracing::warn!("skipping (deleted) file {}", path.display());
            PlannedItem::Skipped {
                path: path.to_path_buf(),
            }
        }
        Err(failure) => {
            let reasons = failure.messages();
            for reason in &reasons {
                tracing::error!("{reason}");
            }
            PlannedItem::BuildFailed {
                path: failure.path,
                reasons,
            }
        }
    }
}

/// Run a full batch against `client`.
///
/// An empty list, or a list holding one blank entry, is a successful no-op.
/// Submissions happen strictly in input order and each one, including its
/// confirmation check, finishes before the next starts.
pub fn run<S, C>(paths: &[S], client: &C) -> BatchReport
where
    S: AsRef<str>,
    C: QueryClient + ?Sized,
{
    if is_no_work(paths) {
        tracing::info!("no changed query files provided");
        return BatchReport::empty();
    }

    let planned = plan(paths);
    let ready = planned
        .iter()
        .filter(|p| matches!(p, PlannedItem::Ready(_)))
        .count();
    tracing::info!("updating {ready} of {} changed queries", planned.len());

    let mut report = BatchReport::empty();
    for item in planned {
        let outcome = match item {
            PlannedItem::Ready(item) => submit(&item, client),
            PlannedItem::Skipped { path } => ItemOutcome::Skipped { path },
            PlannedItem::BuildFailed { path, reasons } => {
                ItemOutcome::BuildFailed { path, reasons }
            }
        };
        report.push(outcome);
    }

    let summary = report.summary();
    if report.is_success() {
        tracing::info!("sync finished: {summary}");
    } else {
        tracing::error!("sync finished with failures: {summary}");
    }
    report
}

/// Submit one item and confirm the id the service reports back.
fn submit<C: QueryClient + ?Sized>(item: &UpdateItem, client: &C) -> ItemOutcome {
    let query_id = item.query_id();
    let path: PathBuf = item.source_path().to_path_buf();
    tracing::info!("updating query with id {query_id}");

    let update = QueryUpdate {
        query_sql: item.content(),
    };
    match client.update_query(query_id, &update) {
        Ok(confirmed) if confirmed == query_id => ItemOutcome::Submitted { query_id, path },
        Ok(confirmed) => {
            let reason = FailureReason::Unconfirmed { confirmed };
            tracing::error!("query {query_id} ({}): {reason}", path.display());
            ItemOutcome::SubmitFailed {
                query_id,
                path,
                reason,
            }
        }
        Err(err) => {
            tracing::error!("query {query_id} ({}): {err}", path.display());
            ItemOutcome::SubmitFailed {
                query_id,
                path,
                reason: FailureReason::Service {
                    message: err.to_string(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;

    use querysync_core::QueryId;
    use tempfile::TempDir;

    use super::*;
    use crate::error::SubmitError;

    /// Records every call; always confirms.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<QueryId>>,
    }

    impl QueryClient for Recorder {
        fn update_query(
            &self,
            query_id: QueryId,
            _update: &QueryUpdate<'_>,
        ) -> Result<QueryId, SubmitError> {
            self.calls.borrow_mut().push(query_id);
            Ok(query_id)
        }
    }

    fn path_str(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn empty_list_is_noop_without_calls() {
        let client = Recorder::default();
        let empty: Vec<String> = Vec::new();
        let report = run(&empty, &client);
        assert!(report.is_noop());
        assert!(report.is_success());
        assert!(client.calls.borrow().is_empty());
    }

    #[test]
    fn single_blank_entry_is_noop() {
        let client = Recorder::default();
        let report = run(&[""], &client);
        assert!(report.is_noop());
        assert!(report.is_success());
    }

    #[test]
    fn plan_keeps_input_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a_2.sql"), "select 2").unwrap();
        fs::write(dir.path().join("b_1.sql"), "").unwrap();

        let paths = vec![path_str(&dir, "a_2.sql"), path_str(&dir, "b_1.sql")];
        let planned = plan(&paths);
        assert_eq!(planned.len(), 2);
        assert!(matches!(&planned[0], PlannedItem::Ready(item) if item.query_id() == QueryId(2)));
        assert!(matches!(&planned[1], PlannedItem::Skipped { .. }));
        assert!(!planned.iter().any(PlannedItem::is_failure));
    }

    #[test]
    fn skipped_items_are_never_submitted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("q_1.sql"), "").unwrap();

        let client = Recorder::default();
        let report = run(&[path_str(&dir, "q_1.sql")], &client);
        assert!(client.calls.borrow().is_empty());
        assert_eq!(report.summary().skipped, 1);
        assert!(report.is_success());
    }

    #[test]
    fn inner_blank_entry_is_a_build_failure() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("q_1.sql"), "select 1").unwrap();

        let client = Recorder::default();
        let report = run(&[path_str(&dir, "q_1.sql"), String::new()], &client);
        assert_eq!(report.outcomes.len(), 2);
        assert!(matches!(report.outcomes[1], ItemOutcome::BuildFailed { .. }));
        assert_eq!(*client.calls.borrow(), vec![QueryId(1)]);
    }
}
