//! Domain types for a query sync batch.
//!
//! All path fields use `PathBuf`. Everything here is created fresh per
//! invocation; nothing is persisted between runs.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Identifier of a query in the remote query service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QueryId(pub u64);

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// UpdateItem
// ---------------------------------------------------------------------------

/// A validated update request: a query id plus the full SQL to upload.
///
/// Only [`crate::builder::build`] constructs these, and only when both the
/// load and the id extraction succeeded. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateItem {
    query_id: QueryId,
    content: String,
    source_path: PathBuf,
}

impl UpdateItem {
    pub(crate) fn new(query_id: QueryId, content: String, source_path: PathBuf) -> Self {
        Self {
            query_id,
            content,
            source_path,
        }
    }

    pub fn query_id(&self) -> QueryId {
        self.query_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Why a submission did not end in a confirmed update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// The remote call failed or was rejected.
    Service { message: String },
    /// The service acknowledged a different query than the one requested.
    Unconfirmed { confirmed: QueryId },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Service { message } => f.write_str(message),
            FailureReason::Unconfirmed { confirmed } => {
                write!(f, "update not confirmed: service acknowledged query {confirmed}")
            }
        }
    }
}

/// Terminal state of one input path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    /// The file was empty, meaning the query was deleted. Nothing was submitted.
    Skipped { path: PathBuf },
    /// The file could not be turned into an update. Carries every error seen.
    BuildFailed { path: PathBuf, reasons: Vec<String> },
    /// The service updated and confirmed the query.
    Submitted { query_id: QueryId, path: PathBuf },
    /// The submission failed or was not confirmed.
    SubmitFailed {
        query_id: QueryId,
        path: PathBuf,
        reason: FailureReason,
    },
}

impl ItemOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ItemOutcome::Skipped { path }
            | ItemOutcome::BuildFailed { path, .. }
            | ItemOutcome::Submitted { path, .. }
            | ItemOutcome::SubmitFailed { path, .. } => path,
        }
    }

    pub fn query_id(&self) -> Option<QueryId> {
        match self {
            ItemOutcome::Submitted { query_id, .. } | ItemOutcome::SubmitFailed { query_id, .. } => {
                Some(*query_id)
            }
            ItemOutcome::Skipped { .. } | ItemOutcome::BuildFailed { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ItemOutcome::BuildFailed { .. } | ItemOutcome::SubmitFailed { .. }
        )
    }
}

// ---------------------------------------------------------------------------
// BatchReport
// ---------------------------------------------------------------------------

/// Counts derived from a [`BatchReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub submitted: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// One outcome per input path, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    /// A report for a batch with no work in it.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: ItemOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn is_noop(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// `false` if any path ended in `BuildFailed` or `SubmitFailed`.
    pub fn is_success(&self) -> bool {
        !self.outcomes.iter().any(ItemOutcome::is_failure)
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            total: self.outcomes.len(),
            ..BatchSummary::default()
        };
        for outcome in &self.outcomes {
            match outcome {
                ItemOutcome::Submitted { .. } => summary.submitted += 1,
                ItemOutcome::Skipped { .. } => summary.skipped += 1,
                ItemOutcome::BuildFailed { .. } | ItemOutcome::SubmitFailed { .. } => {
                    summary.failed += 1
                }
            }
        }
        summary
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} submitted, {} failed, {} skipped",
            self.submitted, self.failed, self.skipped
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BatchReport {
        BatchReport {
            outcomes: vec![
                ItemOutcome::Submitted {
                    query_id: QueryId(1),
                    path: PathBuf::from("q_1.sql"),
                },
                ItemOutcome::Skipped {
                    path: PathBuf::from("q_2.sql"),
                },
                ItemOutcome::SubmitFailed {
                    query_id: QueryId(3),
                    path: PathBuf::from("q_3.sql"),
                    reason: FailureReason::Unconfirmed {
                        confirmed: QueryId(4),
                    },
                },
                ItemOutcome::BuildFailed {
                    path: PathBuf::from("bad.sql"),
                    reasons: vec!["nope".to_string()],
                },
            ],
        }
    }

    #[test]
    fn summary_counts_each_outcome_kind() {
        let summary = sample_report().summary();
        assert_eq!(
            summary,
            BatchSummary {
                total: 4,
                submitted: 1,
                failed: 2,
                skipped: 1,
            }
        );
        assert_eq!(summary.to_string(), "1 submitted, 2 failed, 1 skipped");
    }

    #[test]
    fn empty_report_is_successful_noop() {
        let report = BatchReport::empty();
        assert!(report.is_noop());
        assert!(report.is_success());
        assert_eq!(report.summary(), BatchSummary::default());
    }

    #[test]
    fn skipped_only_report_is_success() {
        let report = BatchReport {
            outcomes: vec![ItemOutcome::Skipped {
                path: PathBuf::from("q_9.sql"),
            }],
        };
        assert!(report.is_success());
        assert!(!report.is_noop());
    }

    #[test]
    fn any_failure_marks_report_failed() {
        assert!(!sample_report().is_success());
    }

    #[test]
    fn unconfirmed_reason_mentions_confirmation() {
        let reason = FailureReason::Unconfirmed {
            confirmed: QueryId(42),
        };
        let msg = reason.to_string();
        assert!(msg.starts_with("update not confirmed"), "got: {msg}");
        assert!(msg.contains("42"));
    }

    #[test]
    fn outcome_accessors() {
        let report = sample_report();
        assert_eq!(report.outcomes[0].query_id(), Some(QueryId(1)));
        assert_eq!(report.outcomes[1].query_id(), None);
        assert_eq!(report.outcomes[3].path(), Path::new("bad.sql"));
    }

    #[test]
    fn report_serializes_with_status_tags() {
        let json = serde_json::to_value(sample_report()).expect("serialize");
        let outcomes = json["outcomes"].as_array().expect("array");
        assert_eq!(outcomes[0]["status"], "submitted");
        assert_eq!(outcomes[0]["query_id"], 1);
        assert_eq!(outcomes[2]["reason"]["kind"], "unconfirmed");
        assert_eq!(outcomes[3]["reasons"][0], "nope");
    }
}
