//! The remote query client contract.

use serde::Serialize;

use querysync_core::QueryId;

use crate::error::SubmitError;

/// Body of an update request.
///
/// Only `query_sql` is sent. Per-query metadata (name, tags, parameters)
/// would be added here once it has a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryUpdate<'a> {
    pub query_sql: &'a str,
}

/// Something that can overwrite a stored query.
pub trait QueryClient {
    /// Replace the SQL of `query_id`.
    ///
    /// Returns the id the service reports having updated; the caller checks
    /// it against `query_id`.
    fn update_query(&self, query_id: QueryId, update: &QueryUpdate<'_>)
        -> Result<QueryId, SubmitError>;
}

/// `--dry-run` client: logs the update and confirms it without any I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunClient;

impl QueryClient for DryRunClient {
    fn update_query(
        &self,
        query_id: QueryId,
        update: &QueryUpdate<'_>,
    ) -> Result<QueryId, SubmitError> {
        tracing::info!(
            "[dry-run] would update query {query_id} ({} bytes)",
            update.query_sql.len()
        );
        Ok(query_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_serializes_query_sql_only() {
        let update = QueryUpdate {
            query_sql: "SELECT 1",
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"query_sql":"SELECT 1"}"#);
    }

    #[test]
    fn dry_run_confirms_requested_id() {
        let update = QueryUpdate { query_sql: "x" };
        let id = DryRunClient.update_query(QueryId(9), &update).unwrap();
        assert_eq!(id, QueryId(9));
    }
}
