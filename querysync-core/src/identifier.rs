//! Query id extraction from a file path.
//!
//! A query file must be named `*_{queryId}.sql`: an underscore, a run of
//! ASCII digits, then the literal `.sql` suffix at the very end of the path.

use std::path::Path;

use crate::error::ExtractionError;
use crate::types::QueryId;

const SQL_SUFFIX: &str = ".sql";

/// Derive the query id from `path`.
///
/// Pure and deterministic. Fails when the suffix is missing, the underscore
/// separator is missing, the digit run is empty or non-numeric, or the
/// number does not fit in a `u64`.
pub fn extract(path: &Path) -> Result<QueryId, ExtractionError> {
    let fail = || ExtractionError {
        path: path.to_path_buf(),
    };

    let file_name = path.file_name().and_then(|n| n.to_str()).ok_or_else(fail)?;
    // `file_name` drops a trailing separator; the raw path must still end in `.sql`.
    if !path.as_os_str().to_string_lossy().ends_with(SQL_SUFFIX) {
        return Err(fail());
    }

    let stem = file_name.strip_suffix(SQL_SUFFIX).ok_or_else(fail)?;
    let (_, digits) = stem.rsplit_once('_').ok_or_else(fail)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(fail());
    }

    digits.parse::<u64>().map(QueryId).map_err(|_| fail())
}
