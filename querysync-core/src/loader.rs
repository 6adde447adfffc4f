//! Query file reading.

use std::path::Path;

use crate::error::LoadError;

/// Read the full UTF-8 text of a query file.
///
/// A zero-length file is returned as `Ok("")`; callers treat that as a
/// deleted query. Failures keep the original I/O error as their source and
/// repeat its message in their own.
pub fn load(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })
}
