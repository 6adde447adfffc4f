//! Error types for querysync-core.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The file name does not end in `_{queryId}.sql`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("couldn't extract query id from file path '{}': must be formatted as '*_{{queryId}}.sql'", .path.display())]
pub struct ExtractionError {
    pub path: PathBuf,
}

/// Reading a query file failed. The underlying I/O message is kept verbatim.
#[derive(Debug, Error)]
#[error("couldn't read query file '{}': {source}", .path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Every error collected while building a single path.
///
/// Both the load and the extraction are attempted, so a bad path can carry
/// two errors at once.
#[derive(Debug)]
pub struct BuildFailure {
    pub path: PathBuf,
    pub load: Option<LoadError>,
    pub extraction: Option<ExtractionError>,
}

impl BuildFailure {
    /// Rendered messages in the order the steps ran: load first, then extraction.
    pub fn messages(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(2);
        if let Some(err) = &self.load {
            out.push(err.to_string());
        }
        if let Some(err) = &self.extraction {
            out.push(err.to_string());
        }
        out
    }
}

impl fmt::Display for BuildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for BuildFailure {}
