//! querysync core library — domain types, errors, and the per-file build steps.
//!
//! - [`identifier`] — query id extraction from a file name
//! - [`loader`] — query file reading
//! - [`builder`] — composes the two into an [`UpdateItem`]
//! - [`paths`] — splitting the changed-files input
//! - [`types`] — ids, items, outcomes and the batch report
//! - [`error`] — typed per-item errors

pub mod builder;
pub mod error;
pub mod identifier;
pub mod loader;
pub mod paths;
pub mod types;

pub use builder::{build, BuiltItem};
pub use error::{BuildFailure, ExtractionError, LoadError};
pub use types::{BatchReport, BatchSummary, FailureReason, ItemOutcome, QueryId, UpdateItem};
