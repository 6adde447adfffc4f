//! # querysync-sync
//!
//! Remote query client and batch orchestration.
//!
//! Construct a [`DuneClient`] (or a [`DryRunClient`]) once per invocation and
//! hand it to [`pipeline::run`] together with the changed file paths.

pub mod client;
pub mod dune;
pub mod error;
pub mod pipeline;

pub use client::{DryRunClient, QueryClient, QueryUpdate};
pub use dune::{ClientConfig, DuneClient, DEFAULT_BASE_URL};
pub use error::{ConfigError, SubmitError};
