//! Composes id extraction and file loading into an [`UpdateItem`].

use std::path::Path;

use crate::error::BuildFailure;
use crate::types::UpdateItem;
use crate::{identifier, loader};

/// Successful result of building one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltItem {
    /// Ready to submit.
    Ready(UpdateItem),
    /// The file is empty (query deleted); do not submit.
    Skipped,
}

/// Build the update for a single path.
///
/// The load and the extraction both run even if the first one fails, so
/// the returned [`BuildFailure`] carries every applicable error. An empty
/// file with a valid name yields [`BuiltItem::Skipped`].
pub fn build(path: &Path) -> Result<BuiltItem, BuildFailure> {
    let content = loader::load(path);
    let query_id = identifier::extract(path);

    match (content, query_id) {
        (Ok(content), Ok(_)) if content.is_empty() => Ok(BuiltItem::Skipped),
        (Ok(content), Ok(query_id)) => Ok(BuiltItem::Ready(UpdateItem::new(
            query_id,
            content,
            path.to_path_buf(),
        ))),
        (content, query_id) => Err(BuildFailure {
            path: path.to_path_buf(),
            load: content.err(),
            extraction: query_id.err(),
        }),
    }
}
