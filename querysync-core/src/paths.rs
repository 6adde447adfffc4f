//! Splitting of the comma-separated changed-files input.

/// Split `raw` on commas and trim each entry.
///
/// An empty `raw` yields `[""]`, which the pipeline treats as "no work".
/// Blank entries inside a longer list are kept so they surface as failures.
pub fn parse_changed_files(raw: &str) -> Vec<String> {
    raw.split(',').map(|entry| entry.trim().to_string()).collect()
}

/// `true` for an empty list or a list holding a single blank entry.
pub fn is_no_work<S: AsRef<str>>(paths: &[S]) -> bool {
    match paths {
        [] => true,
        [only] => only.as_ref().trim().is_empty(),
        _ => false,
    }
}
