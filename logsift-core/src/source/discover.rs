use crate::source::SourceError;
use glob::glob;
use std::path::PathBuf;

/// Discovers log files matching a glob pattern.
///
/// Returns the matching paths in sorted order. Directories and entries that
/// cannot be read are dropped.
///
/// # Errors
///
/// Returns `SourceError::Glob` if the pattern is malformed.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>, SourceError> {
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| SourceError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}
