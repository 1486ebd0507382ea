use crate::report::{ReportError, ReportFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// `output` with the format's extension, unless it already has one.
pub fn output_path(output: &Path, format: ReportFormat) -> PathBuf {
    if output.extension().is_some() {
        output.to_path_buf()
    } else {
        output.with_extension(format.extension())
    }
}

/// Writes a rendered report and returns the path it landed at.
pub fn write_report(
    text: &str,
    format: ReportFormat,
    output: &Path,
) -> Result<PathBuf, ReportError> {
    let path = output_path(output, format);
    fs::write(&path, text).map_err(|e| ReportError::Write {
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), %format, "report written");
    Ok(path)
}
