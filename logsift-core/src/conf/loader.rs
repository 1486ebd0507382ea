use crate::conf::{AnalyzeSpec, ConfigError};
use std::fs;
use std::path::Path;

/// Reads an HCL config file into an unchecked spec.
pub fn load_spec(path: &Path) -> Result<AnalyzeSpec, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let spec: AnalyzeSpec = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(spec)
}
