use crate::aggregate::Criteria;
use crate::report::ReportFormat;
use serde::Deserialize;
use std::path::PathBuf;

/// Unchecked settings as written in a config file or given as flags.
///
/// ```hcl
/// path = "/var/log/nginx/access*.log"
/// from = "2015-05-17"
/// to   = "2015-05-18T00:00:00Z"
///
/// filter {
///   field = "resource"
///   value = "/downloads/product_1"
/// }
///
/// report {
///   format = "adoc"
///   output = "report"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzeSpec {
    /// Glob pattern or http(s) URL.
    pub path: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub filter: Option<FilterSpec>,
    #[serde(default)]
    pub report: ReportSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSpec {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSpec {
    pub format: Option<String>,
    /// Report file; the format's extension is added when it has none.
    pub output: Option<PathBuf>,
}

/// Checked settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeConfig {
    pub source: String,
    pub criteria: Criteria,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
}
