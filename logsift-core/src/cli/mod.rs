//! Command line front end
//!
//! The `logsift` binary only parses arguments and initialises logging; the
//! commands themselves live here so they can be driven from tests.

pub mod analyze;
pub mod fields;


use crate::conf::{AnalyzeSpec, FilterSpec, ReportSpec};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Glob pattern of log files or an http(s) URL
    #[arg(short, long)]
    pub path: Option<String>,

    /// Skip lines logged before this time (RFC 3339, log layout or YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Skip lines logged after this time
    #[arg(long)]
    pub to: Option<String>,

    /// Report format: markdown, adoc or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Only count lines whose field equals --filter-value (see `logsift fields`)
    #[arg(long, requires = "filter_value")]
    pub filter_field: Option<String>,

    #[arg(long, requires = "filter_field")]
    pub filter_value: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// HCL config file; flags given on the command line take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// The settings given as flags, ready to be laid over a config file.
    pub fn to_spec(&self) -> AnalyzeSpec {
        let filter = match (&self.filter_field, &self.filter_value) {
            (Some(field), Some(value)) => Some(FilterSpec {
                field: field.clone(),
                value: value.clone(),
            }),
            _ => None,
        };

        AnalyzeSpec {
            path: self.path.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            filter,
            report: ReportSpec {
                format: self.format.clone(),
                output: self.output.clone(),
            },
        }
    }
}
