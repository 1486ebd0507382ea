use crate::report::{ReportError, ReportRenderer};
use crate::stats::Statistics;

/// Pretty-printed JSON of the whole statistics value.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, stats: &Statistics) -> Result<String, ReportError> {
        let mut json = serde_json::to_string_pretty(stats)?;
        json.push('\n');
        Ok(json)
    }
}
