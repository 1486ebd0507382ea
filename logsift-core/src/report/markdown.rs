use crate::constants::REPORT_TIME_LAYOUT;
use crate::report::{ReportError, ReportRenderer};
use crate::stats::{KeyCount, Statistics};

/// GitHub flavoured Markdown tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, stats: &Statistics) -> Result<String, ReportError> {
        let mut out = String::new();
        let metrics = &stats.metrics;

        out.push_str("#### General information\n\n");
        out.push_str("| Metric | Value |\n|:-------|------:|\n");
        let rows = [
            ("Start date", stats.time_range.from.format(REPORT_TIME_LAYOUT).to_string()),
            ("End date", stats.time_range.to.format(REPORT_TIME_LAYOUT).to_string()),
            ("Requests", metrics.processed.to_string()),
            ("Average response size", format!("{:.2}", metrics.average_response_size)),
            ("Unparsed lines", metrics.unparsed.to_string()),
            ("95p response size", stats.percentile_95.to_string()),
            ("Median response size", stats.median.to_string()),
            ("Error responses", metrics.total_errors.to_string()),
            ("Error rate, %", format!("{:.2}", stats.error_rate)),
        ];
        for (metric, value) in rows {
            out.push_str(&format!("| {metric} | {value} |\n"));
        }

        push_ranking(&mut out, "Top HTTP methods", "Method", &stats.top.methods);
        push_ranking(&mut out, "Top resources", "Resource", &stats.top.resources);

        let codes = &stats.response_codes;
        out.push_str("\n#### Response codes\n\n");
        out.push_str("| Category | Count |\n|:---------|------:|\n");
        out.push_str(&format!("| Informational (1xx) | {} |\n", codes.informational));
        out.push_str(&format!("| Success (2xx) | {} |\n", codes.success));
        out.push_str(&format!("| Redirection (3xx) | {} |\n", codes.redirection));
        out.push_str(&format!("| Client error (4xx) | {} |\n", codes.client_error));
        out.push_str(&format!("| Server error (5xx) | {} |\n", codes.server_error));

        push_ranking(&mut out, "Top status codes", "Code", &stats.top.status_codes);

        Ok(out)
    }
}

fn push_ranking(out: &mut String, title: &str, column: &str, entries: &[KeyCount]) {
    out.push_str(&format!("\n#### {title}\n\n"));
    out.push_str(&format!("| {column} | Count |\n|:-----|------:|\n"));
    for entry in entries {
        out.push_str(&format!("| {} | {} |\n", cell(&entry.value), entry.count));
    }
}

fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}
