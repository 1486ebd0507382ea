use crate::constants::REPORT_TIME_LAYOUT;
use crate::report::{ReportError, ReportRenderer};
use crate::stats::{KeyCount, Statistics};

const TABLE_OPEN: &str = "[options=\"header\"]\n|===\n";
const TABLE_CLOSE: &str = "|===\n\n";

/// AsciiDoc document with one header table per section.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiDocRenderer;

impl ReportRenderer for AsciiDocRenderer {
    fn render(&self, stats: &Statistics) -> Result<String, ReportError> {
        let mut out = String::new();
        let metrics = &stats.metrics;

        out.push_str("= Access Log Report\n\n");

        out.push_str("== General information\n\n");
        out.push_str(TABLE_OPEN);
        out.push_str("| Metric | Value\n");
        out.push_str(&format!(
            "| Start date | {}\n",
            stats.time_range.from.format(REPORT_TIME_LAYOUT)
        ));
        out.push_str(&format!(
            "| End date | {}\n",
            stats.time_range.to.format(REPORT_TIME_LAYOUT)
        ));
        out.push_str(&format!("| Requests | {}\n", metrics.processed));
        out.push_str(&format!(
            "| Average response size | {:.2}\n",
            metrics.average_response_size
        ));
        out.push_str(&format!("| Unparsed lines | {}\n", metrics.unparsed));
        out.push_str(&format!("| 95p response size | {}\n", stats.percentile_95));
        out.push_str(&format!("| Median response size | {}\n", stats.median));
        out.push_str(&format!("| Error responses | {}\n", metrics.total_errors));
        out.push_str(&format!("| Error rate, % | {:.2}\n", stats.error_rate));
        out.push_str(TABLE_CLOSE);

        push_ranking(&mut out, "Top HTTP methods", "Method", &stats.top.methods);
        push_ranking(&mut out, "Top resources", "Resource", &stats.top.resources);

        let codes = &stats.response_codes;
        out.push_str("== Response codes\n\n");
        out.push_str(TABLE_OPEN);
        out.push_str("| Category | Count\n");
        out.push_str(&format!("| Informational (1xx) | {}\n", codes.informational));
        out.push_str(&format!("| Success (2xx) | {}\n", codes.success));
        out.push_str(&format!("| Redirection (3xx) | {}\n", codes.redirection));
        out.push_str(&format!("| Client error (4xx) | {}\n", codes.client_error));
        out.push_str(&format!("| Server error (5xx) | {}\n", codes.server_error));
        out.push_str(TABLE_CLOSE);

        push_ranking(&mut out, "Top status codes", "Code", &stats.top.status_codes);

        Ok(out)
    }
}

fn push_ranking(out: &mut String, title: &str, column: &str, entries: &[KeyCount]) {
    out.push_str(&format!("== {title}\n\n"));
    out.push_str(TABLE_OPEN);
    out.push_str(&format!("| {column} | Count\n"));
    for entry in entries {
        out.push_str(&format!("| {} | {}\n", entry.value.replace('|', "\\|"), entry.count));
    }
    out.push_str(TABLE_CLOSE);
}
