/// Layout of the bracketed timestamp in a combined log line.
pub const LOG_TIME_LAYOUT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Layout used for dates in rendered reports.
pub const REPORT_TIME_LAYOUT: &str = "%d.%m.%Y %H:%M:%S";

pub const PERCENTILE: f64 = 0.95;
pub const MEDIAN: f64 = 0.5;

/// Number of entries kept in each ranking.
pub const TOP_N: usize = 3;

/// Upper bound for fetching a remote log.
pub const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
