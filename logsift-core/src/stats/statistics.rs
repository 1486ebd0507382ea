use crate::aggregate::TimeRange;
use serde::Serialize;

/// Final, read-only result of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub metrics: LogMetrics,
    pub top: TopRankings,
    pub response_codes: ResponseCodeDistribution,
    pub percentile_95: u64,
    pub median: u64,
    /// Share of processed lines with a 4xx or 5xx status, in percent.
    pub error_rate: f64,
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogMetrics {
    pub processed: u64,
    pub unparsed: u64,
    pub average_response_size: f64,
    pub total_errors: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopRankings {
    pub methods: Vec<KeyCount>,
    pub resources: Vec<KeyCount>,
    pub status_codes: Vec<KeyCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCount {
    pub value: String,
    pub count: u64,
}

impl KeyCount {
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl ResponseClass {
    /// Anything below 200 is informational and anything from 500 up is a
    /// server error, so every three digit code lands in a bucket.
    pub fn of(code: u16) -> Self {
        match code {
            0..=199 => ResponseClass::Informational,
            200..=299 => ResponseClass::Success,
            300..=399 => ResponseClass::Redirection,
            400..=499 => ResponseClass::ClientError,
            _ => ResponseClass::ServerError,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResponseClass::ClientError | ResponseClass::ServerError)
    }
}

/// Number of responses per status class, weighted by occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResponseCodeDistribution {
    pub informational: u64,
    pub success: u64,
    pub redirection: u64,
    pub client_error: u64,
    pub server_error: u64,
}

impl ResponseCodeDistribution {
    pub fn add(&mut self, class: ResponseClass, count: u64) {
        let bucket = match class {
            ResponseClass::Informational => &mut self.informational,
            ResponseClass::Success => &mut self.success,
            ResponseClass::Redirection => &mut self.redirection,
            ResponseClass::ClientError => &mut self.client_error,
            ResponseClass::ServerError => &mut self.server_error,
        };
        *bucket += count;
    }
}
