use crate::aggregate::RawData;
use crate::constants::{MEDIAN, PERCENTILE, TOP_N};
use crate::stats::{
    LogMetrics, ResponseClass, ResponseCodeDistribution, Statistics, StatsError, TopRankings,
    order_statistic, top_n,
};

/// Builds the final statistics of a run.
///
/// Fails with [`StatsError::NoData`] when no line was accepted; averages and
/// order statistics are undefined in that case.
pub fn derive(mut raw: RawData) -> Result<Statistics, StatsError> {
    if raw.processed == 0 || raw.bytes_sent.is_empty() {
        return Err(StatsError::NoData);
    }
    let time_range = raw.observed.ok_or(StatsError::NoData)?;

    let samples = raw.bytes_sent.len();
    let average_response_size = raw.total_bytes() as f64 / samples as f64;

    raw.bytes_sent.sort_unstable();
    let percentile_95 = order_statistic(&raw.bytes_sent, PERCENTILE).ok_or(StatsError::NoData)?;
    let median = order_statistic(&raw.bytes_sent, MEDIAN).ok_or(StatsError::NoData)?;

    let (response_codes, total_errors) = distribute(&raw);
    let error_rate = total_errors as f64 * 100.0 / raw.processed as f64;

    Ok(Statistics {
        metrics: LogMetrics {
            processed: raw.processed,
            unparsed: raw.unparsed,
            average_response_size,
            total_errors,
        },
        top: TopRankings {
            methods: top_n(&raw.methods, TOP_N),
            resources: top_n(&raw.resources, TOP_N),
            status_codes: top_n(&raw.status_codes, TOP_N),
        },
        response_codes,
        percentile_95,
        median,
        error_rate,
        time_range,
    })
}

/// Buckets the status codes and counts the responses that are errors.
fn distribute(raw: &RawData) -> (ResponseCodeDistribution, u64) {
    let mut distribution = ResponseCodeDistribution::default();
    let mut errors = 0;

    for (code, count) in &raw.status_codes {
        // The grammar only admits three digits; a foreign grammar may not.
        let Ok(code) = code.parse::<u16>() else {
            tracing::debug!(code = code.as_str(), "skipping non-numeric status code");
            continue;
        };
        let class = ResponseClass::of(code);
        if class.is_error() {
            errors += *count;
        }
        distribution.add(class, *count);
    }

    (distribution, errors)
}
