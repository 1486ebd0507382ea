use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Every line was unparsed, outside the window or filtered out.
    #[error("no data were processed")]
    NoData,
}
