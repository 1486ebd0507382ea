use chrono::{DateTime, FixedOffset};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fields extracted from a single log line. String fields borrow from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFields<'a> {
    pub remote_addr: &'a str,
    pub remote_user: &'a str,
    pub timestamp: DateTime<FixedOffset>,
    pub method: &'a str,
    pub resource: &'a str,
    pub http_version: &'a str,
    /// Three digit status code, kept as text.
    pub status: &'a str,
    /// Parsed response size; `0` when the token is not a number.
    pub bytes_sent: u64,
    /// Response size token as written in the line.
    pub bytes_raw: &'a str,
    pub referer: &'a str,
    pub user_agent: &'a str,
}

impl<'a> LogFields<'a> {
    /// Value of `field` as it is compared by an exact-match filter.
    pub fn field(&self, field: FilterField) -> &'a str {
        match field {
            FilterField::RemoteAddr => self.remote_addr,
            FilterField::RemoteUser => self.remote_user,
            FilterField::Method => self.method,
            FilterField::Resource => self.resource,
            FilterField::HttpVersion => self.http_version,
            FilterField::Status => self.status,
            FilterField::BytesSent => self.bytes_raw,
            FilterField::Referer => self.referer,
            FilterField::UserAgent => self.user_agent,
        }
    }
}

/// Attributes eligible for exact-match filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    RemoteAddr,
    RemoteUser,
    Method,
    Resource,
    HttpVersion,
    Status,
    BytesSent,
    Referer,
    UserAgent,
}

impl FilterField {
    pub const ALL: [FilterField; 9] = [
        FilterField::RemoteAddr,
        FilterField::RemoteUser,
        FilterField::Method,
        FilterField::Resource,
        FilterField::HttpVersion,
        FilterField::Status,
        FilterField::BytesSent,
        FilterField::Referer,
        FilterField::UserAgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::RemoteAddr => "remote_addr",
            FilterField::RemoteUser => "remote_user",
            FilterField::Method => "http_req",
            FilterField::Resource => "resource",
            FilterField::HttpVersion => "http_version",
            FilterField::Status => "http_code",
            FilterField::BytesSent => "bytes_send",
            FilterField::Referer => "http_referer",
            FilterField::UserAgent => "http_user_agent",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown filter field '{0}'")]
pub struct UnknownFilterField(pub String);

impl FromStr for FilterField {
    type Err = UnknownFilterField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFilterField(s.to_string()))
    }
}
