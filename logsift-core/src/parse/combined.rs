use crate::constants::LOG_TIME_LAYOUT;
use crate::parse::{LineGrammar, LogFields};
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

// addr - user [time] "method resource version" status bytes "referer" "agent"
static COMBINED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\S+) - (\S*) \[(.*?)\] "(\S+) (\S+) (\S+)" (\d{3}) (\S+) "(.*?)" "(.*?)"$"#)
        .expect("combined log pattern must compile")
});

/// The nginx/apache "combined" access log format.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinedLogFormat;

impl LineGrammar for CombinedLogFormat {
    fn try_extract_fields<'a>(&self, line: &'a str) -> Option<LogFields<'a>> {
        let caps = COMBINED_LINE.captures(line)?;
        let text = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        let timestamp = DateTime::parse_from_str(text(3), LOG_TIME_LAYOUT).ok()?;

        Some(LogFields {
            remote_addr: text(1),
            remote_user: text(2),
            timestamp,
            method: text(4),
            resource: text(5),
            http_version: text(6),
            status: text(7),
            bytes_sent: parse_bytes(text(8)),
            bytes_raw: text(8),
            referer: text(9),
            user_agent: text(10),
        })
    }
}

/// Servers write `-` for bodiless responses; anything that is not a valid
/// size counts as zero rather than failing the line.
fn parse_bytes(raw: &str) -> u64 {
    raw.parse().unwrap_or(0)
}
