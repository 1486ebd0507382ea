use ahash::RandomState;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::collections::HashMap;

/// Occurrence count per distinct value.
pub type CountMap = HashMap<String, u64, RandomState>;

/// Earliest and latest timestamp among accepted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
}

impl TimeRange {
    pub fn at(ts: DateTime<FixedOffset>) -> Self {
        Self { from: ts, to: ts }
    }

    pub fn extend(&mut self, ts: DateTime<FixedOffset>) {
        if ts < self.from {
            self.from = ts;
        }
        if ts > self.to {
            self.to = ts;
        }
    }

    pub fn union(self, other: TimeRange) -> TimeRange {
        TimeRange {
            from: self.from.min(other.from),
            to: self.to.max(other.to),
        }
    }
}

/// Counters gathered during ingestion.
///
/// Every accepted line adds exactly one to `processed`, one to `methods`,
/// `resources` and `status_codes`, and pushes one entry onto `bytes_sent`.
#[derive(Debug, Clone, Default)]
pub struct RawData {
    pub processed: u64,
    pub unparsed: u64,
    pub bytes_sent: Vec<u64>,
    pub methods: CountMap,
    pub resources: CountMap,
    pub status_codes: CountMap,
    pub observed: Option<TimeRange>,
}

impl RawData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a partial result from another source into this one.
    pub fn merge(&mut self, other: RawData) {
        self.processed += other.processed;
        self.unparsed += other.unparsed;
        self.bytes_sent.extend(other.bytes_sent);

        merge_counts(&mut self.methods, other.methods);
        merge_counts(&mut self.resources, other.resources);
        merge_counts(&mut self.status_codes, other.status_codes);

        self.observed = match (self.observed, other.observed) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        };
    }

    pub fn total_bytes(&self) -> u128 {
        self.bytes_sent.iter().map(|b| u128::from(*b)).sum()
    }

    pub(crate) fn record_observed(&mut self, ts: DateTime<FixedOffset>) {
        match &mut self.observed {
            Some(range) => range.extend(ts),
            None => self.observed = Some(TimeRange::at(ts)),
        }
    }
}

pub(crate) fn bump(counts: &mut CountMap, key: &str) {
    match counts.get_mut(key) {
        Some(count) => *count += 1,
        None => {
            counts.insert(key.to_string(), 1);
        }
    }
}

fn merge_counts(into: &mut CountMap, from: CountMap) {
    for (key, count) in from {
        *into.entry(key).or_insert(0) += count;
    }
}
