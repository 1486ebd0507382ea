use crate::parse::{FilterField, LogFields};
use chrono::{DateTime, FixedOffset};

/// Inclusive time bounds. An unset side imposes no restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: Option<DateTime<FixedOffset>>,
    pub to: Option<DateTime<FixedOffset>>,
}

impl TimeWindow {
    pub fn new(from: Option<DateTime<FixedOffset>>, to: Option<DateTime<FixedOffset>>) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, ts: &DateTime<FixedOffset>) -> bool {
        if self.from.is_some_and(|from| *ts < from) {
            return false;
        }
        if self.to.is_some_and(|to| *ts > to) {
            return false;
        }
        true
    }
}

/// Exact, case-sensitive match on a single extracted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: FilterField,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: FilterField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Builds a filter from a field name. An unrecognised name disables
    /// filtering instead of failing the run.
    pub fn from_name(name: &str, value: impl Into<String>) -> Option<Self> {
        match name.parse::<FilterField>() {
            Ok(field) => Some(Self::new(field, value)),
            Err(err) => {
                tracing::warn!(field = name, "{err}; filtering disabled");
                None
            }
        }
    }

    pub fn matches(&self, fields: &LogFields<'_>) -> bool {
        fields.field(self.field) == self.value
    }
}

/// Everything that decides whether a parsed line is accepted. Fixed for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub window: TimeWindow,
    pub filter: Option<FieldFilter>,
}

impl Criteria {
    pub fn new(window: TimeWindow, filter: Option<FieldFilter>) -> Self {
        Self { window, filter }
    }
}
