use crate::aggregate::raw_data::bump;
use crate::aggregate::{Criteria, RawData};
use crate::parse::{CombinedLogFormat, LineGrammar};

/// What happened to a single ingested line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Unparsed,
    OutsideWindow,
    FilteredOut,
}

/// Owns the [`RawData`] of one source (or one run) while lines are fed in.
pub struct Accumulator<G: LineGrammar = CombinedLogFormat> {
    grammar: G,
    criteria: Criteria,
    data: RawData,
}

impl Accumulator<CombinedLogFormat> {
    pub fn new(criteria: Criteria) -> Self {
        Self::with_grammar(CombinedLogFormat, criteria)
    }
}

impl<G: LineGrammar> Accumulator<G> {
    pub fn with_grammar(grammar: G, criteria: Criteria) -> Self {
        Self {
            grammar,
            criteria,
            data: RawData::new(),
        }
    }

    pub fn data(&self) -> &RawData {
        &self.data
    }

    pub fn into_raw_data(self) -> RawData {
        self.data
    }

    /// Window first, then filter; the observed range only moves for lines
    /// that pass both.
    pub fn ingest(&mut self, line: &str) -> Outcome {
        let Some(fields) = self.grammar.try_extract_fields(line) else {
            self.data.unparsed += 1;
            tracing::debug!(line, "unparsed log line");
            return Outcome::Unparsed;
        };

        if !self.criteria.window.contains(&fields.timestamp) {
            return Outcome::OutsideWindow;
        }

        if let Some(filter) = &self.criteria.filter {
            if !filter.matches(&fields) {
                return Outcome::FilteredOut;
            }
        }

        let data = &mut self.data;
        data.record_observed(fields.timestamp);
        data.processed += 1;
        bump(&mut data.methods, fields.method);
        bump(&mut data.resources, fields.resource);
        bump(&mut data.status_codes, fields.status);
        data.bytes_sent.push(fields.bytes_sent);

        Outcome::Accepted
    }

    pub fn ingest_all<'l>(&mut self, lines: impl IntoIterator<Item = &'l str>) {
        for line in lines {
            self.ingest(line);
        }
    }
}
