use crate::aggregate::{Criteria, FieldFilter, TimeWindow};
use crate::conf::{AnalyzeConfig, AnalyzeSpec, ConfigError, ReportSpec, parse_time_bound};
use crate::report::ReportFormat;
use chrono::{DateTime, FixedOffset};

impl AnalyzeSpec {
    /// Lays `over` on top of `self`; values set in `over` win.
    pub fn overlay(self, over: AnalyzeSpec) -> AnalyzeSpec {
        AnalyzeSpec {
            path: over.path.or(self.path),
            from: over.from.or(self.from),
            to: over.to.or(self.to),
            filter: over.filter.or(self.filter),
            report: ReportSpec {
                format: over.report.format.or(self.report.format),
                output: over.report.output.or(self.report.output),
            },
        }
    }

    pub fn resolve(self) -> Result<AnalyzeConfig, ConfigError> {
        let source = self
            .path
            .filter(|p| !p.trim().is_empty())
            .ok_or(ConfigError::MissingSource)?;

        let from = optional_bound(self.from.as_deref())?;
        let to = optional_bound(self.to.as_deref())?;
        if let (Some(from), Some(to)) = (from, to) {
            if to < from {
                return Err(ConfigError::WrongTimeBoundaries {
                    from: from.to_rfc3339(),
                    to: to.to_rfc3339(),
                });
            }
        }

        // An empty field name means no filter; an unknown one is ignored with a warning.
        let filter = self
            .filter
            .filter(|f| !f.field.is_empty())
            .and_then(|f| FieldFilter::from_name(&f.field, f.value));

        let format = match self.report.format.as_deref() {
            Some(name) => name
                .parse::<ReportFormat>()
                .map_err(|_| ConfigError::UnknownFormat(name.to_string()))?,
            None => ReportFormat::default(),
        };

        Ok(AnalyzeConfig {
            source,
            criteria: Criteria::new(TimeWindow::new(from, to), filter),
            format,
            output: self.report.output,
        })
    }
}

fn optional_bound(value: Option<&str>) -> Result<Option<DateTime<FixedOffset>>, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(parse_time_bound)
        .transpose()
}
