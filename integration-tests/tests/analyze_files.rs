use integration_tests::harness::LogDir;
use logsift_core::aggregate::{Criteria, FieldFilter, TimeWindow};
use logsift_core::cli::analyze::run_with_config;
use logsift_core::conf::{AnalyzeConfig, parse_time_bound};
use logsift_core::parse::FilterField;
use logsift_core::report::ReportFormat;
use logsift_core::stats::{KeyCount, ResponseCodeDistribution, StatsError};
use pretty_assertions::assert_eq;

fn config(source: String, criteria: Criteria) -> AnalyzeConfig {
    AnalyzeConfig {
        source,
        criteria,
        format: ReportFormat::Markdown,
        output: None,
    }
}

#[test]
fn rotated_logs_are_merged_into_one_report() {
    // Arrange
    let logs = LogDir::rotated();
    let cfg = config(logs.pattern("access.log*"), Criteria::default());

    // Act
    let outcome = run_with_config(&cfg).unwrap();

    // Assert
    let stats = &outcome.statistics;
    assert_eq!(outcome.sources, 2);
    assert_eq!(stats.metrics.processed, 10);
    assert_eq!(stats.metrics.unparsed, 1);
    assert_eq!(stats.metrics.average_response_size, 808.0);
    assert_eq!(stats.percentile_95, 2582);
    assert_eq!(stats.median, 332);
    assert_eq!(stats.metrics.total_errors, 3);
    assert_eq!(stats.error_rate, 30.0);
    assert_eq!(
        stats.top.methods,
        vec![
            KeyCount::new("GET", 8),
            KeyCount::new("HEAD", 1),
            KeyCount::new("POST", 1),
        ]
    );
    assert_eq!(
        stats.top.resources,
        vec![
            KeyCount::new("/downloads/product_1", 5),
            KeyCount::new("/downloads/product_2", 4),
            KeyCount::new("/api/upload", 1),
        ]
    );
    assert_eq!(
        stats.top.status_codes,
        vec![
            KeyCount::new("200", 4),
            KeyCount::new("304", 3),
            KeyCount::new("404", 2),
        ]
    );
    assert_eq!(
        stats.response_codes,
        ResponseCodeDistribution {
            informational: 0,
            success: 4,
            redirection: 3,
            client_error: 2,
            server_error: 1,
        }
    );
    assert_eq!(
        stats.time_range.from,
        parse_time_bound("17/May/2015:08:05:09 +0000").unwrap()
    );
    assert_eq!(
        stats.time_range.to,
        parse_time_bound("18/May/2015:10:06:12 +0000").unwrap()
    );
}

#[test]
fn markdown_report_carries_the_figures() {
    // Arrange
    let logs = LogDir::rotated();
    let cfg = config(logs.pattern("access.log*"), Criteria::default());

    // Act
    let outcome = run_with_config(&cfg).unwrap();

    // Assert
    let report = &outcome.report;
    assert!(report.contains("| Start date | 17.05.2015 08:05:09 |"));
    assert!(report.contains("| End date | 18.05.2015 10:06:12 |"));
    assert!(report.contains("| Requests | 10 |"));
    assert!(report.contains("| Average response size | 808.00 |"));
    assert!(report.contains("| Error rate, % | 30.00 |"));
    assert!(report.contains("| /downloads/product_1 | 5 |"));
    assert!(report.contains("| Server error (5xx) | 1 |"));
    assert_eq!(outcome.report_path, None);
}

#[test]
fn time_window_keeps_only_the_second_day() {
    // Arrange
    let logs = LogDir::rotated();
    let window = TimeWindow::new(Some(parse_time_bound("2015-05-18").unwrap()), None);
    let cfg = config(logs.pattern("access.log*"), Criteria::new(window, None));

    // Act
    let outcome = run_with_config(&cfg).unwrap();

    // Assert
    let stats = &outcome.statistics;
    assert_eq!(stats.metrics.processed, 4);
    assert_eq!(stats.metrics.unparsed, 1);
    assert_eq!(
        stats.time_range.from,
        parse_time_bound("18/May/2015:10:05:02 +0000").unwrap()
    );
}

#[test]
fn inclusive_window_bounds_keep_edge_lines() {
    // Arrange
    let logs = LogDir::rotated();
    let window = TimeWindow::new(
        Some(parse_time_bound("17/May/2015:08:05:09 +0000").unwrap()),
        Some(parse_time_bound("17/May/2015:08:05:57 +0000").unwrap()),
    );
    let cfg = config(logs.pattern("access.log*"), Criteria::new(window, None));

    // Act
    let outcome = run_with_config(&cfg).unwrap();

    // Assert
    assert_eq!(outcome.statistics.metrics.processed, 6);
}

#[test]
fn resource_filter_narrows_every_figure() {
    // Arrange
    let logs = LogDir::rotated();
    let filter = FieldFilter::new(FilterField::Resource, "/downloads/product_1");
    let cfg = config(
        logs.pattern("access.log*"),
        Criteria::new(TimeWindow::default(), Some(filter)),
    );

    // Act
    let outcome = run_with_config(&cfg).unwrap();

    // Assert
    let stats = &outcome.statistics;
    assert_eq!(stats.metrics.processed, 5);
    assert_eq!(stats.metrics.total_errors, 1);
    assert_eq!(stats.error_rate, 20.0);
    assert_eq!(
        stats.top.resources,
        vec![KeyCount::new("/downloads/product_1", 5)]
    );
}

#[test]
fn nothing_accepted_is_an_error() {
    // Arrange
    let logs = LogDir::rotated();
    let filter = FieldFilter::new(FilterField::Method, "DELETE");
    let cfg = config(
        logs.pattern("access.log*"),
        Criteria::new(TimeWindow::default(), Some(filter)),
    );

    // Act
    let err = run_with_config(&cfg).unwrap_err();

    // Assert
    assert_eq!(err.downcast_ref::<StatsError>(), Some(&StatsError::NoData));
}
