use crate::aggregate::{Accumulator, CountMap, Criteria, RawData, TimeRange};
use crate::stats::{KeyCount, ResponseClass, ResponseCodeDistribution, StatsError, derive};
use chrono::DateTime;
use pretty_assertions::assert_eq;

fn count_map(entries: &[(&str, u64)]) -> CountMap {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn january() -> TimeRange {
    TimeRange {
        from: DateTime::parse_from_rfc3339("2024-01-01T00:00:00+00:00").unwrap(),
        to: DateTime::parse_from_rfc3339("2024-01-31T23:59:59+00:00").unwrap(),
    }
}

fn sample_raw_data() -> RawData {
    RawData {
        processed: 50,
        unparsed: 5,
        bytes_sent: vec![100, 200, 150, 300, 250],
        methods: count_map(&[("GET", 10), ("POST", 15), ("PUT", 5)]),
        resources: count_map(&[("/home", 10), ("/about", 20)]),
        status_codes: count_map(&[("200", 43), ("404", 5), ("500", 2)]),
        observed: Some(january()),
    }
}

#[test]
fn derives_metrics_from_raw_data() {
    // Act
    let stats = derive(sample_raw_data()).unwrap();

    // Assert
    assert_eq!(stats.metrics.processed, 50);
    assert_eq!(stats.metrics.unparsed, 5);
    assert_eq!(stats.metrics.average_response_size, 200.0);
    assert_eq!(stats.percentile_95, 250);
    assert_eq!(stats.median, 200);
    assert_eq!(stats.time_range, january());
}

#[test]
fn error_rate_counts_client_and_server_errors() {
    // Act
    let stats = derive(sample_raw_data()).unwrap();

    // Assert
    assert_eq!(stats.metrics.total_errors, 7);
    assert_eq!(stats.error_rate, 14.0);
}

#[test]
fn response_codes_are_bucketed_by_class_and_weighted() {
    // Arrange
    let mut raw = sample_raw_data();
    raw.status_codes = count_map(&[
        ("101", 1),
        ("200", 20),
        ("204", 4),
        ("301", 3),
        ("304", 6),
        ("404", 9),
        ("418", 1),
        ("503", 6),
    ]);

    // Act
    let stats = derive(raw).unwrap();

    // Assert
    assert_eq!(
        stats.response_codes,
        ResponseCodeDistribution {
            informational: 1,
            success: 24,
            redirection: 9,
            client_error: 10,
            server_error: 6,
        }
    );
    assert_eq!(stats.metrics.total_errors, 16);
    assert_eq!(stats.error_rate, 32.0);
}

#[test]
fn out_of_range_codes_fall_into_outer_buckets() {
    assert_eq!(ResponseClass::of(99), ResponseClass::Informational);
    assert_eq!(ResponseClass::of(600), ResponseClass::ServerError);
    assert!(ResponseClass::of(600).is_error());
    assert!(!ResponseClass::of(302).is_error());
}

#[test]
fn error_total_follows_the_status_class() {
    // Arrange
    let mut raw = sample_raw_data();
    raw.status_codes = count_map(&[("099", 2), ("200", 40), ("451", 3), ("600", 5)]);

    // Act
    let stats = derive(raw).unwrap();

    // Assert
    assert_eq!(stats.response_codes.informational, 2);
    assert_eq!(stats.response_codes.server_error, 5);
    assert_eq!(stats.metrics.total_errors, 8);
    assert_eq!(stats.error_rate, 16.0);
}

#[test]
fn rankings_hold_top_three_of_each_map() {
    // Act
    let stats = derive(sample_raw_data()).unwrap();

    // Assert
    assert_eq!(
        stats.top.methods,
        vec![
            KeyCount::new("POST", 15),
            KeyCount::new("GET", 10),
            KeyCount::new("PUT", 5),
        ]
    );
    assert_eq!(
        stats.top.resources,
        vec![KeyCount::new("/about", 20), KeyCount::new("/home", 10)]
    );
    assert_eq!(stats.top.status_codes[0], KeyCount::new("200", 43));
}

#[test]
fn empty_raw_data_is_no_data() {
    assert_eq!(derive(RawData::new()), Err(StatsError::NoData));
}

#[test]
fn only_unparsed_lines_is_no_data() {
    // Arrange
    let mut acc = Accumulator::new(Criteria::default());
    acc.ingest_all(["junk", "more junk"]);

    // Act
    let result = derive(acc.into_raw_data());

    // Assert
    assert_eq!(result, Err(StatsError::NoData));
    assert_eq!(StatsError::NoData.to_string(), "no data were processed");
}

#[test]
fn same_lines_through_fresh_accumulators_give_same_statistics() {
    // Arrange
    let lines = [
        "10.0.0.1 - - [01/Jan/2024:10:00:00 +0000] \"GET /a HTTP/1.1\" 200 120 \"-\" \"x\"",
        "10.0.0.2 - - [01/Jan/2024:10:05:00 +0000] \"POST /b HTTP/1.1\" 404 0 \"-\" \"x\"",
        "10.0.0.3 - - [01/Jan/2024:10:10:00 +0000] \"GET /a HTTP/1.1\" 500 64 \"-\" \"x\"",
        "broken",
    ];
    let run = || {
        let mut acc = Accumulator::new(Criteria::default());
        acc.ingest_all(lines);
        derive(acc.into_raw_data()).unwrap()
    };

    // Act
    let first = run();
    let second = run();

    // Assert
    assert_eq!(first, second);
    assert_eq!(first.metrics.processed, 3);
    assert_eq!(first.metrics.unparsed, 1);
}
