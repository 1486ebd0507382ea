use crate::conf::{AnalyzeSpec, ConfigError, FilterSpec, ReportSpec, load_spec};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn loads_full_hcl_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logsift.hcl");
    fs::write(
        &path,
        r#"
path = "/var/log/nginx/access*.log"
from = "2015-05-17"
to   = "2015-05-18T00:00:00Z"

filter {
  field = "http_code"
  value = "404"
}

report {
  format = "adoc"
  output = "report"
}
"#,
    )
    .unwrap();

    // Act
    let spec = load_spec(&path).unwrap();

    // Assert
    assert_eq!(
        spec,
        AnalyzeSpec {
            path: Some("/var/log/nginx/access*.log".to_string()),
            from: Some("2015-05-17".to_string()),
            to: Some("2015-05-18T00:00:00Z".to_string()),
            filter: Some(FilterSpec {
                field: "http_code".to_string(),
                value: "404".to_string(),
            }),
            report: ReportSpec {
                format: Some("adoc".to_string()),
                output: Some(PathBuf::from("report")),
            },
        }
    );
}

#[test]
fn empty_file_is_an_empty_spec() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logsift.hcl");
    fs::write(&path, "").unwrap();

    // Act
    let spec = load_spec(&path).unwrap();

    // Assert
    assert_eq!(spec, AnalyzeSpec::default());
}

#[test]
fn unknown_keys_are_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logsift.hcl");
    fs::write(&path, "paht = \"typo.log\"\n").unwrap();

    // Act
    let err = load_spec(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    // Act
    let err = load_spec(&PathBuf::from("/no/such/logsift.hcl")).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}
