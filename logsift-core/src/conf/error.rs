use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO / Parsing
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("no log source given; pass --path or set `path` in the config file")]
    MissingSource,

    #[error("invalid time '{value}': expected RFC 3339, '17/May/2015:08:05:24 +0000' or YYYY-MM-DD")]
    InvalidTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("time window ends ({to}) before it starts ({from})")]
    WrongTimeBoundaries { from: String, to: String },

    #[error("unknown report format '{0}' (expected markdown, adoc or json)")]
    UnknownFormat(String),
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
