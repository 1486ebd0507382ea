use crate::constants::FETCH_TIMEOUT;
use crate::source::{SourceError, discover};
use reqwest::StatusCode;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use url::Url;

/// One readable log source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Url(Url),
}

impl Input {
    pub fn name(&self) -> String {
        match self {
            Input::File(path) => path.display().to_string(),
            Input::Url(url) => url.to_string(),
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        match self {
            Input::File(path) => {
                let file = File::open(path).map_err(|e| SourceError::open(path, e))?;
                Ok(Box::new(BufReader::new(file)))
            }
            Input::Url(url) => fetch(url),
        }
    }
}

/// Expands a source argument into inputs.
///
/// `http` and `https` URLs are taken as a single remote input; anything else
/// is a glob pattern that must match at least one file.
pub fn resolve_inputs(spec: &str) -> Result<Vec<Input>, SourceError> {
    if let Some(url) = remote_url(spec) {
        return Ok(vec![Input::Url(url)]);
    }

    let files = discover(spec)?;
    if files.is_empty() {
        return Err(SourceError::NoSource {
            pattern: spec.to_string(),
        });
    }

    Ok(files.into_iter().map(Input::File).collect())
}

fn remote_url(spec: &str) -> Option<Url> {
    Url::parse(spec)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

fn fetch(url: &Url) -> Result<Box<dyn BufRead>, SourceError> {
    let request_failed = |source| SourceError::Request {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(request_failed)?;

    let response = client
        .get(url.as_str())
        .send()
        .map_err(request_failed)?;

    if response.status() != StatusCode::OK {
        return Err(SourceError::NotOk {
            url: url.to_string(),
            status: response.status(),
        });
    }

    tracing::debug!(url = %url, "fetched remote log");
    Ok(Box::new(BufReader::new(response)))
}
