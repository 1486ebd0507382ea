use std::io::{self, IsTerminal};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_LOG_FILE: &str = "logsift.log";

/// Initialize the logging system with environment-based filtering
///
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - Without a log file, events go to stderr so they never mix with a report
///   printed on stdout: human readable on a terminal, JSON lines otherwise
/// - With a log file, events go only to that file as JSON lines
///
/// The returned guard flushes the file writer when dropped and must be held
/// for as long as the program logs.
pub fn init_logging(log_file: Option<&Path>) -> Option<WorkerGuard> {
    match log_file {
        Some(path) => Some(init_file_logging(path)),
        None => {
            init_stderr_logging(default_log_mode());
            None
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging(mode: LogMode) {
    let pretty = matches!(mode, LogMode::Pretty).then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
            .with_filter(env_filter())
    });

    let json = matches!(mode, LogMode::Json).then(|| {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(io::stderr)
            .with_filter(env_filter())
    });

    if tracing_subscriber::registry()
        .with(pretty)
        .with(json)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }
}

fn init_file_logging(path: &Path) -> WorkerGuard {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.into());

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    if tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter()),
        )
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }

    guard
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Json,
    Pretty,
}
