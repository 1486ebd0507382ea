pub mod fixtures;
pub mod http;
pub mod tracing;

pub use fixtures::{LogDir, access_line, rotated_logs};
pub use http::LogServer;
pub use tracing::{CapturedEvent, init_test_tracing};
