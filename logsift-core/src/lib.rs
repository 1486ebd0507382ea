pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod constants;
pub mod logging;
pub mod parse;
pub mod report;
pub mod source;
pub mod stats;
