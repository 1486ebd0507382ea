//! Run configuration
//!
//! Settings come from an optional HCL file and from command line flags. Both
//! produce an [`AnalyzeSpec`]; flags are laid over the file and the result is
//! resolved into a checked [`AnalyzeConfig`].

mod error;
mod loader;
mod resolve;
mod time_bound;
mod types;

#[cfg(test)]
mod tests;

pub use error::*;
pub use loader::load_spec;
pub use time_bound::parse_time_bound;
pub use types::*;
