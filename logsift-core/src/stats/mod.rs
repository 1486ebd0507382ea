//! Statistics derivation
//!
//! Turns the [`RawData`](crate::aggregate::RawData) of a finished run into an
//! immutable [`Statistics`] value for the report renderers.

mod derive;
mod error;
mod order;
mod ranking;
mod statistics;

#[cfg(test)]
mod tests;

pub use derive::derive;
pub use error::*;
pub use order::order_statistic;
pub use ranking::top_n;
pub use statistics::*;
