//! Streaming accumulation
//!
//! Lines flow through an [`Accumulator`] one at a time:
//!
//! raw line
//! LineGrammar
//! time window check
//! field filter check
//! RawData
//!
//! A line that fails to parse only bumps the unparsed counter. A line that
//! parses but falls outside the window or fails the filter touches nothing.
//! Everything else is an accepted line and is counted everywhere at once.

mod accumulator;
mod criteria;
mod raw_data;


pub use accumulator::*;
pub use criteria::*;
pub use raw_data::*;
