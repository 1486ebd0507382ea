//! Line parsing
//!
//! A [`LineGrammar`] turns one raw log line into [`LogFields`], or refuses it.
//! Only the combined access-log format is implemented ([`CombinedLogFormat`]);
//! the accumulator is generic over the grammar so other layouts can be slotted
//! in without touching aggregation.

mod combined;
mod fields;
mod grammar;


pub use combined::*;
pub use fields::*;
pub use grammar::*;
