//! Log acquisition
//!
//! A source argument is either an `http(s)` URL or a glob pattern over local
//! files. Each match becomes an [`Input`] that is opened and read line by line.

mod discover;
mod error;
mod input;
mod lines;


pub use discover::discover;
pub use error::*;
pub use input::*;
pub use lines::read_lines;
