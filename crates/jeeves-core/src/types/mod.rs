//! Core types for jeeves.

mod language;
mod lexical;
mod region;

pub use language::*;
pub use lexical::*;
pub use region::*;
