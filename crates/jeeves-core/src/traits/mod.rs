//! Core traits for jeeves collaborators.

mod language;
mod lexicon;
mod memory_store;

pub use language::*;
pub use lexicon::*;
pub use memory_store::*;
