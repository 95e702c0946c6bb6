//! jeeves-lexicon - Lexical database providers for jeeves.
//!
//! When jeeves hears a word it doesn't know, it looks the word up in a lexical
//! database and tries the related terms instead.
//!
//! # Supported Providers
//!
//! - **WordsAPI** - `GET <base_url>/<word>` with an API key header
//!
//! # Example
//!
//! ```ignore
//! use jeeves_lexicon::LexiconFactory;
//!
//! let lexicon = LexiconFactory::create(&config.lexicon)?;
//! ```

mod factory;
mod words_api;

pub use factory::LexiconFactory;
pub use words_api::WordsApiLexicon;

// Re-export core types for convenience
pub use jeeves_core::traits::{Lexicon, LexiconConfig};
