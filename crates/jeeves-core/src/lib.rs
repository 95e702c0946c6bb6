//! jeeves-core - Core library for jeeves.
//!
//! This crate provides the types, traits, configuration and the brain of
//! jeeves, a rule-based conversational agent that answers each line of text
//! with a reaction taken from its memory.
//!
//! # Example
//!
//! ```ignore
//! use jeeves_core::{BrainConfig, InMemoryStore, LexiconAnalyzer, Motor};
//!
//! let store = Arc::new(InMemoryStore::new());
//! let motor = Motor::new(store, None, Arc::new(LexiconAnalyzer::new()), BrainConfig::default());
//!
//! motor.resolve("please add cat to animal").await?;
//! let reply = motor.respond("i saw a cat today").await;
//! ```

pub mod brain;
pub mod config;
pub mod error;
pub mod language;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use brain::{Hearing, Motor, Reactions, Research, Routine, RoutineDispatcher, APOLOGY};
pub use config::{BrainConfig, JeevesConfig};
pub use error::{ErrorCode, JeevesError, JeevesResult};
pub use language::LexiconAnalyzer;
pub use memory::{InMemoryStore, Memory};
pub use traits::{
    LanguageAnalyzer, Lexicon, LexiconConfig, MemoryStore, StoreConfig, StoreProvider,
};
pub use types::{Analysis, MemoryRegion, Sentiment, TaggedToken, WordDetails, WordSense};
