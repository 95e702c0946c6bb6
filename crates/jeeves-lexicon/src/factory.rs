//! Factory for creating lexicon providers.

use std::sync::Arc;

use jeeves_core::error::JeevesResult;
use jeeves_core::traits::{Lexicon, LexiconConfig};
use tracing::info;

use crate::words_api::WordsApiLexicon;

/// Factory for creating lexicon providers.
pub struct LexiconFactory;

impl LexiconFactory {
    /// Create the configured lexicon, or `None` when research is disabled.
    pub fn create(config: &LexiconConfig) -> JeevesResult<Option<Arc<dyn Lexicon>>> {
        if !config.enabled {
            info!("Lexical research disabled");
            return Ok(None);
        }
        let lexicon = WordsApiLexicon::new(config)?;
        Ok(Some(Arc::new(lexicon)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_research_needs_no_key() {
        let config = LexiconConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(LexiconFactory::create(&config).unwrap().is_none());
    }

    #[test]
    fn test_enabled_research_builds_words_api() {
        let config = LexiconConfig {
            api_key: Some("key".to_string()),
            ..Default::default()
        };
        let lexicon = LexiconFactory::create(&config).unwrap().unwrap();
        assert_eq!(lexicon.provider_name(), "wordsapi");
    }
}
