//! Researching unknown words in an external lexical database.

use std::sync::Arc;

use tracing::{debug, warn};

use super::hearing::Hearing;
use crate::error::JeevesResult;
use crate::traits::Lexicon;

/// Turns an unknown word into candidate words Jeeves may know.
#[derive(Clone)]
pub struct Research {
    lexicon: Arc<dyn Lexicon>,
    hearing: Hearing,
}

impl Research {
    pub fn new(lexicon: Arc<dyn Lexicon>, hearing: Hearing) -> Self {
        Self { lexicon, hearing }
    }

    /// Candidate words related to `word`.
    ///
    /// For every sense the database returns, the related terms and the
    /// definition go through [`Hearing::important_words_multi`]. A failed lookup
    /// is logged and yields no candidates; store errors are propagated.
    pub async fn research(&self, word: &str) -> JeevesResult<Vec<String>> {
        debug!(provider = self.lexicon.provider_name(), "Researching '{}'", word);

        let details = match self.lexicon.lookup(word).await {
            Ok(details) => details,
            Err(err) => {
                warn!(word = %word, code = err.code().as_str(), error = %err, "Research failed");
                return Ok(Vec::new());
            }
        };

        let Some(senses) = details.results else {
            return Ok(Vec::new());
        };

        let mut candidates = Vec::new();
        for sense in &senses {
            let sentences = sense.related_sentences();
            candidates.extend(self.hearing.important_words_multi(&sentences).await?);
        }
        debug!("Research on '{}' found: {}", word, candidates.join(", "));
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::error::{ErrorCode, JeevesError};
    use crate::language::LexiconAnalyzer;
    use crate::memory::{InMemoryStore, Memory};
    use crate::types::{WordDetails, WordSense};

    struct FixedLexicon(JeevesResult<WordDetails>);

    #[async_trait]
    impl Lexicon for FixedLexicon {
        async fn lookup(&self, word: &str) -> JeevesResult<WordDetails> {
            match &self.0 {
                Ok(details) => Ok(details.clone()),
                Err(_) => Err(JeevesError::lookup(word, ErrorCode::LexTimeout, "timed out")),
            }
        }

        fn provider_name(&self) -> &str {
            "fixed"
        }
    }

    fn research(result: JeevesResult<WordDetails>) -> Research {
        let memory = Memory::new(Arc::new(InMemoryStore::new()));
        let hearing = Hearing::new(Arc::new(LexiconAnalyzer::new()), memory);
        Research::new(Arc::new(FixedLexicon(result)), hearing)
    }

    #[tokio::test]
    async fn test_relations_come_before_definition() {
        let details = WordDetails {
            word: Some("kitten".to_string()),
            results: Some(vec![WordSense::new("young domestic cat").with_type_of(&["feline"])]),
        };

        let candidates = research(Ok(details)).research("kitten").await.unwrap();
        assert_eq!(candidates, vec!["feline", "young", "domestic", "cat"]);
    }

    #[tokio::test]
    async fn test_no_results_means_no_candidates() {
        let candidates = research(Ok(WordDetails::empty())).research("zzz").await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_means_no_candidates() {
        let failing = research(Err(JeevesError::Internal("unused".to_string())));
        assert!(failing.research("kitten").await.unwrap().is_empty());
    }
}
