//! Picking out the words of a sentence that matter.

use std::sync::Arc;

use crate::error::JeevesResult;
use crate::memory::Memory;
use crate::traits::LanguageAnalyzer;

/// Extracts the important words of sentences.
///
/// Important words are nouns, verbs and adjectives, lowercased, that are not on
/// the ignore list. Order is preserved and duplicates are kept.
#[derive(Clone)]
pub struct Hearing {
    analyzer: Arc<dyn LanguageAnalyzer>,
    memory: Memory,
}

impl Hearing {
    pub fn new(analyzer: Arc<dyn LanguageAnalyzer>, memory: Memory) -> Self {
        Self { analyzer, memory }
    }

    pub fn analyzer(&self) -> &Arc<dyn LanguageAnalyzer> {
        &self.analyzer
    }

    /// Important words of one sentence.
    pub async fn important_words(&self, sentence: &str) -> JeevesResult<Vec<String>> {
        let words: Vec<String> = self
            .analyzer
            .tag(sentence)
            .into_iter()
            .filter(|token| token.is_content_word() && !token.word.is_empty())
            .map(|token| token.word.to_lowercase())
            .collect();

        self.memory.filter_ignored(words).await
    }

    /// Important words of several sentences, concatenated in order.
    pub async fn important_words_multi<S: AsRef<str>>(
        &self,
        sentences: &[S],
    ) -> JeevesResult<Vec<String>> {
        let mut words = Vec::new();
        for sentence in sentences {
            words.extend(self.important_words(sentence.as_ref()).await?);
        }
        Ok(words)
    }
}
