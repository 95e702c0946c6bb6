//! Built-in language analysis.
//!
//! [`LexiconAnalyzer`] is a dependency-light [`LanguageAnalyzer`]: a regex
//! tokenizer with rule-based tagging and a word-list sentiment scorer.

mod sentiment;
pub mod tagger;

pub use sentiment::SentimentScorer;

use crate::traits::LanguageAnalyzer;
use crate::types::{Sentiment, TaggedToken};

/// Rule-based tagger plus lexicon sentiment scoring.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer {
    scorer: SentimentScorer,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LanguageAnalyzer for LexiconAnalyzer {
    fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
        tagger::tag(sentence)
    }

    fn sentiment(&self, sentence: &str) -> Sentiment {
        self.scorer.score(sentence)
    }
}
