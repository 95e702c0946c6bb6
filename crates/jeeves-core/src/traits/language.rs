//! Language analyzer trait.

use crate::types::{Analysis, Sentiment, TaggedToken};

/// Part-of-speech tagging and sentiment scoring.
///
/// Analysis is CPU-bound and local, so the trait is synchronous.
pub trait LanguageAnalyzer: Send + Sync {
    /// Tokenize and tag a sentence.
    fn tag(&self, sentence: &str) -> Vec<TaggedToken>;

    /// Score the tone of a sentence.
    fn sentiment(&self, sentence: &str) -> Sentiment;

    /// Tag and score a sentence in one call.
    fn analyze(&self, sentence: &str) -> Analysis {
        Analysis {
            sentiment: self.sentiment(sentence),
            tagged_tokens: self.tag(sentence),
        }
    }
}
