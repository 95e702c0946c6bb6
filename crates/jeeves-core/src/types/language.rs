//! Language analysis output types.

use serde::{Deserialize, Serialize};

/// A token with its part-of-speech tag (Penn Treebank style, e.g. `NN`, `VBD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Nouns, verbs and adjectives carry the meaning of a sentence.
    pub fn is_content_word(&self) -> bool {
        ["NN", "VB", "JJ"].iter().any(|p| self.tag.starts_with(p))
    }
}

/// Tone of a sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// From -1.0 (very negative) to 1.0 (very positive).
    pub polarity: f32,
    /// From 0.0 (objective) to 1.0 (subjective).
    pub subjectivity: f32,
}

impl Sentiment {
    pub fn new(polarity: f32, subjectivity: f32) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Full analysis of a sentence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub sentiment: Sentiment,
    pub tagged_tokens: Vec<TaggedToken>,
}
