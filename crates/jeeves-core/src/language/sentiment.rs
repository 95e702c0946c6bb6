//! Lexicon-based sentiment scoring.
//!
//! Each known word carries a polarity and a subjectivity. A negation within the
//! two preceding tokens flips and halves the polarity; an intensifier right
//! before the word strengthens it. The sentence score is the mean over the
//! scored words.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::tagger::tokenize;
use crate::types::Sentiment;

static LEXICON: Lazy<HashMap<&'static str, (f32, f32)>> = Lazy::new(|| {
    HashMap::from([
        // positive
        ("good", (0.7, 0.6)),
        ("great", (0.8, 0.75)),
        ("excellent", (1.0, 1.0)),
        ("happy", (0.8, 1.0)),
        ("love", (0.5, 0.6)),
        ("lovely", (0.5, 0.75)),
        ("nice", (0.6, 1.0)),
        ("wonderful", (1.0, 1.0)),
        ("amazing", (0.6, 0.9)),
        ("awesome", (1.0, 1.0)),
        ("fantastic", (0.4, 0.9)),
        ("beautiful", (0.85, 1.0)),
        ("best", (1.0, 0.3)),
        ("perfect", (1.0, 1.0)),
        ("glad", (0.5, 1.0)),
        ("thanks", (0.2, 0.2)),
        ("thank", (0.2, 0.2)),
        ("fun", (0.3, 0.2)),
        ("cool", (0.35, 0.65)),
        ("kind", (0.6, 0.9)),
        ("brilliant", (0.9, 1.0)),
        ("funny", (0.25, 1.0)),
        ("smart", (0.2, 0.6)),
        ("enjoy", (0.4, 0.5)),
        // negative
        ("bad", (-0.7, 0.67)),
        ("terrible", (-1.0, 1.0)),
        ("awful", (-1.0, 1.0)),
        ("horrible", (-1.0, 1.0)),
        ("worst", (-1.0, 1.0)),
        ("hate", (-0.8, 0.9)),
        ("stupid", (-0.8, 1.0)),
        ("idiot", (-0.8, 1.0)),
        ("moron", (-0.9, 1.0)),
        ("dumb", (-0.375, 0.5)),
        ("ugly", (-0.7, 1.0)),
        ("disgusting", (-1.0, 1.0)),
        ("pathetic", (-1.0, 1.0)),
        ("useless", (-0.5, 0.2)),
        ("sad", (-0.5, 1.0)),
        ("angry", (-0.5, 1.0)),
        ("annoying", (-0.8, 0.9)),
        ("boring", (-1.0, 1.0)),
        ("crap", (-0.8, 0.8)),
        ("damn", (-0.6, 0.8)),
        ("suck", (-0.7, 0.8)),
        ("sucks", (-0.7, 0.8)),
        ("wrong", (-0.5, 0.9)),
        ("poor", (-0.4, 0.6)),
        ("nasty", (-1.0, 1.0)),
        ("rude", (-0.8, 0.9)),
        ("miserable", (-1.0, 1.0)),
        ("lame", (-0.5, 0.75)),
    ])
});

const NEGATIONS: &[&str] = &[
    "not", "never", "no", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't",
    "weren't", "can't", "won't",
];

const INTENSIFIERS: &[&str] = &["very", "really", "so", "extremely", "too", "totally", "absolutely"];

/// Scores sentences against a fixed polarity lexicon.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    negation_factor: f32,
    intensifier_factor: f32,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self {
            negation_factor: -0.5,
            intensifier_factor: 1.3,
        }
    }
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a sentence. Sentences without any known word are neutral.
    pub fn score(&self, sentence: &str) -> Sentiment {
        let words: Vec<String> = tokenize(sentence)
            .into_iter()
            .map(|w| w.to_lowercase().replace('’', "'"))
            .collect();

        let mut scored = Vec::new();
        for (i, word) in words.iter().enumerate() {
            let Some(&(mut polarity, subjectivity)) = LEXICON.get(word.as_str()) else {
                continue;
            };

            if i > 0 && INTENSIFIERS.contains(&words[i - 1].as_str()) {
                polarity *= self.intensifier_factor;
            }
            let negated = words[i.saturating_sub(2)..i]
                .iter()
                .any(|w| NEGATIONS.contains(&w.as_str()));
            if negated {
                polarity *= self.negation_factor;
            }

            scored.push((polarity.clamp(-1.0, 1.0), subjectivity));
        }

        if scored.is_empty() {
            return Sentiment::neutral();
        }
        let n = scored.len() as f32;
        let polarity = scored.iter().map(|(p, _)| p).sum::<f32>() / n;
        let subjectivity = scored.iter().map(|(_, s)| s).sum::<f32>() / n;
        Sentiment::new(polarity, subjectivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polarity(sentence: &str) -> f32 {
        SentimentScorer::new().score(sentence).polarity
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        let sentiment = SentimentScorer::new().score("the cat sat on the mat");
        assert_eq!(sentiment, Sentiment::neutral());
    }

    #[test]
    fn test_insult_is_strongly_negative() {
        assert!(polarity("you are a stupid idiot") < -0.7);
        assert!(polarity("this is disgusting!") < -0.7);
    }

    #[test]
    fn test_mild_negative_stays_above_threshold() {
        let p = polarity("that was bad");
        assert!(p < 0.0 && p >= -0.7);
    }

    #[test]
    fn test_intensifier_pushes_past_threshold() {
        assert!(polarity("that was very bad") < -0.7);
    }

    #[test]
    fn test_negation_flips_and_softens() {
        let p = polarity("this is not good");
        assert!((p - (-0.35)).abs() < 1e-6);
        assert!(polarity("not terrible at all") > 0.0);
    }

    #[test]
    fn test_positive_sentence() {
        let sentiment = SentimentScorer::new().score("what a wonderful day");
        assert_eq!(sentiment.polarity, 1.0);
        assert_eq!(sentiment.subjectivity, 1.0);
    }
}
