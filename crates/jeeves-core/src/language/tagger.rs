//! Rule-based part-of-speech tagger.
//!
//! Closed-class words (determiners, pronouns, prepositions, auxiliaries, ...)
//! come from fixed lists. Open-class words are tagged from a small list of
//! common verbs and adjectives, then by suffix, and default to nouns.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::types::TaggedToken;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’]\p{L}+)*(?:-[\p{L}\p{N}]+)*").unwrap());

static CLOSED_CLASS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let groups: &[(&str, &[&str])] = &[
        (
            "DT",
            &[
                "a", "an", "the", "this", "that", "these", "those", "every", "each", "some",
                "any", "no", "all", "both", "another", "either", "neither",
            ],
        ),
        (
            "PRP",
            &[
                "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them",
                "myself", "yourself", "himself", "herself", "itself", "ourselves",
                "themselves", "i'm", "you're", "it's", "that's", "i've", "we're", "they're",
            ],
        ),
        ("PRP$", &["my", "your", "his", "her", "its", "our", "their", "mine", "yours"]),
        (
            "IN",
            &[
                "in", "on", "at", "of", "for", "with", "about", "from", "by", "into", "over",
                "under", "after", "before", "between", "through", "during", "without",
                "within", "than", "because", "if", "while", "since", "until", "upon",
                "against", "among", "around", "near", "as",
            ],
        ),
        ("TO", &["to"]),
        ("CC", &["and", "or", "but", "nor"]),
        ("MD", &["can", "could", "will", "would", "shall", "should", "may", "might", "must"]),
        ("WDT", &["which", "whatever"]),
        ("WP", &["what", "who", "whom", "whose"]),
        ("WRB", &["where", "when", "why", "how"]),
        (
            "RB",
            &[
                "not", "very", "too", "also", "just", "really", "so", "now", "then", "here",
                "there", "again", "always", "never", "often", "sometimes", "already",
                "still", "even", "only", "quite", "rather", "almost", "soon", "ever", "maybe",
                "perhaps", "yet", "don't", "doesn't", "didn't", "can't", "won't", "isn't",
                "aren't", "wasn't", "weren't", "couldn't", "wouldn't", "shouldn't",
            ],
        ),
        ("RP", &["up", "out", "off", "down", "away"]),
        ("UH", &["oh", "ah", "wow", "hmm", "uh", "um"]),
        ("VB", &["be", "do", "have"]),
        ("VBP", &["am", "are"]),
        ("VBZ", &["is", "has", "does"]),
        ("VBD", &["was", "were", "had", "did"]),
        ("VBN", &["been"]),
        ("VBG", &["being"]),
        (
            "CD",
            &["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"],
        ),
    ];

    groups
        .iter()
        .flat_map(|(tag, words)| words.iter().map(move |w| (*w, *tag)))
        .collect()
});

static COMMON_VERBS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let base = [
        "see", "go", "get", "make", "know", "think", "take", "come", "give", "find", "tell",
        "say", "feel", "like", "love", "hate", "want", "need", "eat", "run", "play", "hear",
        "buy", "help", "talk", "speak", "learn", "forget", "ignore", "add", "list", "try",
        "keep", "let", "put", "mean", "seem", "leave", "call", "ask", "work", "live", "look",
    ];
    let past = [
        "saw", "went", "got", "made", "knew", "thought", "took", "came", "gave", "found",
        "told", "said", "felt", "ate", "ran", "heard", "bought", "kept", "left", "meant",
    ];
    let participles = ["seen", "gone", "known", "taken", "given", "eaten", "forgotten"];

    base.iter()
        .map(|w| (*w, "VB"))
        .chain(past.iter().map(|w| (*w, "VBD")))
        .chain(participles.iter().map(|w| (*w, "VBN")))
        .collect()
});

static COMMON_ADJECTIVES: &[&str] = &[
    "good", "bad", "great", "happy", "sad", "big", "small", "new", "old", "nice", "awful",
    "terrible", "stupid", "dumb", "ugly", "pretty", "cool", "fun", "funny", "smart", "kind",
    "rude", "lame", "nasty", "best", "worst", "wrong", "right", "poor", "rich", "hot", "cold",
    "long", "short", "little", "large", "young", "angry", "glad", "sure", "perfect",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "ical"];

/// Tag a single lowercased word.
fn tag_word(word: &str) -> &'static str {
    if let Some(tag) = CLOSED_CLASS.get(word) {
        return *tag;
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return "CD";
    }
    if let Some(tag) = COMMON_VERBS.get(word) {
        return *tag;
    }
    if COMMON_ADJECTIVES.contains(&word) {
        return "JJ";
    }

    let len = word.chars().count();
    if len > 4 && word.ends_with("ly") {
        "RB"
    } else if len > 4 && word.ends_with("ing") {
        "VBG"
    } else if len > 3 && word.ends_with("ed") {
        "VBD"
    } else if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        "JJ"
    } else if len > 3 && word.ends_with('s') && !word.ends_with("ss") {
        "NNS"
    } else {
        "NN"
    }
}

/// Split a sentence into word tokens, dropping punctuation.
pub fn tokenize(sentence: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(sentence).map(|m| m.as_str()).collect()
}

/// Tokenize and tag a sentence. Token text keeps its original case.
pub fn tag(sentence: &str) -> Vec<TaggedToken> {
    tokenize(sentence)
        .into_iter()
        .map(|word| {
            let lower = word.to_lowercase().replace('’', "'");
            TaggedToken::new(word, tag_word(&lower))
        })
        .collect()
}
