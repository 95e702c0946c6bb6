//! Integration tests for the response pipeline.
//!
//! The analyzer and lexicon are replaced by small doubles so that sentiment
//! and research results are fixed.

use async_trait::async_trait;
use jeeves_core::{
    BrainConfig, ErrorCode, InMemoryStore, JeevesError, JeevesResult, LanguageAnalyzer, Lexicon,
    LexiconAnalyzer, MemoryRegion, MemoryStore, Motor, Sentiment, TaggedToken, WordDetails,
    WordSense, APOLOGY,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Built-in tagging with a fixed polarity.
struct FixedTone(f32);

impl LanguageAnalyzer for FixedTone {
    fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
        LexiconAnalyzer::new().tag(sentence)
    }

    fn sentiment(&self, _sentence: &str) -> Sentiment {
        Sentiment::new(self.0, 0.5)
    }
}

/// Lexicon answering from a fixed table and counting lookups.
#[derive(Default)]
struct StubLexicon {
    entries: HashMap<String, WordDetails>,
    lookups: AtomicUsize,
}

impl StubLexicon {
    fn with(mut self, word: &str, senses: Vec<WordSense>) -> Self {
        self.entries.insert(
            word.to_string(),
            WordDetails {
                word: Some(word.to_string()),
                results: Some(senses),
            },
        );
        self
    }

    fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Lexicon for StubLexicon {
    async fn lookup(&self, word: &str) -> JeevesResult<WordDetails> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.entries
            .get(word)
            .cloned()
            .ok_or_else(|| JeevesError::lookup(word, ErrorCode::LexBadStatus, "404 Not Found"))
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

struct Fixture {
    store: Arc<InMemoryStore>,
    motor: Motor,
}

async fn fixture(polarity: f32, lexicon: Option<Arc<StubLexicon>>) -> Fixture {
    let store = Arc::new(InMemoryStore::new());
    let lexicon = lexicon.map(|l| l as Arc<dyn Lexicon>);
    let motor = Motor::new(
        store.clone(),
        lexicon,
        Arc::new(FixedTone(polarity)),
        BrainConfig::default(),
    );

    let reactions = motor.reactions();
    reactions.add_response("default", "I see.").await.unwrap();
    reactions.add_response("curse", "How rude!").await.unwrap();
    reactions.add_response("animal", "Meow!").await.unwrap();

    Fixture { store, motor }
}

async fn new_word_count(store: &InMemoryStore, word: &str) -> Option<String> {
    store.get(MemoryRegion::NewWords, word).await.unwrap()
}

#[tokio::test]
async fn test_known_word_resolves_to_its_reaction() {
    let f = fixture(0.0, None).await;
    f.store.set(MemoryRegion::Words, "cat", "animal").await.unwrap();

    assert_eq!(f.motor.resolve("i saw a cat today").await.unwrap(), "Meow!");
}

#[tokio::test]
async fn test_teaching_twice_is_stable() {
    let f = fixture(0.0, None).await;
    for _ in 0..2 {
        f.motor.resolve("please add cat to animal").await.unwrap();
    }

    assert_eq!(
        f.motor.memory().reaction_for("cat").await.unwrap().as_deref(),
        Some("animal")
    );
    assert_eq!(f.motor.resolve("a cat").await.unwrap(), "Meow!");
    assert_eq!(f.motor.resolve("a cat").await.unwrap(), "Meow!");
}

#[tokio::test]
async fn test_teaching_accented_words_round_trips() {
    let f = fixture(0.0, None).await;
    f.motor
        .reactions()
        .add_response("émotion", "Ah, Paris.")
        .await
        .unwrap();

    assert_eq!(
        f.motor.resolve("please add café to émotion").await.unwrap(),
        "I just associated word(s) café to my reaction \"émotion\"."
    );
    assert_eq!(
        f.motor.resolve("the naïve café").await.unwrap(),
        "Ah, Paris."
    );
    assert_eq!(new_word_count(&f.store, "naïve").await.as_deref(), Some("1"));
    assert_eq!(new_word_count(&f.store, "na").await, None);
}

#[tokio::test]
async fn test_unknown_word_is_counted_once_per_resolve() {
    let f = fixture(0.0, None).await;

    assert_eq!(f.motor.resolve("the zebra").await.unwrap(), "I see.");
    assert_eq!(new_word_count(&f.store, "zebra").await.as_deref(), Some("1"));

    f.motor.resolve("the zebra").await.unwrap();
    assert_eq!(new_word_count(&f.store, "zebra").await.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_routine_takes_precedence() {
    // Strongly negative tone and a known word: the routine still wins.
    let f = fixture(-0.9, None).await;
    f.store.set(MemoryRegion::Words, "foo", "animal").await.unwrap();

    let reply = f.motor.resolve("please add foo to bar").await.unwrap();
    assert_eq!(reply, "I just associated word(s) foo to my reaction \"bar\".");
    assert!(new_word_count(&f.store, "foo").await.is_none());
}

#[tokio::test]
async fn test_ignored_word_is_no_longer_heard() {
    let f = fixture(0.0, None).await;
    f.motor.resolve("my spam").await.unwrap();
    assert_eq!(new_word_count(&f.store, "spam").await.as_deref(), Some("1"));

    let reply = f.motor.resolve("please ignore cat, spam").await.unwrap();
    assert_eq!(reply, "I'm now ignoring these words: cat, spam");

    assert!(new_word_count(&f.store, "spam").await.is_none());
    f.motor.resolve("my spam and cat").await.unwrap();
    assert!(new_word_count(&f.store, "spam").await.is_none());
    assert!(new_word_count(&f.store, "cat").await.is_none());
}

#[tokio::test]
async fn test_did_you_learn_lists_by_frequency() {
    let f = fixture(0.0, None).await;
    for _ in 0..3 {
        f.store.increment(MemoryRegion::NewWords, "xyz").await.unwrap();
    }
    f.store.increment(MemoryRegion::NewWords, "abc").await.unwrap();

    assert_eq!(
        f.motor.resolve("did you learn").await.unwrap(),
        "Here's a list of the most common words I learned: xyz, abc"
    );
}

#[tokio::test]
async fn test_negative_tone_curses() {
    let f = fixture(-0.9, None).await;
    assert_eq!(f.motor.resolve("whatever you say").await.unwrap(), "How rude!");
}

#[tokio::test]
async fn test_threshold_is_strict() {
    let f = fixture(-0.7, None).await;
    assert_eq!(f.motor.resolve("whatever you say").await.unwrap(), "I see.");
}

#[tokio::test]
async fn test_research_finds_related_known_word() {
    let lexicon = Arc::new(StubLexicon::default().with(
        "kitten",
        vec![WordSense::new("young domestic cat").with_type_of(&["feline"])],
    ));
    let f = fixture(0.0, Some(lexicon.clone())).await;
    f.store.set(MemoryRegion::Words, "cat", "animal").await.unwrap();

    assert_eq!(f.motor.resolve("look, a kitten").await.unwrap(), "Meow!");

    // The researched word is counted, its candidates are not.
    assert_eq!(new_word_count(&f.store, "kitten").await.as_deref(), Some("1"));
    assert!(new_word_count(&f.store, "feline").await.is_none());
    assert!(new_word_count(&f.store, "domestic").await.is_none());
}

#[tokio::test]
async fn test_known_and_ignored_words_are_not_researched() {
    let lexicon = Arc::new(StubLexicon::default());
    let f = fixture(0.0, Some(lexicon.clone())).await;
    f.store.set(MemoryRegion::Words, "cat", "animal").await.unwrap();
    f.motor.resolve("please ignore dog").await.unwrap();

    f.motor.resolve("dog").await.unwrap();
    f.motor.resolve("cat").await.unwrap();
    assert_eq!(lexicon.lookups(), 0);
}

#[tokio::test]
async fn test_failed_research_falls_back_to_default() {
    let lexicon = Arc::new(StubLexicon::default());
    let f = fixture(0.0, Some(lexicon.clone())).await;

    assert_eq!(f.motor.resolve("the gizmo").await.unwrap(), "I see.");
    assert_eq!(lexicon.lookups(), 1);
}

#[tokio::test]
async fn test_unavailable_store_apologizes() {
    let f = fixture(0.0, None).await;
    f.store.set_offline(true);

    assert_eq!(f.motor.respond("hello there").await, APOLOGY);
    assert!(f.motor.resolve("hello there").await.unwrap_err().is_store_unavailable());
}

#[tokio::test]
async fn test_unconfigured_reaction_is_reported_as_text() {
    let store = Arc::new(InMemoryStore::new());
    let motor = Motor::new(store, None, Arc::new(FixedTone(0.0)), BrainConfig::default());

    let err = motor.resolve("hello").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ReactNotConfigured);
    assert!(motor
        .respond("hello")
        .await
        .starts_with("Sorry, something went wrong: "));
}
