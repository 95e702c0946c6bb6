//! The response pipeline.

use std::sync::Arc;

use tracing::{debug, error, info};

use super::hearing::Hearing;
use super::reaction::{Reactions, APOLOGY};
use super::research::Research;
use super::routine::RoutineDispatcher;
use crate::config::BrainConfig;
use crate::error::JeevesResult;
use crate::memory::Memory;
use crate::traits::{LanguageAnalyzer, Lexicon, MemoryStore};
use crate::types::Sentiment;

/// Jeeves' motor functions: turns what he hears into a reaction.
///
/// A `Motor` owns every collaborator of the pipeline and is created once by
/// the transport. Resolution is sequential: routines first, then known words,
/// then the tone of the sentence.
#[derive(Clone)]
pub struct Motor {
    memory: Memory,
    hearing: Hearing,
    research: Option<Research>,
    reactions: Reactions,
    routines: RoutineDispatcher,
    config: BrainConfig,
}

impl Motor {
    /// Assemble a motor. Without a lexicon, unknown words are not researched.
    pub fn new(
        store: Arc<dyn MemoryStore>,
        lexicon: Option<Arc<dyn Lexicon>>,
        analyzer: Arc<dyn LanguageAnalyzer>,
        config: BrainConfig,
    ) -> Self {
        let memory = Memory::new(store.clone());
        let hearing = Hearing::new(analyzer, memory.clone());
        let research = lexicon.map(|lexicon| Research::new(lexicon, hearing.clone()));
        let routines = RoutineDispatcher::new(memory.clone(), config.common_words_limit);

        Self {
            memory,
            hearing,
            research,
            reactions: Reactions::new(store),
            routines,
            config,
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn reactions(&self) -> &Reactions {
        &self.reactions
    }

    /// Resolve lowercased input text into a reaction.
    pub async fn resolve(&self, text: &str) -> JeevesResult<String> {
        if let Some(reply) = self.routines.dispatch(text).await? {
            return Ok(reply);
        }

        if let Some(reaction) = self.search_keyword(text).await? {
            return self.reactions.react(&reaction).await;
        }

        let sentiment = self.hearing.analyzer().sentiment(text);
        let reaction = self
            .feel(&sentiment)
            .unwrap_or(self.config.default_reaction.as_str());
        self.reactions.react(reaction).await
    }

    /// Resolve `text`, turning any failure into something to say.
    pub async fn respond(&self, text: &str) -> String {
        match self.resolve(text).await {
            Ok(reply) => reply,
            Err(err) if err.is_store_unavailable() => {
                error!(error = %err, "Memory unavailable while responding");
                APOLOGY.to_string()
            }
            Err(err) => {
                error!(code = err.code().as_str(), error = %err, "Failed to respond");
                format!("Sorry, something went wrong: {}", err)
            }
        }
    }

    /// Reaction of the first important word Jeeves knows or can relate to.
    async fn search_keyword(&self, text: &str) -> JeevesResult<Option<String>> {
        for word in self.hearing.important_words(text).await? {
            if let Some(reaction) = self.check_word(&word).await? {
                return Ok(Some(reaction));
            }
        }
        Ok(None)
    }

    async fn check_word(&self, word: &str) -> JeevesResult<Option<String>> {
        debug!("Checking word {}", word);
        if let Some(reaction) = self.memory.search_word(&[word.to_string()]).await? {
            return Ok(Some(reaction));
        }

        let count = self.memory.remember_new_word(word).await?;
        debug!(word = %word, count, "Remembered new word");

        let Some(research) = &self.research else {
            return Ok(None);
        };
        let candidates = research.research(word).await?;
        self.memory.search_word(&candidates).await
    }

    /// Reaction to the tone of a sentence, if it is strong enough.
    fn feel(&self, sentiment: &Sentiment) -> Option<&str> {
        if sentiment.polarity < self.config.curse_threshold {
            info!(polarity = sentiment.polarity, "Feeling offended");
            return Some(self.config.curse_reaction.as_str());
        }
        None
    }
}
