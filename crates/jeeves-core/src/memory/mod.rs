//! Jeeves' memory center.
//!
//! [`Memory`] wraps a [`MemoryStore`] backend with the word-level operations the
//! brain needs. Every operation is retried once after a reconnect when the
//! connection to the store was lost; a second failure is returned to the caller.
//! Operations the store rejects are returned without reconnecting.

mod in_memory;

pub use in_memory::InMemoryStore;

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::JeevesResult;
use crate::traits::MemoryStore;
use crate::types::MemoryRegion;

/// Value stored for every ignored word.
const IGNORED_MARKER: &str = "useless";

/// Word-level view over a memory store.
#[derive(Clone)]
pub struct Memory {
    store: Arc<dyn MemoryStore>,
}

impl Memory {
    /// Create a memory over the given backend.
    pub fn new(store: Arc<dyn MemoryStore>) -> Self {
        Self { store }
    }

    /// The underlying backend.
    pub fn store(&self) -> &Arc<dyn MemoryStore> {
        &self.store
    }

    async fn with_reconnect<'a, T, F, Fut>(&'a self, op: F) -> JeevesResult<T>
    where
        F: Fn(&'a dyn MemoryStore) -> Fut,
        Fut: Future<Output = JeevesResult<T>>,
    {
        let store = self.store.as_ref();
        match op(store).await {
            Err(err) if err.is_connection_lost() => {
                warn!(
                    provider = store.provider_name(),
                    error = %err,
                    "Lost connection with memory, reconnecting"
                );
                store.reconnect().await?;
                op(store).await
            }
            other => other,
        }
    }

    /// Reaction associated to a known word.
    pub async fn reaction_for(&self, word: &str) -> JeevesResult<Option<String>> {
        self.with_reconnect(move |store| store.get(MemoryRegion::Words, word))
            .await
    }

    /// First reaction known for any of `words`, in order.
    pub async fn search_word(&self, words: &[String]) -> JeevesResult<Option<String>> {
        if words.is_empty() {
            return Ok(None);
        }
        debug!("Searching for a match among: {}", words.join(", "));
        for word in words {
            if let Some(reaction) = self.reaction_for(word).await? {
                info!(word = %word, reaction = %reaction, "Found a reaction in memory");
                return Ok(Some(reaction));
            }
        }
        Ok(None)
    }

    /// Count one more sighting of a word Jeeves doesn't know.
    pub async fn remember_new_word(&self, word: &str) -> JeevesResult<i64> {
        self.with_reconnect(move |store| store.increment(MemoryRegion::NewWords, word))
            .await
    }

    /// Whether a word is on the ignore list.
    pub async fn is_ignored(&self, word: &str) -> JeevesResult<bool> {
        let marker = self
            .with_reconnect(move |store| store.get(MemoryRegion::IgnoredWords, word))
            .await?;
        Ok(marker.is_some())
    }

    /// Drop the ignored words from a list, keeping order.
    pub async fn filter_ignored(&self, words: Vec<String>) -> JeevesResult<Vec<String>> {
        let mut filtered = Vec::with_capacity(words.len());
        for word in words {
            if !self.is_ignored(&word).await? {
                filtered.push(word);
            }
        }
        Ok(filtered)
    }

    /// Remove words from one region. Empty input is a no-op.
    pub async fn forget(&self, words: &[String], region: MemoryRegion) -> JeevesResult<usize> {
        if words.is_empty() {
            return Ok(0);
        }
        warn!("Deleting these words from {}: {}", region, words.join(", "));
        self.with_reconnect(move |store| store.delete(region, words))
            .await
    }

    /// Put words on the ignore list.
    ///
    /// Ignored words leave `new-words` and `words` so that a word only ever
    /// lives in one region.
    pub async fn ignore(&self, words: &[String]) -> JeevesResult<()> {
        if words.is_empty() {
            return Ok(());
        }
        warn!("Adding these words to ignore memory: {}", words.join(", "));
        for word in words {
            let word = word.as_str();
            self.with_reconnect(move |store| {
                store.set(MemoryRegion::IgnoredWords, word, IGNORED_MARKER)
            })
            .await?;
        }
        self.forget(words, MemoryRegion::NewWords).await?;
        self.forget(words, MemoryRegion::Words).await?;
        Ok(())
    }

    /// Associate words to a reaction.
    ///
    /// Taught words are promoted out of `new-words` and off the ignore list.
    pub async fn add_words(&self, words: &[String], reaction: &str) -> JeevesResult<()> {
        for word in words {
            let word = word.as_str();
            self.with_reconnect(move |store| store.set(MemoryRegion::Words, word, reaction))
                .await?;
        }
        self.forget(words, MemoryRegion::NewWords).await?;
        self.forget(words, MemoryRegion::IgnoredWords).await?;
        Ok(())
    }

    /// Every key of a region, sorted.
    pub async fn list_all(&self, region: MemoryRegion) -> JeevesResult<Vec<String>> {
        let mut keys = self
            .with_reconnect(move |store| store.list_keys(region))
            .await?;
        keys.sort();
        Ok(keys)
    }

    /// The most frequently seen new words with their counters.
    ///
    /// Sorted by counter descending, then alphabetically.
    pub async fn common_words(&self, limit: usize) -> JeevesResult<Vec<(String, i64)>> {
        let keys = self
            .with_reconnect(|store| store.list_keys(MemoryRegion::NewWords))
            .await?;

        let mut frequency = Vec::with_capacity(keys.len());
        for key in keys {
            let word = key.as_str();
            let value = self
                .with_reconnect(move |store| store.get(MemoryRegion::NewWords, word))
                .await?;
            // A key deleted between the listing and the read is skipped.
            if let Some(count) = value.and_then(|v| v.parse::<i64>().ok()) {
                frequency.push((key, count));
            }
        }

        frequency.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        frequency.truncate(limit);
        Ok(frequency)
    }
}
