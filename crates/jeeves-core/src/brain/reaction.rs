//! Picking a response for a reaction.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::{debug, error, warn};

use crate::error::{JeevesError, JeevesResult};
use crate::traits::MemoryStore;
use crate::types::MemoryRegion;

/// Reply used whenever the memory store cannot be reached.
pub const APOLOGY: &str =
    "Sorry, I had a moment of absence, could you please repeat what you were saying?";

/// Chooses one of the responses configured for a reaction.
///
/// Talks to the store directly: a lost connection is answered with
/// [`APOLOGY`] after a single reconnect attempt instead of being retried.
#[derive(Clone)]
pub struct Reactions {
    store: Arc<dyn MemoryStore>,
}

impl Reactions {
    pub fn new(store: Arc<dyn MemoryStore>) -> Self {
        Self { store }
    }

    /// A uniformly random response of `reaction`.
    pub async fn react(&self, reaction: &str) -> JeevesResult<String> {
        let responses = match self.store.list_range(MemoryRegion::Reactions, reaction).await {
            Ok(responses) => responses,
            Err(err) if err.is_connection_lost() => {
                warn!(error = %err, "Memory unavailable while reacting, reconnecting");
                if let Err(err) = self.store.reconnect().await {
                    error!(error = %err, "Reconnect to memory failed");
                }
                return Ok(APOLOGY.to_string());
            }
            Err(err) => return Err(err),
        };

        let response = responses
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| JeevesError::reaction_not_configured(reaction))?;
        debug!(reaction = %reaction, "Reacting with: {}", response);
        Ok(response)
    }

    /// Add a candidate response to `reaction`; returns the new number of responses.
    pub async fn add_response(&self, reaction: &str, response: &str) -> JeevesResult<usize> {
        self.store
            .list_append(MemoryRegion::Reactions, reaction, response)
            .await
    }
}
