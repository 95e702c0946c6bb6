//! Lexicon trait and related configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::JeevesResult;
use crate::types::WordDetails;

/// Core Lexicon trait - external lexical databases implement this.
#[async_trait]
pub trait Lexicon: Send + Sync {
    /// Look up everything the database knows about `word`.
    ///
    /// Failures are reported as `ExternalLookupFailed`.
    async fn lookup(&self, word: &str) -> JeevesResult<WordDetails>;

    /// Provider name, for logs.
    fn provider_name(&self) -> &str;
}

/// Lexicon provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Whether unknown words are researched at all.
    pub enabled: bool,
    /// Base URL; the word is appended as the last path segment.
    pub base_url: String,
    /// API key (if not using environment variable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Header carrying the API key.
    pub api_key_header: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://wordsapiv1.p.mashape.com/words/".to_string(),
            api_key: None,
            api_key_header: "X-Mashape-Key".to_string(),
            timeout_secs: 5,
        }
    }
}
