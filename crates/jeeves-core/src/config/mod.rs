//! Configuration system for jeeves.
//!
//! Configuration is read once at process start, either from a file (TOML, JSON
//! or YAML) or from environment variables. Missing required values are a fatal
//! [`JeevesError::ConfigurationMissing`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ErrorCode, JeevesError, JeevesResult};
use crate::traits::{LexiconConfig, StoreConfig, StoreProvider};

/// Settings of the response pipeline itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainConfig {
    /// Polarity strictly below this triggers the curse reaction.
    pub curse_threshold: f32,
    /// How many words the "did you learn" routine lists.
    pub common_words_limit: usize,
    /// Reaction used when nothing else matched.
    pub default_reaction: String,
    /// Reaction used for strongly negative input.
    pub curse_reaction: String,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            curse_threshold: -0.7,
            common_words_limit: 25,
            default_reaction: "default".to_string(),
            curse_reaction: "curse".to_string(),
        }
    }
}

/// Main jeeves configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JeevesConfig {
    /// Memory store configuration.
    pub store: StoreConfig,
    /// Lexical research configuration.
    pub lexicon: LexiconConfig,
    /// Pipeline configuration.
    pub brain: BrainConfig,
}

impl JeevesConfig {
    /// Default location of the configuration file (`~/.jeeves/config.toml`).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".jeeves"))
            .unwrap_or_else(|| PathBuf::from(".jeeves"))
            .join("config.toml")
    }

    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> JeevesResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        let config: Self = match ext {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| JeevesError::config_invalid(e.to_string()))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| JeevesError::config_invalid(e.to_string()))?,
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| JeevesError::config_invalid(e.to_string()))?,
            _ => {
                return Err(JeevesError::ConfigurationMissing {
                    message: "Unsupported config file format. Use .toml, .json, or .yaml"
                        .to_string(),
                    code: ErrorCode::CfgUnsupportedFormat,
                })
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> JeevesResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> JeevesResult<Self> {
        let mut config = Self::default();

        // Store configuration
        if let Some(provider) = var("JEEVES_STORE") {
            config.store.provider = match provider.to_lowercase().as_str() {
                "redis" => StoreProvider::Redis,
                "memory" | "in-memory" => StoreProvider::Memory,
                other => {
                    return Err(JeevesError::config_invalid(format!(
                        "JEEVES_STORE must be 'redis' or 'memory', got '{}'",
                        other
                    )))
                }
            };
        }
        config.store.host = var("REDIS_HOST");
        if let Some(port) = var("REDIS_PORT") {
            config.store.port = port.parse().map_err(|_| {
                JeevesError::config_invalid(format!("REDIS_PORT must be a port number, got '{}'", port))
            })?;
        }
        config.store.password = var("REDIS_PASSWORD");

        // Lexicon configuration
        if let Some(flag) = var("JEEVES_RESEARCH") {
            config.lexicon.enabled = !matches!(flag.to_lowercase().as_str(), "off" | "false" | "0");
        }
        config.lexicon.api_key = var("WORDS_API_KEY");
        if let Some(host) = var("WORDS_API_HOST") {
            config.lexicon.base_url = host;
        }
        if let Some(header) = var("WORDS_API_KEY_HEADER") {
            config.lexicon.api_key_header = header;
        }
        if let Some(timeout) = var("WORDS_API_TIMEOUT_SECS") {
            config.lexicon.timeout_secs = timeout.parse().map_err(|_| {
                JeevesError::config_invalid(format!(
                    "WORDS_API_TIMEOUT_SECS must be a number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }

        // Brain configuration
        if let Some(threshold) = var("JEEVES_CURSE_THRESHOLD") {
            config.brain.curse_threshold = threshold.parse().map_err(|_| {
                JeevesError::config_invalid(format!(
                    "JEEVES_CURSE_THRESHOLD must be a number, got '{}'",
                    threshold
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that everything the selected providers need is present.
    pub fn validate(&self) -> JeevesResult<()> {
        if self.store.provider == StoreProvider::Redis
            && self.store.host.as_deref().map_or(true, str::is_empty)
        {
            return Err(JeevesError::config_missing(
                "REDIS_HOST is required when the redis store is selected",
            ));
        }
        if self.lexicon.enabled && self.lexicon.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(JeevesError::config_missing(
                "WORDS_API_KEY is required unless research is disabled (JEEVES_RESEARCH=off)",
            ));
        }
        if self.lexicon.timeout_secs == 0 {
            return Err(JeevesError::config_invalid(
                "lexicon timeout must be at least one second",
            ));
        }
        Ok(())
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> JeevesConfigBuilder {
        JeevesConfigBuilder::default()
    }
}

/// Builder for JeevesConfig.
#[derive(Default)]
pub struct JeevesConfigBuilder {
    config: JeevesConfig,
}

impl JeevesConfigBuilder {
    /// Set store configuration.
    pub fn store(mut self, config: StoreConfig) -> Self {
        self.config.store = config;
        self
    }

    /// Set lexicon configuration.
    pub fn lexicon(mut self, config: LexiconConfig) -> Self {
        self.config.lexicon = config;
        self
    }

    /// Turn lexical research off.
    pub fn without_research(mut self) -> Self {
        self.config.lexicon.enabled = false;
        self
    }

    /// Set pipeline configuration.
    pub fn brain(mut self, config: BrainConfig) -> Self {
        self.config.brain = config;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> JeevesConfig {
        self.config
    }
}
