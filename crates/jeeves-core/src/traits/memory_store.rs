//! Memory store trait and related configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::JeevesResult;
use crate::types::MemoryRegion;

/// Core MemoryStore trait - all store backends implement this.
///
/// Any backend failure is reported as [`JeevesError::StoreUnavailable`].
///
/// [`JeevesError::StoreUnavailable`]: crate::error::JeevesError::StoreUnavailable
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Get the value stored under `key`.
    async fn get(&self, region: MemoryRegion, key: &str) -> JeevesResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, region: MemoryRegion, key: &str, value: &str) -> JeevesResult<()>;

    /// Delete several keys in one round trip. Returns how many existed.
    async fn delete(&self, region: MemoryRegion, keys: &[String]) -> JeevesResult<usize>;

    /// List every key in a region.
    async fn list_keys(&self, region: MemoryRegion) -> JeevesResult<Vec<String>>;

    /// Atomically add one to the counter under `key`, creating it at 1.
    async fn increment(&self, region: MemoryRegion, key: &str) -> JeevesResult<i64>;

    /// Append `value` to the list under `key`. Returns the new list length.
    async fn list_append(&self, region: MemoryRegion, key: &str, value: &str)
        -> JeevesResult<usize>;

    /// Get the whole list under `key` in insertion order.
    async fn list_range(&self, region: MemoryRegion, key: &str) -> JeevesResult<Vec<String>>;

    /// Re-establish the connection to the backend.
    async fn reconnect(&self) -> JeevesResult<()>;

    /// Backend name, for logs.
    fn provider_name(&self) -> &str;
}

/// Memory store provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    #[default]
    Redis,
    Memory,
}

/// Memory store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend to use.
    pub provider: StoreProvider,
    /// Host of the store server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Port of the store server.
    pub port: u16,
    /// Password, if the server requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: StoreProvider::Redis,
            host: None,
            port: 6379,
            password: None,
        }
    }
}

impl StoreConfig {
    /// Configuration for the process-local store.
    pub fn in_memory() -> Self {
        Self {
            provider: StoreProvider::Memory,
            ..Default::default()
        }
    }

    /// Configuration for a Redis server.
    pub fn redis(host: impl Into<String>, port: u16) -> Self {
        Self {
            provider: StoreProvider::Redis,
            host: Some(host.into()),
            port,
            password: None,
        }
    }
}
