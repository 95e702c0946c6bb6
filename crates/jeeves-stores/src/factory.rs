//! Factory for creating memory store backends.

use std::sync::Arc;

use jeeves_core::error::{JeevesError, JeevesResult};
use jeeves_core::memory::InMemoryStore;
use jeeves_core::traits::{MemoryStore, StoreConfig, StoreProvider};
use tracing::info;

/// Factory for creating memory store backends.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a memory store from the given configuration.
    pub async fn create(config: &StoreConfig) -> JeevesResult<Arc<dyn MemoryStore>> {
        info!(provider = ?config.provider, "Opening memory store");
        match config.provider {
            StoreProvider::Memory => Ok(Arc::new(InMemoryStore::new())),

            #[cfg(feature = "redis")]
            StoreProvider::Redis => {
                let store = crate::redis_store::RedisMemoryStore::new(config).await?;
                Ok(Arc::new(store))
            }

            #[allow(unreachable_patterns)]
            provider => Err(JeevesError::config_invalid(format!(
                "Store provider {:?} is not compiled in",
                provider
            ))),
        }
    }

    /// Create a process-local store.
    pub fn in_memory() -> Arc<dyn MemoryStore> {
        Arc::new(InMemoryStore::new())
    }

    /// Create a Redis store.
    #[cfg(feature = "redis")]
    pub async fn redis(host: &str, port: u16) -> JeevesResult<Arc<dyn MemoryStore>> {
        Self::create(&StoreConfig::redis(host, port)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory() {
        let store = StoreFactory::create(&StoreConfig::in_memory()).await.unwrap();
        assert_eq!(store.provider_name(), "memory");
    }

    #[cfg(feature = "redis")]
    #[tokio::test]
    async fn test_redis_without_host_is_missing_configuration() {
        let config = StoreConfig {
            host: None,
            ..StoreConfig::redis("unused", 6379)
        };
        let err = StoreFactory::create(&config).await.err().unwrap();
        assert_eq!(err.code(), jeeves_core::ErrorCode::CfgMissingValue);
    }
}
