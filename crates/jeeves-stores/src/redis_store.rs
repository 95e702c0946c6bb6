//! Redis memory store implementation.
//!
//! Each memory region lives in its own logical Redis database, numbered by
//! [`MemoryRegion::index`].

use async_trait::async_trait;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use tokio::sync::RwLock;
use tracing::{debug, info};

use jeeves_core::error::{JeevesError, JeevesResult};
use jeeves_core::traits::{MemoryStore, StoreConfig};
use jeeves_core::types::MemoryRegion;

use redis::aio::MultiplexedConnection;
use redis::{
    AsyncCommands, Client, ConnectionAddr, ConnectionInfo, RedisConnectionInfo, RedisError,
};

/// Redis memory store implementation.
pub struct RedisMemoryStore {
    host: String,
    port: u16,
    password: Option<String>,
    connections: RwLock<HashMap<MemoryRegion, MultiplexedConnection>>,
}

impl RedisMemoryStore {
    /// Connect to every region database.
    pub async fn new(config: &StoreConfig) -> JeevesResult<Self> {
        let host = config
            .host
            .clone()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| JeevesError::config_missing("REDIS_HOST is required for the redis store"))?;

        let store = Self {
            host,
            port: config.port,
            password: config.password.clone(),
            connections: RwLock::new(HashMap::new()),
        };
        store.connect_all().await?;
        Ok(store)
    }

    /// Connection info for the database of `region`.
    fn connection_info(&self, region: MemoryRegion) -> ConnectionInfo {
        ConnectionInfo {
            addr: ConnectionAddr::Tcp(self.host.clone(), self.port),
            redis: RedisConnectionInfo {
                db: i64::from(region.index()),
                password: self.password.clone(),
                ..Default::default()
            },
        }
    }

    async fn connect(&self, region: MemoryRegion) -> JeevesResult<MultiplexedConnection> {
        info!("Connecting with memory {}", region);
        let client = Client::open(self.connection_info(region))
            .map_err(|e| map_error(e, "Failed to create Redis client"))?;
        client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_error(e, "Failed to connect to Redis"))
    }

    async fn connect_all(&self) -> JeevesResult<()> {
        let mut fresh = HashMap::new();
        for region in MemoryRegion::iter() {
            fresh.insert(region, self.connect(region).await?);
        }
        *self.connections.write().await = fresh;
        Ok(())
    }

    async fn connection(&self, region: MemoryRegion) -> JeevesResult<MultiplexedConnection> {
        self.connections
            .read()
            .await
            .get(&region)
            .cloned()
            .ok_or_else(|| JeevesError::store_connection(format!("No connection to {}", region)))
    }
}

/// Lost connections are reported as connection failures so callers reconnect.
fn map_error(err: RedisError, context: &str) -> JeevesError {
    let message = format!("{}: {}", context, err);
    let mapped = if err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_io_error()
        || err.is_timeout()
    {
        JeevesError::store_connection(message)
    } else {
        JeevesError::store_operation(message)
    };
    mapped.with_source(err)
}

#[async_trait]
impl MemoryStore for RedisMemoryStore {
    async fn get(&self, region: MemoryRegion, key: &str) -> JeevesResult<Option<String>> {
        let mut conn = self.connection(region).await?;
        conn.get(key)
            .await
            .map_err(|e| map_error(e, "Failed to get key"))
    }

    async fn set(&self, region: MemoryRegion, key: &str, value: &str) -> JeevesResult<()> {
        let mut conn = self.connection(region).await?;
        conn.set(key, value)
            .await
            .map_err(|e| map_error(e, "Failed to set key"))
    }

    async fn delete(&self, region: MemoryRegion, keys: &[String]) -> JeevesResult<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.connection(region).await?;
        conn.del(keys)
            .await
            .map_err(|e| map_error(e, "Failed to delete keys"))
    }

    async fn list_keys(&self, region: MemoryRegion) -> JeevesResult<Vec<String>> {
        let mut conn = self.connection(region).await?;
        conn.keys("*")
            .await
            .map_err(|e| map_error(e, "Failed to list keys"))
    }

    async fn increment(&self, region: MemoryRegion, key: &str) -> JeevesResult<i64> {
        let mut conn = self.connection(region).await?;
        conn.incr(key, 1)
            .await
            .map_err(|e| map_error(e, "Failed to increment key"))
    }

    async fn list_append(
        &self,
        region: MemoryRegion,
        key: &str,
        value: &str,
    ) -> JeevesResult<usize> {
        let mut conn = self.connection(region).await?;
        conn.rpush(key, value)
            .await
            .map_err(|e| map_error(e, "Failed to append to list"))
    }

    async fn list_range(&self, region: MemoryRegion, key: &str) -> JeevesResult<Vec<String>> {
        let mut conn = self.connection(region).await?;
        conn.lrange(key, 0, -1)
            .await
            .map_err(|e| map_error(e, "Failed to read list"))
    }

    async fn reconnect(&self) -> JeevesResult<()> {
        debug!(host = %self.host, port = self.port, "Reconnecting to Redis");
        self.connect_all().await
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}
