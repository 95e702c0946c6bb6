//! Process-local memory store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::error::{JeevesError, JeevesResult};
use crate::traits::MemoryStore;
use crate::types::MemoryRegion;

#[derive(Debug, Clone)]
enum Entry {
    Value(String),
    List(Vec<String>),
}

/// Memory store kept in process memory.
///
/// Useful for the console transport, for tests, and for running without a
/// store server. It can be switched offline to simulate an outage.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    regions: RwLock<HashMap<MemoryRegion, HashMap<String, Entry>>>,
    offline: AtomicBool,
    reconnects: AtomicUsize,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail as if the server went away.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of reconnect attempts seen so far.
    pub fn reconnect_count(&self) -> usize {
        self.reconnects.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> JeevesResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(JeevesError::store_connection("in-memory store is offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl MemoryStore for InMemoryStore {
    async fn get(&self, region: MemoryRegion, key: &str) -> JeevesResult<Option<String>> {
        self.check_online()?;
        let regions = self.regions.read().await;
        match regions.get(&region).and_then(|r| r.get(key)) {
            None => Ok(None),
            Some(Entry::Value(v)) => Ok(Some(v.clone())),
            Some(Entry::List(_)) => Err(JeevesError::store_operation(format!(
                "key '{}' in {} holds a list",
                key, region
            ))),
        }
    }

    async fn set(&self, region: MemoryRegion, key: &str, value: &str) -> JeevesResult<()> {
        self.check_online()?;
        let mut regions = self.regions.write().await;
        regions
            .entry(region)
            .or_default()
            .insert(key.to_string(), Entry::Value(value.to_string()));
        Ok(())
    }

    async fn delete(&self, region: MemoryRegion, keys: &[String]) -> JeevesResult<usize> {
        self.check_online()?;
        if keys.is_empty() {
            return Ok(0);
        }
        let mut regions = self.regions.write().await;
        let Some(entries) = regions.get_mut(&region) else {
            return Ok(0);
        };
        Ok(keys.iter().filter(|k| entries.remove(k.as_str()).is_some()).count())
    }

    async fn list_keys(&self, region: MemoryRegion) -> JeevesResult<Vec<String>> {
        self.check_online()?;
        let regions = self.regions.read().await;
        Ok(regions
            .get(&region)
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default())
    }

    async fn increment(&self, region: MemoryRegion, key: &str) -> JeevesResult<i64> {
        self.check_online()?;
        let mut regions = self.regions.write().await;
        let entry = regions
            .entry(region)
            .or_default()
            .entry(key.to_string())
            .or_insert_with(|| Entry::Value("0".to_string()));

        let Entry::Value(value) = entry else {
            return Err(JeevesError::store_operation(format!(
                "key '{}' in {} holds a list",
                key, region
            )));
        };
        let count: i64 = value.parse().map_err(|_| {
            JeevesError::store_operation(format!("value of '{}' is not an integer", key))
        })?;
        *value = (count + 1).to_string();
        Ok(count + 1)
    }

    async fn list_append(
        &self,
        region: MemoryRegion,
        key: &str,
        value: &str,
    ) -> JeevesResult<usize> {
        self.check_online()?;
        let mut regions = self.regions.write().await;
        let entry = regions
            .entry(region)
            .or_default()
            .entry(key.to_string())
            .or_insert_with(|| Entry::List(Vec::new()));

        match entry {
            Entry::List(items) => {
                items.push(value.to_string());
                Ok(items.len())
            }
            Entry::Value(_) => Err(JeevesError::store_operation(format!(
                "key '{}' in {} is not a list",
                key, region
            ))),
        }
    }

    async fn list_range(&self, region: MemoryRegion, key: &str) -> JeevesResult<Vec<String>> {
        self.check_online()?;
        let regions = self.regions.read().await;
        match regions.get(&region).and_then(|r| r.get(key)) {
            None => Ok(Vec::new()),
            Some(Entry::List(items)) => Ok(items.clone()),
            Some(Entry::Value(_)) => Err(JeevesError::store_operation(format!(
                "key '{}' in {} is not a list",
                key, region
            ))),
        }
    }

    async fn reconnect(&self) -> JeevesResult<()> {
        self.reconnects.fetch_add(1, Ordering::SeqCst);
        self.check_online()
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_regions_are_isolated() {
        let store = InMemoryStore::new();
        store.set(MemoryRegion::Words, "cat", "animal").await.unwrap();

        assert_eq!(
            store.get(MemoryRegion::Words, "cat").await.unwrap(),
            Some("animal".to_string())
        );
        assert_eq!(store.get(MemoryRegion::IgnoredWords, "cat").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_increment_creates_then_adds() {
        let store = InMemoryStore::new();
        assert_eq!(store.increment(MemoryRegion::NewWords, "xyz").await.unwrap(), 1);
        assert_eq!(store.increment(MemoryRegion::NewWords, "xyz").await.unwrap(), 2);
        assert_eq!(
            store.get(MemoryRegion::NewWords, "xyz").await.unwrap(),
            Some("2".to_string())
        );
    }

    #[tokio::test]
    async fn test_delete_many_and_empty() {
        let store = InMemoryStore::new();
        store.increment(MemoryRegion::NewWords, "a").await.unwrap();
        store.increment(MemoryRegion::NewWords, "b").await.unwrap();

        assert_eq!(store.delete(MemoryRegion::NewWords, &[]).await.unwrap(), 0);
        let removed = store
            .delete(
                MemoryRegion::NewWords,
                &["a".to_string(), "b".to_string(), "missing".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(removed, 2);
        assert!(store.list_keys(MemoryRegion::NewWords).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lists_keep_duplicates_in_order() {
        let store = InMemoryStore::new();
        store.list_append(MemoryRegion::Reactions, "greet", "Hi").await.unwrap();
        store.list_append(MemoryRegion::Reactions, "greet", "Hello").await.unwrap();
        let len = store.list_append(MemoryRegion::Reactions, "greet", "Hi").await.unwrap();

        assert_eq!(len, 3);
        assert_eq!(
            store.list_range(MemoryRegion::Reactions, "greet").await.unwrap(),
            vec!["Hi", "Hello", "Hi"]
        );
        assert!(store.list_range(MemoryRegion::Reactions, "none").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_offline_store_reports_unavailable() {
        let store = InMemoryStore::new();
        store.set_offline(true);

        let err = store.get(MemoryRegion::Words, "cat").await.unwrap_err();
        assert!(err.is_store_unavailable());
        assert!(store.reconnect().await.is_err());
        assert_eq!(store.reconnect_count(), 1);

        store.set_offline(false);
        assert!(store.reconnect().await.is_ok());
    }

    #[tokio::test]
    async fn test_type_mismatch_is_an_error() {
        let store = InMemoryStore::new();
        store.set(MemoryRegion::Reactions, "greet", "Hi").await.unwrap();
        assert!(store.list_range(MemoryRegion::Reactions, "greet").await.is_err());
        assert!(store.increment(MemoryRegion::Reactions, "greet").await.is_err());
    }
}
