//! In-memory static data store for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::store::StaticDataStore;

/// In-memory key/value store.
///
/// Cloning yields another handle to the same map, so a test can keep a clone
/// and inspect what the manager persisted. Data is lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one key.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut map = HashMap::new();
        map.insert(key.into(), value.into());
        Self {
            data: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

#[async_trait]
impl StaticDataStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.data
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.data.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::store::WEBHOOK_ID_KEY;

    #[tokio::test]
    async fn test_set_get_delete() {
        let store = MemoryStore::new();
        assert_eq!(store.get(WEBHOOK_ID_KEY).await.unwrap(), None);

        store.set(WEBHOOK_ID_KEY, "abc").await.unwrap();
        assert_eq!(store.get(WEBHOOK_ID_KEY).await.unwrap().as_deref(), Some("abc"));

        store.delete(WEBHOOK_ID_KEY).await.unwrap();
        assert!(store.is_empty().await);

        // Deleting again is fine
        store.delete(WEBHOOK_ID_KEY).await.unwrap();
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.set("k", "v").await.unwrap();
        assert_eq!(handle.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(handle.len().await, 1);
    }
}
