//! Per-node static data storage.
//!
//! The only field the trigger persists is the remote webhook id, but the
//! store is a plain string key/value map so the same backend can hold other
//! node state.

use async_trait::async_trait;

use crate::error::StoreResult;

/// Key under which the remote subscription id is persisted.
pub const WEBHOOK_ID_KEY: &str = "webhookId";

#[async_trait]
pub trait StaticDataStore: Send + Sync {
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> StoreResult<()>;
}

#[async_trait]
impl<S: StaticDataStore + ?Sized> StaticDataStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value).await
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key).await
    }
}
