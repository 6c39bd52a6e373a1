//! In-memory selection store — tests and ephemeral runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;

use super::traits::SelectionStore;

/// `SelectionStore` backed by a map in process memory.
///
/// Nothing survives a restart; the durable backend is
/// [`super::libsql_backend::LibSqlSelectionStore`].
#[derive(Default)]
pub struct MemorySelectionStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SelectionStore for MemorySelectionStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.clear();
        Ok(())
    }

    async fn snapshot(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_overwrite() {
        let store = MemorySelectionStore::new();

        assert_eq!(store.get("language").await.unwrap(), None);

        store.set("language", "en").await.unwrap();
        assert_eq!(store.get("language").await.unwrap(), Some("en".to_string()));

        // Last write wins
        store.set("language", "fr").await.unwrap();
        assert_eq!(store.get("language").await.unwrap(), Some("fr".to_string()));
    }

    #[tokio::test]
    async fn remove_and_clear() {
        let store = MemorySelectionStore::new();
        store.set("language", "en").await.unwrap();
        store.set("voice", "samantha").await.unwrap();

        store.remove("language").await.unwrap();
        assert_eq!(store.get("language").await.unwrap(), None);
        assert_eq!(
            store.get("voice").await.unwrap(),
            Some("samantha".to_string())
        );

        // Removing an absent key is fine
        store.remove("language").await.unwrap();

        store.clear().await.unwrap();
        assert_eq!(store.get("voice").await.unwrap(), None);
        assert!(store.snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn snapshot_is_sorted_copy() {
        let store = MemorySelectionStore::new();
        store.set("voice", "daniel").await.unwrap();
        store.set("language", "en").await.unwrap();

        let snapshot = store.snapshot().await.unwrap();
        let keys: Vec<_> = snapshot.keys().cloned().collect();
        assert_eq!(keys, vec!["language", "voice"]);

        // Mutating after the snapshot does not affect it
        store.set("language", "de").await.unwrap();
        assert_eq!(snapshot.get("language"), Some(&"en".to_string()));
    }
}
