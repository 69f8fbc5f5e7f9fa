use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::storage_traits::KeyValueStoreTrait;
use crate::errors::Result;

/// Process-local key-value store.
///
/// Used by tests and by sessions that have no durable backend; nothing
/// survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with raw values, e.g. a previous session's data.
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RwLock::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStoreTrait for InMemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}
