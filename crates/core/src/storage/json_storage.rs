use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::storage_traits::KeyValueStoreTrait;

/// Typed JSON view over a [`KeyValueStoreTrait`] backend.
///
/// Reads never fail: an absent key, a malformed payload or a backend error
/// all yield the caller's default. Writes serialize the whole value and
/// replace the stored payload; failures are logged and dropped, leaving the
/// caller's in-memory state as the only copy.
#[derive(Clone)]
pub struct JsonStorage {
    backend: Arc<dyn KeyValueStoreTrait>,
}

impl JsonStorage {
    pub fn new(backend: Arc<dyn KeyValueStoreTrait>) -> Self {
        Self { backend }
    }

    /// Returns the value stored under `key`, or `default_value`.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default_value: T) -> T {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored value for '{}', using default", key);
                return default_value;
            }
            Err(e) => {
                warn!("Failed to read '{}' from storage: {}. Using default.", key, e);
                return default_value;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Stored value for '{}' is malformed: {}. Using default.", key, e);
                default_value
            }
        }
    }

    /// Serializes `value` and stores it under `key`.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize value for '{}': {}", key, e);
                return;
            }
        };

        if let Err(e) = self.backend.set_item(key, &payload) {
            error!(
                "Failed to persist '{}': {}. Changes are kept in memory only.",
                key, e
            );
        }
    }
}
