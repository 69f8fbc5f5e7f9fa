//! Key-value storage trait.
//!
//! The contract mirrors a synchronous string-to-string local store. Backends
//! report their failures; the typed [`JsonStorage`](super::JsonStorage)
//! wrapper decides what to do with them.

use crate::errors::Result;

/// Trait defining the contract for a synchronous key-value backend.
///
/// Implementations persist opaque string values. Every `set_item` fully
/// replaces whatever was previously stored under the key.
pub trait KeyValueStoreTrait: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
