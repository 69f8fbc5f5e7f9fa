//! Storage module - key-value backend contract and the typed JSON adapter.

mod json_storage;
mod memory_store;
mod storage_traits;

#[cfg(test)]
mod storage_tests;

pub use json_storage::JsonStorage;
pub use memory_store::InMemoryKeyValueStore;
pub use storage_traits::KeyValueStoreTrait;
