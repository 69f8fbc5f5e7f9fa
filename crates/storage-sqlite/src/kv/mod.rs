//! SQLite-backed key-value store.

mod model;
mod repository;

pub use model::KvItemDB;
pub use repository::SqliteKeyValueStore;
