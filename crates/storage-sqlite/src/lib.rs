//! SQLite storage for DairyTrack.
//!
//! Implements the key-value contract from `dairytrack-core` on a single
//! `kv_store` table through Diesel and an r2d2 pool. Each key holds the full
//! JSON text of one collection, so the ledger itself stays storage-agnostic.
//!
//! ```text
//! core (LedgerService, JsonStorage)
//!                  │ KeyValueStoreTrait
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod config;
pub mod db;
pub mod errors;
pub mod kv;
pub mod schema;

pub use config::StorageConfig;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, open_pool, run_migrations, DbConnection,
    DbPool,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use kv::SqliteKeyValueStore;

// Re-export from dairytrack-core for convenience
pub use dairytrack_core::errors::{DatabaseError, Error, Result};

/// Opens the store described by `config`, creating and migrating the database if needed.
pub fn open_store(config: &StorageConfig) -> Result<SqliteKeyValueStore> {
    SqliteKeyValueStore::open(config)
}
