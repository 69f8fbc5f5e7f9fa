use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::KvItemDB;
use crate::config::StorageConfig;
use crate::db::{get_connection, open_pool, DbPool};
use crate::errors::IntoCore;
use crate::schema::kv_store::dsl::*;
use dairytrack_core::errors::Result;
use dairytrack_core::storage::KeyValueStoreTrait;

/// Durable [`KeyValueStoreTrait`] over a single SQLite table.
pub struct SqliteKeyValueStore {
    pool: Arc<DbPool>,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteKeyValueStore { pool }
    }

    /// Opens (creating and migrating if needed) the database named by `config`.
    pub fn open(config: &StorageConfig) -> Result<Self> {
        let db_path = config.db_path();
        debug!("Opening key-value store at {}", db_path);
        Ok(Self::new(open_pool(&db_path)?))
    }

    /// Every stored key, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        kv_store
            .select(item_key)
            .order(item_key.asc())
            .load::<String>(&mut conn)
            .into_core()
    }
}

impl KeyValueStoreTrait for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        kv_store
            .filter(item_key.eq(key))
            .select(item_value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(kv_store)
            .values(&KvItemDB {
                item_key: key.to_string(),
                item_value: value.to_string(),
            })
            .execute(&mut conn)
            .into_core()?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(kv_store.filter(item_key.eq(key)))
            .execute(&mut conn)
            .into_core()?;
        Ok(())
    }
}
