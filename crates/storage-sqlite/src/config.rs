//! Environment-driven storage configuration.

use serde::{Deserialize, Serialize};
use std::env;

use crate::db::get_db_path;
use dairytrack_core::constants::DEFAULT_NAMESPACE;
use dairytrack_core::{LedgerConfig, Result};

pub const DATA_DIR_ENV: &str = "DAIRYTRACK_DATA_DIR";
pub const NAMESPACE_ENV: &str = "DAIRYTRACK_NAMESPACE";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    pub app_data_dir: String,
    pub namespace: String,
    /// Explicit database file, taking precedence over `app_data_dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            app_data_dir: DEFAULT_DATA_DIR.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            database_url: None,
        }
    }
}

impl StorageConfig {
    /// Config rooted at `app_data_dir` with the default namespace.
    pub fn new(app_data_dir: impl Into<String>) -> Self {
        Self {
            app_data_dir: app_data_dir.into(),
            ..Self::default()
        }
    }

    /// Reads the config from the process environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            app_data_dir: var(DATA_DIR_ENV).unwrap_or(defaults.app_data_dir),
            namespace: var(NAMESPACE_ENV).unwrap_or(defaults.namespace),
            database_url: var(DATABASE_URL_ENV),
        }
    }

    pub fn db_path(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => get_db_path(&self.app_data_dir),
        }
    }

    pub fn ledger_config(&self) -> Result<LedgerConfig> {
        LedgerConfig::new(self.namespace.clone())
    }
}
