//! Ledger configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CUSTOMERS_KEY_SUFFIX, DEFAULT_NAMESPACE, EXPENSES_KEY_SUFFIX, THEME_KEY_SUFFIX,
};
use crate::{Error, Result};

/// Settings shared by every service that reads or writes the key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerConfig {
    /// Prefix for every storage key, e.g. `dairytrack` gives `dairytrack_customers`.
    pub namespace: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl LedgerConfig {
    pub fn new(namespace: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        if namespace.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "namespace cannot be empty".to_string(),
            ));
        }
        Ok(Self { namespace })
    }

    pub fn customers_key(&self) -> String {
        self.key(CUSTOMERS_KEY_SUFFIX)
    }

    pub fn expenses_key(&self) -> String {
        self.key(EXPENSES_KEY_SUFFIX)
    }

    pub fn theme_key(&self) -> String {
        self.key(THEME_KEY_SUFFIX)
    }

    fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.namespace, suffix)
    }
}
