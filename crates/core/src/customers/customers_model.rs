//! Customer domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MIN_CUSTOMER_NAME_LEN;
use crate::{errors::ValidationError, Error, Result};

/// A household on the delivery round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Set once by the ledger when the customer is added.
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Builds a stored customer from user input.
    pub(crate) fn from_new(id: String, created_at: DateTime<Utc>, data: NewCustomer) -> Self {
        Customer {
            id,
            name: data.name,
            phone: data.phone,
            address: data.address,
            notes: data.notes,
            created_at,
        }
    }

    /// Case-insensitive match on the name, or a plain substring match on the phone.
    ///
    /// An empty term matches every customer.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term.to_lowercase())
            || self
                .phone
                .as_deref()
                .is_some_and(|phone| phone.contains(term))
    }

    /// Validates an edited customer before it is handed to the ledger.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_name(&self.name)
    }
}

/// Input model for adding a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>) -> Self {
        NewCustomer {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Validates the new customer data.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().chars().count() < MIN_CUSTOMER_NAME_LEN {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Name must be at least {} characters.",
            MIN_CUSTOMER_NAME_LEN
        ))));
    }
    Ok(())
}
