//! Expense record domain models.

use chrono::{DateTime, Utc};
use num_traits::Zero;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::AMOUNT_DECIMAL_PLACES;
use crate::utils::time_utils::{is_valid_month, is_within_recent_years};
use crate::{errors::ValidationError, Error, Result};

/// One customer's bill for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    pub customer_id: String,
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// Rounded to paise when stored. Persisted as a JSON number (f64), so
    /// only about 15 significant digits survive a reload.
    pub amount: Decimal,
    #[serde(default)]
    pub paid: bool,
    pub date_added: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl ExpenseRecord {
    pub(crate) fn from_new(id: String, now: DateTime<Utc>, data: NewExpenseRecord) -> Self {
        ExpenseRecord {
            id,
            customer_id: data.customer_id,
            year: data.year,
            month: data.month,
            amount: round_amount(data.amount),
            paid: data.paid,
            date_added: now,
            last_updated: now,
        }
    }

    /// Whether this record is the bill for `customer_id` in `year`/`month`.
    pub fn is_for(&self, customer_id: &str, year: i32, month: u32) -> bool {
        self.customer_id == customer_id && self.year == year && self.month == month
    }

    /// Amount still owed on this record.
    pub fn outstanding(&self) -> Decimal {
        if self.paid {
            Decimal::zero()
        } else {
            self.amount
        }
    }

    /// Validates an edited record against the selectable year window ending at `current_year`.
    pub fn validate(&self, current_year: i32) -> Result<()> {
        validate_fields(self.amount, self.year, self.month, current_year)
    }
}

/// Rounds a bill amount to paise, halves away from zero.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Input model for recording a month's bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseRecord {
    pub customer_id: String,
    pub year: i32,
    pub month: u32,
    pub amount: Decimal,
    #[serde(default)]
    pub paid: bool,
}

impl NewExpenseRecord {
    pub fn new(customer_id: impl Into<String>, year: i32, month: u32, amount: Decimal) -> Self {
        NewExpenseRecord {
            customer_id: customer_id.into(),
            year,
            month,
            amount,
            paid: false,
        }
    }

    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    /// Validates the new record against the selectable year window ending at `current_year`.
    pub fn validate(&self, current_year: i32) -> Result<()> {
        if self.customer_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "customerId".to_string(),
            )));
        }
        validate_fields(self.amount, self.year, self.month, current_year)
    }
}

fn validate_fields(amount: Decimal, year: i32, month: u32, current_year: i32) -> Result<()> {
    if amount <= Decimal::zero() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Amount must be positive.".to_string(),
        )));
    }
    if !is_valid_month(month) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Month {} is out of range 1-12",
            month
        ))));
    }
    if !is_within_recent_years(year, current_year) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Year {} is outside the selectable range ending {}",
            year, current_year
        ))));
    }
    Ok(())
}
