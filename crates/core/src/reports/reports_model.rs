//! Report and dashboard models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::ExpenseRecord;

/// Billed and collected totals for one month across all customers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total_billed: Decimal,
    pub total_paid: Decimal,
}

impl MonthlySummary {
    pub fn outstanding(&self) -> Decimal {
        self.total_billed - self.total_paid
    }
}

/// One row of a yearly summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    /// 1-12
    pub month: u32,
    pub total_billed: Decimal,
    pub total_paid: Decimal,
}

impl MonthSummary {
    pub fn new(month: u32, summary: MonthlySummary) -> Self {
        MonthSummary {
            month,
            total_billed: summary.total_billed,
            total_paid: summary.total_paid,
        }
    }
}

/// A customer's lifetime billing position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBalance {
    pub customer_id: String,
    pub name: String,
    pub total_billed: Decimal,
    pub total_paid: Decimal,
    pub outstanding: Decimal,
}

/// Totals across every record in the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_billed: Decimal,
    pub total_paid: Decimal,
    pub total_outstanding: Decimal,
    pub active_customers: usize,
}

/// Paid/outstanding share of the overall billed amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusSlice {
    pub label: String,
    pub value: Decimal,
}

impl PaymentStatusSlice {
    pub const PAID_LABEL: &'static str = "Total Paid";
    pub const OUTSTANDING_LABEL: &'static str = "Total Outstanding";
}

/// Headline numbers for the home screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_customers: usize,
    pub total_outstanding: Decimal,
    pub collected_this_month: Decimal,
    pub collected_last_month: Decimal,
}

/// One month cell of a customer's yearly grid; `expense` is `None` when nothing was billed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSlot {
    pub year: i32,
    pub month: u32,
    pub expense: Option<ExpenseRecord>,
}
