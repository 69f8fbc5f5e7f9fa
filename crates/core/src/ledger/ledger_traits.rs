//! Ledger service trait.
//!
//! The ledger is the only owner of the customer and expense collections.
//! Callers receive snapshots and mutate exclusively through these methods.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::customers::{Customer, NewCustomer};
use crate::errors::Result;
use crate::expenses::{ExpenseRecord, NewExpenseRecord};
use crate::reports::{
    CustomerBalance, DashboardSummary, MonthSlot, MonthSummary, MonthlySummary, OverallStats,
    PaymentStatusSlice,
};

/// Trait defining the contract for ledger operations.
///
/// Lookups on unknown ids return `None` or an empty list; they never fail.
/// The only rejection is [`Error::DuplicateExpense`](crate::Error::DuplicateExpense).
pub trait LedgerServiceTrait: Send + Sync {
    // ---- Customers ----

    /// Assigns an id and creation stamp, appends and persists.
    fn add_customer(&self, new_customer: NewCustomer) -> Customer;

    /// Replaces the customer with the same id. Unknown ids are ignored.
    ///
    /// The stored `created_at` is kept whatever the caller passes.
    fn update_customer(&self, customer: Customer);

    fn get_customer_by_id(&self, customer_id: &str) -> Option<Customer>;

    /// All customers in insertion order.
    fn get_customers(&self) -> Vec<Customer>;

    /// Customers whose name (case-insensitive) or phone contains `term`, sorted by name.
    fn search_customers(&self, term: &str) -> Vec<Customer>;

    // ---- Expenses ----

    /// Records a month's bill.
    ///
    /// Fails with `DuplicateExpense` if the customer already has a record for that month.
    fn add_expense(&self, new_expense: NewExpenseRecord) -> Result<ExpenseRecord>;

    /// Replaces the record with the same id and re-stamps `last_updated`.
    ///
    /// Unknown ids are ignored. Fails with `DuplicateExpense` if another
    /// record already holds the target customer/year/month.
    fn update_expense(&self, expense: ExpenseRecord) -> Result<()>;

    /// Adds the month's bill, or overwrites amount and paid flag on the existing one.
    ///
    /// Where `add_expense` rejects an occupied month, this edits it in place.
    /// If stored data holds several records for the month, the first is edited.
    fn upsert_expense_for_month(&self, new_expense: NewExpenseRecord) -> Result<ExpenseRecord>;

    /// Flips the paid flag. Returns the updated record, or `None` for an unknown id.
    fn toggle_expense_paid(&self, expense_id: &str) -> Result<Option<ExpenseRecord>>;

    /// All records in insertion order.
    fn get_expenses(&self) -> Vec<ExpenseRecord>;

    /// A customer's records, most recently added first.
    fn get_expenses_for_customer(&self, customer_id: &str) -> Vec<ExpenseRecord>;

    fn get_expense_for_customer_by_month_year(
        &self,
        customer_id: &str,
        year: i32,
        month: u32,
    ) -> Option<ExpenseRecord>;

    // ---- Reports ----

    fn get_monthly_summary(&self, year: i32, month: u32) -> MonthlySummary;

    /// Always twelve rows, January first.
    fn get_yearly_summary(&self, year: i32) -> Vec<MonthSummary>;

    fn get_total_outstanding(&self) -> Decimal;

    fn get_collected_for_month(&self, year: i32, month: u32) -> Decimal;

    fn get_dashboard_summary(&self, today: NaiveDate) -> DashboardSummary;

    fn get_customer_balances(&self) -> Vec<CustomerBalance>;

    fn get_overall_stats(&self) -> OverallStats;

    fn get_payment_status_breakdown(&self) -> Vec<PaymentStatusSlice>;

    fn get_available_years(&self, current_year: i32) -> Vec<i32>;

    fn get_customer_expense_years(
        &self,
        customer_id: &str,
        current_year: i32,
        selected_year: i32,
    ) -> Vec<i32>;

    fn get_customer_month_grid(&self, customer_id: &str, year: i32) -> Vec<MonthSlot>;
}
