use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use super::ledger_traits::LedgerServiceTrait;
use crate::config::LedgerConfig;
use crate::customers::{Customer, NewCustomer};
use crate::errors::{Error, Result};
use crate::expenses::{round_amount, ExpenseRecord, NewExpenseRecord};
use crate::reports::{
    self, CustomerBalance, DashboardSummary, MonthSlot, MonthSummary, MonthlySummary,
    OverallStats, PaymentStatusSlice,
};
use crate::storage::JsonStorage;
use crate::utils::time_utils::{previous_month, year_month, Clock, SystemClock};

/// In-memory ledger with write-through persistence.
///
/// Both collections are loaded once at construction. Every mutation builds
/// the next collection, writes it in full to storage, then swaps it in.
/// Storage failures are logged by [`JsonStorage`] and do not roll back the
/// in-memory change.
pub struct LedgerService {
    storage: JsonStorage,
    clock: Arc<dyn Clock>,
    customers_key: String,
    expenses_key: String,
    customers: RwLock<Vec<Customer>>,
    expenses: RwLock<Vec<ExpenseRecord>>,
}

impl LedgerService {
    /// Creates a ledger backed by `storage`, stamping records with wall-clock time.
    pub fn new(storage: JsonStorage, config: &LedgerConfig) -> Self {
        Self::with_clock(storage, config, Arc::new(SystemClock))
    }

    pub fn with_clock(storage: JsonStorage, config: &LedgerConfig, clock: Arc<dyn Clock>) -> Self {
        let customers_key = config.customers_key();
        let expenses_key = config.expenses_key();
        let customers: Vec<Customer> = storage.read(&customers_key, Vec::new());
        let expenses: Vec<ExpenseRecord> = storage.read(&expenses_key, Vec::new());

        debug!(
            "Loaded ledger '{}': {} customers, {} expense records",
            config.namespace,
            customers.len(),
            expenses.len()
        );

        LedgerService {
            storage,
            clock,
            customers_key,
            expenses_key,
            customers: RwLock::new(customers),
            expenses: RwLock::new(expenses),
        }
    }

    fn generate_id() -> String {
        Uuid::now_v7().to_string()
    }

    fn read_customers(&self) -> RwLockReadGuard<'_, Vec<Customer>> {
        self.customers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_customers(&self) -> RwLockWriteGuard<'_, Vec<Customer>> {
        self.customers.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_expenses(&self) -> RwLockReadGuard<'_, Vec<ExpenseRecord>> {
        self.expenses.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_expenses(&self) -> RwLockWriteGuard<'_, Vec<ExpenseRecord>> {
        self.expenses.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn commit_customers(&self, current: &mut Vec<Customer>, next: Vec<Customer>) {
        self.storage.write(&self.customers_key, &next);
        *current = next;
    }

    fn commit_expenses(&self, current: &mut Vec<ExpenseRecord>, next: Vec<ExpenseRecord>) {
        self.storage.write(&self.expenses_key, &next);
        *current = next;
    }

    /// Fails if a record other than `except_id` already holds the slot.
    fn ensure_slot_free(
        expenses: &[ExpenseRecord],
        customer_id: &str,
        year: i32,
        month: u32,
        except_id: Option<&str>,
    ) -> Result<()> {
        let taken = expenses
            .iter()
            .any(|e| e.is_for(customer_id, year, month) && Some(e.id.as_str()) != except_id);
        if taken {
            return Err(Error::DuplicateExpense {
                customer_id: customer_id.to_string(),
                year,
                month,
            });
        }
        Ok(())
    }

    /// Appends a new record under an already-held write lock.
    fn insert_expense(
        &self,
        current: &mut Vec<ExpenseRecord>,
        new_expense: NewExpenseRecord,
    ) -> Result<ExpenseRecord> {
        Self::ensure_slot_free(
            current,
            &new_expense.customer_id,
            new_expense.year,
            new_expense.month,
            None,
        )?;

        let expense = ExpenseRecord::from_new(Self::generate_id(), self.clock.now(), new_expense);
        let mut next = current.clone();
        next.push(expense.clone());
        self.commit_expenses(current, next);

        debug!(
            "Added expense {} for customer {} ({}-{:02}): {}",
            expense.id, expense.customer_id, expense.year, expense.month, expense.amount
        );
        Ok(expense)
    }

    /// Replaces a stored record under an already-held write lock.
    ///
    /// Returns the stored version, or `None` when the id is unknown.
    fn replace_expense(
        &self,
        current: &mut Vec<ExpenseRecord>,
        expense: ExpenseRecord,
    ) -> Result<Option<ExpenseRecord>> {
        let Some(existing) = current.iter().find(|e| e.id == expense.id) else {
            debug!("Ignoring update for unknown expense {}", expense.id);
            return Ok(None);
        };

        // Only a move to another slot can create a duplicate. Loaded data may
        // already hold several records for one slot; those stay editable.
        if !existing.is_for(&expense.customer_id, expense.year, expense.month) {
            Self::ensure_slot_free(
                current,
                &expense.customer_id,
                expense.year,
                expense.month,
                Some(expense.id.as_str()),
            )?;
        }

        let updated = ExpenseRecord {
            date_added: existing.date_added,
            last_updated: self.clock.now(),
            amount: round_amount(expense.amount),
            ..expense
        };

        let next: Vec<ExpenseRecord> = current
            .iter()
            .map(|e| {
                if e.id == updated.id {
                    updated.clone()
                } else {
                    e.clone()
                }
            })
            .collect();
        self.commit_expenses(current, next);

        debug!(
            "Updated expense {} for customer {} ({}-{:02})",
            updated.id, updated.customer_id, updated.year, updated.month
        );
        Ok(Some(updated))
    }
}

impl LedgerServiceTrait for LedgerService {
    fn add_customer(&self, new_customer: NewCustomer) -> Customer {
        let customer = Customer::from_new(Self::generate_id(), self.clock.now(), new_customer);

        let mut customers = self.write_customers();
        let mut next = customers.clone();
        next.push(customer.clone());
        self.commit_customers(&mut customers, next);

        debug!("Added customer {} ({})", customer.id, customer.name);
        customer
    }

    fn update_customer(&self, customer: Customer) {
        let mut customers = self.write_customers();
        let Some(existing) = customers.iter().find(|c| c.id == customer.id) else {
            debug!("Ignoring update for unknown customer {}", customer.id);
            return;
        };

        let updated = Customer {
            created_at: existing.created_at,
            ..customer
        };
        let next: Vec<Customer> = customers
            .iter()
            .map(|c| {
                if c.id == updated.id {
                    updated.clone()
                } else {
                    c.clone()
                }
            })
            .collect();
        self.commit_customers(&mut customers, next);

        debug!("Updated customer {}", updated.id);
    }

    fn get_customer_by_id(&self, customer_id: &str) -> Option<Customer> {
        self.read_customers()
            .iter()
            .find(|c| c.id == customer_id)
            .cloned()
    }

    fn get_customers(&self) -> Vec<Customer> {
        self.read_customers().clone()
    }

    fn search_customers(&self, term: &str) -> Vec<Customer> {
        let mut matches: Vec<Customer> = self
            .read_customers()
            .iter()
            .filter(|c| c.matches_search(term))
            .cloned()
            .collect();
        matches.sort_by_cached_key(|c| c.name.to_lowercase());
        matches
    }

    fn add_expense(&self, new_expense: NewExpenseRecord) -> Result<ExpenseRecord> {
        let mut expenses = self.write_expenses();
        self.insert_expense(&mut expenses, new_expense)
    }

    fn update_expense(&self, expense: ExpenseRecord) -> Result<()> {
        let mut expenses = self.write_expenses();
        self.replace_expense(&mut expenses, expense)?;
        Ok(())
    }

    fn upsert_expense_for_month(&self, new_expense: NewExpenseRecord) -> Result<ExpenseRecord> {
        let mut expenses = self.write_expenses();
        let existing = expenses
            .iter()
            .find(|e| e.is_for(&new_expense.customer_id, new_expense.year, new_expense.month))
            .cloned();

        match existing {
            Some(existing) => {
                let edited = ExpenseRecord {
                    amount: new_expense.amount,
                    paid: new_expense.paid,
                    ..existing
                };
                self.replace_expense(&mut expenses, edited)?.ok_or_else(|| {
                    Error::Unexpected("expense vanished while held under lock".to_string())
                })
            }
            None => self.insert_expense(&mut expenses, new_expense),
        }
    }

    fn toggle_expense_paid(&self, expense_id: &str) -> Result<Option<ExpenseRecord>> {
        let mut expenses = self.write_expenses();
        let Some(existing) = expenses.iter().find(|e| e.id == expense_id).cloned() else {
            return Ok(None);
        };

        let toggled = ExpenseRecord {
            paid: !existing.paid,
            ..existing
        };
        self.replace_expense(&mut expenses, toggled)
    }

    fn get_expenses(&self) -> Vec<ExpenseRecord> {
        self.read_expenses().clone()
    }

    fn get_expenses_for_customer(&self, customer_id: &str) -> Vec<ExpenseRecord> {
        let mut matches: Vec<ExpenseRecord> = self
            .read_expenses()
            .iter()
            .filter(|e| e.customer_id == customer_id)
            .cloned()
            .collect();
        // Ids are time-ordered, so they settle records stamped in the same instant.
        matches.sort_by(|a, b| {
            b.date_added
                .cmp(&a.date_added)
                .then_with(|| b.id.cmp(&a.id))
        });
        matches
    }

    fn get_expense_for_customer_by_month_year(
        &self,
        customer_id: &str,
        year: i32,
        month: u32,
    ) -> Option<ExpenseRecord> {
        self.read_expenses()
            .iter()
            .find(|e| e.is_for(customer_id, year, month))
            .cloned()
    }

    fn get_monthly_summary(&self, year: i32, month: u32) -> MonthlySummary {
        reports::monthly_summary(&self.read_expenses(), year, month)
    }

    fn get_yearly_summary(&self, year: i32) -> Vec<MonthSummary> {
        reports::yearly_summary(&self.read_expenses(), year)
    }

    fn get_total_outstanding(&self) -> Decimal {
        reports::total_outstanding(&self.read_expenses())
    }

    fn get_collected_for_month(&self, year: i32, month: u32) -> Decimal {
        reports::collected_for_month(&self.read_expenses(), year, month)
    }

    fn get_dashboard_summary(&self, today: NaiveDate) -> DashboardSummary {
        let (year, month) = year_month(today);
        let (last_year, last_month) = previous_month(year, month);
        let total_customers = self.read_customers().len();
        let expenses = self.read_expenses();

        DashboardSummary {
            total_customers,
            total_outstanding: reports::total_outstanding(&expenses),
            collected_this_month: reports::collected_for_month(&expenses, year, month),
            collected_last_month: reports::collected_for_month(&expenses, last_year, last_month),
        }
    }

    fn get_customer_balances(&self) -> Vec<CustomerBalance> {
        reports::customer_balances(&self.read_customers(), &self.read_expenses())
    }

    fn get_overall_stats(&self) -> OverallStats {
        reports::overall_stats(&self.read_customers(), &self.read_expenses())
    }

    fn get_payment_status_breakdown(&self) -> Vec<PaymentStatusSlice> {
        reports::payment_status_breakdown(&self.get_overall_stats())
    }

    fn get_available_years(&self, current_year: i32) -> Vec<i32> {
        reports::available_years(&self.read_expenses(), current_year)
    }

    fn get_customer_expense_years(
        &self,
        customer_id: &str,
        current_year: i32,
        selected_year: i32,
    ) -> Vec<i32> {
        let customer_expenses = self.get_expenses_for_customer(customer_id);
        reports::customer_expense_years(&customer_expenses, current_year, selected_year)
    }

    fn get_customer_month_grid(&self, customer_id: &str, year: i32) -> Vec<MonthSlot> {
        let customer_expenses = self.get_expenses_for_customer(customer_id);
        reports::month_grid(&customer_expenses, customer_id, year)
    }
}
