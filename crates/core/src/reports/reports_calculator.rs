//! Aggregations over ledger snapshots.
//!
//! Every function here is a pure reduction over slices of records; the
//! ledger hands in its current collections and returns the result as-is.

use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};

use super::reports_model::{
    CustomerBalance, MonthSlot, MonthSummary, MonthlySummary, OverallStats, PaymentStatusSlice,
};
use crate::customers::Customer;
use crate::expenses::ExpenseRecord;

/// Billed and paid totals for `year`/`month` across all customers.
pub fn monthly_summary(expenses: &[ExpenseRecord], year: i32, month: u32) -> MonthlySummary {
    expenses
        .iter()
        .filter(|e| e.year == year && e.month == month)
        .fold(MonthlySummary::default(), |mut acc, e| {
            acc.total_billed += e.amount;
            if e.paid {
                acc.total_paid += e.amount;
            }
            acc
        })
}

/// Twelve monthly summaries for `year`, January first.
pub fn yearly_summary(expenses: &[ExpenseRecord], year: i32) -> Vec<MonthSummary> {
    (1..=12)
        .map(|month| MonthSummary::new(month, monthly_summary(expenses, year, month)))
        .collect()
}

/// Sum of every unpaid amount.
pub fn total_outstanding(expenses: &[ExpenseRecord]) -> Decimal {
    expenses.iter().map(ExpenseRecord::outstanding).sum()
}

/// Sum of the paid amounts billed for `year`/`month`.
pub fn collected_for_month(expenses: &[ExpenseRecord], year: i32, month: u32) -> Decimal {
    expenses
        .iter()
        .filter(|e| e.paid && e.year == year && e.month == month)
        .map(|e| e.amount)
        .sum()
}

/// Customers who still owe money, largest balance first.
///
/// Records pointing at unknown customers are ignored. Customers with equal
/// balances keep their roster order.
pub fn customer_balances(customers: &[Customer], expenses: &[ExpenseRecord]) -> Vec<CustomerBalance> {
    let mut totals: HashMap<&str, (Decimal, Decimal)> = HashMap::new();
    for expense in expenses {
        let entry = totals
            .entry(expense.customer_id.as_str())
            .or_insert((Decimal::zero(), Decimal::zero()));
        entry.0 += expense.amount;
        if expense.paid {
            entry.1 += expense.amount;
        }
    }

    let mut balances: Vec<CustomerBalance> = customers
        .iter()
        .map(|customer| {
            let (total_billed, total_paid) = totals
                .get(customer.id.as_str())
                .copied()
                .unwrap_or((Decimal::zero(), Decimal::zero()));
            CustomerBalance {
                customer_id: customer.id.clone(),
                name: customer.name.clone(),
                total_billed,
                total_paid,
                outstanding: total_billed - total_paid,
            }
        })
        .filter(|balance| balance.outstanding > Decimal::zero())
        .collect();

    balances.sort_by(|a, b| b.outstanding.cmp(&a.outstanding));
    balances
}

pub fn overall_stats(customers: &[Customer], expenses: &[ExpenseRecord]) -> OverallStats {
    let total_billed: Decimal = expenses.iter().map(|e| e.amount).sum();
    let total_paid: Decimal = expenses.iter().filter(|e| e.paid).map(|e| e.amount).sum();
    OverallStats {
        total_billed,
        total_paid,
        total_outstanding: total_billed - total_paid,
        active_customers: customers.len(),
    }
}

/// Paid vs outstanding slices; zero or negative slices are dropped.
pub fn payment_status_breakdown(stats: &OverallStats) -> Vec<PaymentStatusSlice> {
    [
        (PaymentStatusSlice::PAID_LABEL, stats.total_paid),
        (
            PaymentStatusSlice::OUTSTANDING_LABEL,
            stats.total_outstanding,
        ),
    ]
    .into_iter()
    .filter(|(_, value)| *value > Decimal::zero())
    .map(|(label, value)| PaymentStatusSlice {
        label: label.to_string(),
        value,
    })
    .collect()
}

/// Distinct billed years, newest first; `[current_year]` when nothing has been billed.
pub fn available_years(expenses: &[ExpenseRecord], current_year: i32) -> Vec<i32> {
    if expenses.is_empty() {
        return vec![current_year];
    }
    let years: BTreeSet<i32> = expenses.iter().map(|e| e.year).collect();
    years.into_iter().rev().collect()
}

/// Years offered on a customer's page: their billed years plus the current and selected year.
pub fn customer_expense_years(
    customer_expenses: &[ExpenseRecord],
    current_year: i32,
    selected_year: i32,
) -> Vec<i32> {
    let mut years: BTreeSet<i32> = customer_expenses.iter().map(|e| e.year).collect();
    years.insert(current_year);
    years.insert(selected_year);
    years.into_iter().rev().collect()
}

/// January-to-December slots for one customer's `year`.
pub fn month_grid(customer_expenses: &[ExpenseRecord], customer_id: &str, year: i32) -> Vec<MonthSlot> {
    (1..=12)
        .map(|month| MonthSlot {
            year,
            month,
            expense: customer_expenses
                .iter()
                .find(|e| e.is_for(customer_id, year, month))
                .cloned(),
        })
        .collect()
}
