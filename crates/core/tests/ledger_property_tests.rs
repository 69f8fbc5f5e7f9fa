//! Property-based tests for the ledger.
//!
//! These check invariants that must hold for any sequence of inputs,
//! using `proptest` for case generation.

use dairytrack_core::storage::{InMemoryKeyValueStore, JsonStorage};
use dairytrack_core::{Error, LedgerConfig, LedgerService, LedgerServiceTrait, NewExpenseRecord};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;

// =============================================================================
// Generators
// =============================================================================

/// A bill for one of a handful of customers, in a small range of months.
fn arb_new_expense() -> impl Strategy<Value = NewExpenseRecord> {
    (
        prop_oneof![Just("c1"), Just("c2"), Just("c3")],
        2023i32..=2024,
        1u32..=12,
        1i64..100_000, // amount in paise
        any::<bool>(),
    )
        .prop_map(|(customer, year, month, paise, paid)| {
            NewExpenseRecord::new(customer, year, month, Decimal::new(paise, 2)).paid(paid)
        })
}

fn new_ledger() -> LedgerService {
    LedgerService::new(
        JsonStorage::new(Arc::new(InMemoryKeyValueStore::new())),
        &LedgerConfig::default(),
    )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// At most one record per customer/year/month, whatever order bills arrive in.
    #[test]
    fn prop_one_record_per_customer_month(inputs in proptest::collection::vec(arb_new_expense(), 0..60)) {
        let ledger = new_ledger();

        for input in inputs {
            let taken = ledger
                .get_expense_for_customer_by_month_year(&input.customer_id, input.year, input.month)
                .is_some();
            match ledger.add_expense(input) {
                Ok(_) => prop_assert!(!taken),
                Err(Error::DuplicateExpense { .. }) => prop_assert!(taken),
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }

        let mut seen = HashSet::new();
        for expense in ledger.get_expenses() {
            prop_assert!(seen.insert((expense.customer_id, expense.year, expense.month)));
        }
    }

    /// The yearly summary has twelve ordered rows and adds up to the ledger's totals for that year.
    #[test]
    fn prop_yearly_summary_shape_and_totals(
        inputs in proptest::collection::vec(arb_new_expense(), 0..40),
        year in 2022i32..=2025,
    ) {
        let ledger = new_ledger();
        for input in inputs {
            let _ = ledger.add_expense(input);
        }

        let summary = ledger.get_yearly_summary(year);
        prop_assert_eq!(summary.len(), 12);
        for (i, row) in summary.iter().enumerate() {
            prop_assert_eq!(row.month, i as u32 + 1);
            prop_assert!(row.total_paid <= row.total_billed);
        }

        let billed: Decimal = summary.iter().map(|m| m.total_billed).sum();
        let expected: Decimal = ledger
            .get_expenses()
            .iter()
            .filter(|e| e.year == year)
            .map(|e| e.amount)
            .sum();
        prop_assert_eq!(billed, expected);
    }

    /// Re-opening a ledger over the same store yields the same collections in the same order.
    #[test]
    fn prop_reload_round_trip(inputs in proptest::collection::vec(arb_new_expense(), 0..30)) {
        let backend = Arc::new(InMemoryKeyValueStore::new());
        let config = LedgerConfig::default();
        let ledger = LedgerService::new(JsonStorage::new(backend.clone()), &config);
        for input in inputs {
            let _ = ledger.add_expense(input);
        }

        let reopened = LedgerService::new(JsonStorage::new(backend), &config);
        prop_assert_eq!(reopened.get_expenses(), ledger.get_expenses());
    }
}
