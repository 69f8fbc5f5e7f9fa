#[cfg(test)]
mod tests {
    use crate::customers::Customer;
    use crate::expenses::ExpenseRecord;
    use crate::reports::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            phone: None,
            address: None,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn expense(customer_id: &str, year: i32, month: u32, amount: Decimal, paid: bool) -> ExpenseRecord {
        let stamp = Utc.with_ymd_and_hms(year, month, 28, 12, 0, 0).unwrap();
        ExpenseRecord {
            id: format!("{}-{}-{}", customer_id, year, month),
            customer_id: customer_id.to_string(),
            year,
            month,
            amount,
            paid,
            date_added: stamp,
            last_updated: stamp,
        }
    }

    fn sample_ledger() -> (Vec<Customer>, Vec<ExpenseRecord>) {
        let customers = vec![customer("c1", "Asha"), customer("c2", "Ravi"), customer("c3", "Meena")];
        let expenses = vec![
            expense("c1", 2024, 1, dec!(100), true),
            expense("c2", 2024, 1, dec!(50), false),
            expense("c1", 2024, 2, dec!(120), false),
            expense("c3", 2024, 2, dec!(80), true),
            expense("c2", 2023, 12, dec!(45), false),
        ];
        (customers, expenses)
    }

    // ==================== Monthly / yearly ====================

    #[test]
    fn test_monthly_summary_billed_and_paid() {
        let expenses = vec![
            expense("a", 2024, 1, dec!(100), true),
            expense("b", 2024, 1, dec!(50), false),
        ];
        let summary = monthly_summary(&expenses, 2024, 1);
        assert_eq!(summary.total_billed, dec!(150));
        assert_eq!(summary.total_paid, dec!(100));
        assert_eq!(summary.outstanding(), dec!(50));
    }

    #[test]
    fn test_monthly_summary_empty_month_is_zero() {
        let (_, expenses) = sample_ledger();
        assert_eq!(monthly_summary(&expenses, 2024, 7), MonthlySummary::default());
    }

    #[test]
    fn test_yearly_summary_has_twelve_ordered_months() {
        let (_, expenses) = sample_ledger();
        let summary = yearly_summary(&expenses, 2024);

        assert_eq!(summary.len(), 12);
        for (i, row) in summary.iter().enumerate() {
            assert_eq!(row.month, i as u32 + 1);
        }
        assert_eq!(summary[0].total_billed, dec!(150));
        assert_eq!(summary[1].total_billed, dec!(200));
        assert_eq!(summary[1].total_paid, dec!(80));
        assert!(summary[2..].iter().all(|m| m.total_billed.is_zero()));
    }

    #[test]
    fn test_yearly_summary_for_empty_year() {
        let summary = yearly_summary(&[], 1999);
        assert_eq!(summary.len(), 12);
        assert_eq!(summary[11].month, 12);
    }

    // ==================== Dashboard figures ====================

    #[test]
    fn test_total_outstanding_counts_unpaid_across_years() {
        let (_, expenses) = sample_ledger();
        assert_eq!(total_outstanding(&expenses), dec!(215));
    }

    #[test]
    fn test_collected_for_month_only_counts_paid() {
        let (_, expenses) = sample_ledger();
        assert_eq!(collected_for_month(&expenses, 2024, 1), dec!(100));
        assert_eq!(collected_for_month(&expenses, 2023, 12), Decimal::ZERO);
    }

    // ==================== Balances ====================

    #[test]
    fn test_customer_balances_sorted_and_filtered() {
        let (customers, expenses) = sample_ledger();
        let balances = customer_balances(&customers, &expenses);

        // Meena has paid everything and is excluded.
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].customer_id, "c1");
        assert_eq!(balances[0].outstanding, dec!(120));
        assert_eq!(balances[0].total_billed, dec!(220));
        assert_eq!(balances[0].total_paid, dec!(100));
        assert_eq!(balances[1].customer_id, "c2");
        assert_eq!(balances[1].outstanding, dec!(95));
    }

    #[test]
    fn test_customer_balances_ignores_orphaned_records() {
        let customers = vec![customer("c1", "Asha")];
        let expenses = vec![expense("gone", 2024, 1, dec!(300), false)];
        assert!(customer_balances(&customers, &expenses).is_empty());
    }

    #[test]
    fn test_overall_stats() {
        let (customers, expenses) = sample_ledger();
        let stats = overall_stats(&customers, &expenses);

        assert_eq!(stats.total_billed, dec!(395));
        assert_eq!(stats.total_paid, dec!(180));
        assert_eq!(stats.total_outstanding, dec!(215));
        assert_eq!(stats.active_customers, 3);
    }

    #[test]
    fn test_payment_status_breakdown_drops_zero_slices() {
        let stats = OverallStats {
            total_billed: dec!(100),
            total_paid: dec!(100),
            total_outstanding: Decimal::ZERO,
            active_customers: 1,
        };
        let slices = payment_status_breakdown(&stats);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, PaymentStatusSlice::PAID_LABEL);

        assert!(payment_status_breakdown(&OverallStats::default()).is_empty());
    }

    // ==================== Years and grids ====================

    #[test]
    fn test_available_years_descending_distinct() {
        let (_, expenses) = sample_ledger();
        assert_eq!(available_years(&expenses, 2026), vec![2024, 2023]);
        assert_eq!(available_years(&[], 2026), vec![2026]);
    }

    #[test]
    fn test_customer_expense_years_includes_current_and_selected() {
        let expenses = vec![expense("c1", 2023, 4, dec!(10), false)];
        assert_eq!(
            customer_expense_years(&expenses, 2025, 2021),
            vec![2025, 2023, 2021]
        );
        assert_eq!(customer_expense_years(&[], 2025, 2025), vec![2025]);
    }

    #[test]
    fn test_month_grid_marks_billed_months() {
        let (_, expenses) = sample_ledger();
        let grid = month_grid(&expenses, "c1", 2024);

        assert_eq!(grid.len(), 12);
        assert_eq!(grid[0].expense.as_ref().map(|e| e.amount), Some(dec!(100)));
        assert_eq!(grid[1].expense.as_ref().map(|e| e.amount), Some(dec!(120)));
        assert!(grid[2..].iter().all(|slot| slot.expense.is_none()));
        assert!(grid.iter().all(|slot| slot.year == 2024));
    }
}
