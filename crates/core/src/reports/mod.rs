//! Reports module - summaries, balances and dashboard figures.

mod reports_calculator;
mod reports_model;

#[cfg(test)]
mod reports_calculator_tests;

pub use reports_calculator::{
    available_years, collected_for_month, customer_balances, customer_expense_years, month_grid,
    monthly_summary, overall_stats, payment_status_breakdown, total_outstanding, yearly_summary,
};
pub use reports_model::{
    CustomerBalance, DashboardSummary, MonthSlot, MonthSummary, MonthlySummary, OverallStats,
    PaymentStatusSlice,
};
