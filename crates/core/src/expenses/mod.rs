//! Expenses module - monthly billing record models.

mod expenses_model;


pub use expenses_model::{round_amount, ExpenseRecord, NewExpenseRecord};
