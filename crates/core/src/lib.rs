//! DairyTrack Core - customer roster, monthly billing ledger and reports.
//!
//! This crate contains the business logic for DairyTrack. It is
//! storage-agnostic: persistence goes through [`storage::KeyValueStoreTrait`],
//! implemented in memory here and durably by the `storage-sqlite` crate.

pub mod config;
pub mod constants;
pub mod customers;
pub mod errors;
pub mod expenses;
pub mod ledger;
pub mod reports;
pub mod settings;
pub mod storage;
pub mod utils;

pub use config::LedgerConfig;
pub use customers::{Customer, NewCustomer};
pub use expenses::{ExpenseRecord, NewExpenseRecord};
pub use ledger::{LedgerService, LedgerServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
