//! Ledger module - the customer roster and expense records, with their queries.

mod ledger_service;
mod ledger_traits;


pub use ledger_service::LedgerService;
pub use ledger_traits::LedgerServiceTrait;
