//! Customers module - roster domain models.

mod customers_model;


pub use customers_model::{Customer, NewCustomer};
