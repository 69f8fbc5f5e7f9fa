//! Settings module - user preferences kept next to the ledger data.

mod settings_model;
mod settings_service;
mod settings_traits;

pub use settings_model::Theme;
pub use settings_service::SettingsService;
pub use settings_traits::SettingsServiceTrait;
