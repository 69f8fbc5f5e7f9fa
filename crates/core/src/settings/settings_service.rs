use log::debug;

use super::settings_model::Theme;
use super::settings_traits::SettingsServiceTrait;
use crate::config::LedgerConfig;
use crate::storage::JsonStorage;

pub struct SettingsService {
    storage: JsonStorage,
    theme_key: String,
}

impl SettingsService {
    pub fn new(storage: JsonStorage, config: &LedgerConfig) -> Self {
        SettingsService {
            storage,
            theme_key: config.theme_key(),
        }
    }
}

impl SettingsServiceTrait for SettingsService {
    fn get_theme(&self) -> Theme {
        self.storage.read(&self.theme_key, Theme::default())
    }

    fn set_theme(&self, theme: Theme) {
        debug!("Setting theme to {}", theme);
        self.storage.write(&self.theme_key, &theme);
    }
}
