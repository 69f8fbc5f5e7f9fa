//! Service traits for settings.

use super::settings_model::Theme;

/// Reads and writes user preferences.
pub trait SettingsServiceTrait: Send + Sync {
    /// Stored theme, or [`Theme::System`] when nothing usable is stored.
    fn get_theme(&self) -> Theme;

    fn set_theme(&self, theme: Theme);
}
