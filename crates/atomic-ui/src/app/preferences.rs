//! Configuration loading for the app shell.

use crate::core::config::{CONFIG_OVERRIDE_KEY, UiConfig};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// Defaults, overlaid with the JSON stored under [`CONFIG_OVERRIDE_KEY`] when valid.
pub(crate) fn load_config() -> UiConfig {
    let raw = match LocalStorage::raw().get_item(CONFIG_OVERRIDE_KEY) {
        Ok(raw) => raw,
        Err(err) => {
            console::warn!("configuration override unreadable", err);
            None
        }
    };
    match UiConfig::from_override(raw.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("ignoring configuration override", err.to_string());
            UiConfig::default()
        }
    }
}
