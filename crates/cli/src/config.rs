//! Process configuration, read once from the environment.

use std::path::PathBuf;

use stockroom_inventory::DEFAULT_INVENTORY_PATH;

/// Overrides the file the demonstration run saves to and reloads from.
pub const INVENTORY_PATH_ENV: &str = "STOCKROOM_INVENTORY_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub inventory_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset falls back to defaults
    /// silently; a blank value falls back with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(INVENTORY_PATH_ENV) {
            if raw.trim().is_empty() {
                tracing::warn!("{INVENTORY_PATH_ENV} is blank; using {DEFAULT_INVENTORY_PATH}");
            } else {
                config.inventory_path = PathBuf::from(raw);
            }
        }

        config
    }
}
