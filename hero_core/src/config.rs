//! Store configuration, loadable from TOML.

use hero_rules::{Vitals, DEFAULT_MAX_DAYS, DEFAULT_VITAL};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Shown by `full_name` while the hero has no name.
pub const UNNAMED_HERO: &str = "无名勇者";

/// Configuration for a player state store.
///
/// Every key is optional in TOML; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Placeholder name for a hero without one.
    pub unnamed_hero: String,

    /// hp on a fresh or reset hero.
    pub initial_hp: i32,

    /// mp on a fresh or reset hero.
    pub initial_mp: i32,

    /// Number of days in a session.
    pub max_days: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            unnamed_hero: UNNAMED_HERO.to_string(),
            initial_hp: DEFAULT_VITAL,
            initial_mp: DEFAULT_VITAL,
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}

impl StoreConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded store config from {}", path.display());
        Ok(config)
    }

    pub fn initial_vitals(&self) -> Vitals {
        Vitals::new(self.initial_hp, self.initial_mp)
    }
}
