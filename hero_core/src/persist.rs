//! Save/load for the hero.
//!
//! The hero itself serializes to a flat JSON object (see [`HeroState`]). The
//! save envelope adds a format version and the session id around it.

use hero_rules::HeroState;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::StoreConfig;
use crate::error::{HeroError, Result};
use crate::store::{PlayerStateStore, SessionId};

/// Current save file version.
const SAVE_VERSION: u32 = 1;

/// A saved hero with everything needed to resume the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedHero {
    /// Save format version for compatibility checking.
    pub version: u32,

    pub session_id: SessionId,

    /// The persisted hero, stored verbatim.
    pub hero: HeroState,
}

impl SavedHero {
    /// Wrap a hero in an envelope at the current format version.
    pub fn new(session_id: SessionId, hero: HeroState) -> Self {
        Self {
            version: SAVE_VERSION,
            session_id,
            hero,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a save, rejecting other format versions.
    pub fn from_json(json: &str) -> Result<Self> {
        let saved: Self = serde_json::from_str(json)?;
        if saved.version != SAVE_VERSION {
            return Err(HeroError::VersionMismatch {
                expected: SAVE_VERSION,
                found: saved.version,
            });
        }
        Ok(saved)
    }

    /// Write the save as JSON to `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read and validate a save from `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl PlayerStateStore {
    /// Capture the current hero in a save envelope.
    pub fn save(&self) -> SavedHero {
        tracing::info!("Saving hero for session {}", self.session_id());
        SavedHero::new(self.session_id(), self.snapshot())
    }

    /// Rebuild a store from a save.
    pub fn restore(config: StoreConfig, saved: SavedHero) -> Self {
        tracing::info!("Restoring hero for session {}", saved.session_id);
        Self::from_state(saved.session_id, config, saved.hero)
    }
}
