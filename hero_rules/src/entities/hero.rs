//! The complete hero state - the unit that is persisted and restored verbatim.

use serde::{Deserialize, Serialize};

use super::{AbilityScores, Identity, Vitals};
use crate::mechanics::Equipment;
use crate::progress::Progress;

/// Everything known about the hero in one session.
///
/// Serializes as a flat object: identity, vitals and ability scores sit at the
/// top level next to the nested `equipment` object, `day` and `choices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroState {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(flatten)]
    pub vitals: Vitals,

    #[serde(flatten)]
    pub stats: AbilityScores,

    #[serde(default)]
    pub equipment: Equipment,

    #[serde(flatten)]
    pub progress: Progress,
}

impl HeroState {
    /// Create a fresh hero with default vitals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh hero with the given starting vitals.
    pub fn with_vitals(vitals: Vitals) -> Self {
        Self {
            vitals,
            ..Self::default()
        }
    }

    /// Check if the hero is alive.
    pub fn is_alive(&self) -> bool {
        self.vitals.hp > 0
    }
}
