//! Component definitions for the hero.

use serde::{Deserialize, Serialize};

/// Default value for both hp and mp.
pub const DEFAULT_VITAL: i32 = 100;

/// Hit points and mana. Overwritten freely by authoritative updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vitals {
    pub hp: i32,
    pub mp: i32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            hp: DEFAULT_VITAL,
            mp: DEFAULT_VITAL,
        }
    }
}

impl Vitals {
    /// Create vitals with explicit starting values.
    pub fn new(hp: i32, mp: i32) -> Self {
        Self { hp, mp }
    }

    /// Overwrite whichever of hp/mp the update carries.
    ///
    /// No clamping: values pass through exactly as given.
    pub fn apply(&mut self, update: StatusUpdate) {
        if let Some(hp) = update.hp {
            self.hp = hp;
        }
        if let Some(mp) = update.mp {
            self.mp = mp;
        }
    }
}

/// Partial hp/mp update. `None` leaves the field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub hp: Option<i32>,
    #[serde(default)]
    pub mp: Option<i32>,
}

impl StatusUpdate {
    /// Update hp only.
    pub fn hp(hp: i32) -> Self {
        Self {
            hp: Some(hp),
            mp: None,
        }
    }

    /// Update mp only.
    pub fn mp(mp: i32) -> Self {
        Self {
            hp: None,
            mp: Some(mp),
        }
    }

    /// Check if neither hp nor mp is provided.
    pub fn is_empty(&self) -> bool {
        self.hp.is_none() && self.mp.is_none()
    }
}

/// Ability score types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityType {
    Strength,
    Intelligence,
    Agility,
    Luck,
}

impl AbilityType {
    /// All abilities in update order.
    pub const ALL: [AbilityType; 4] = [
        AbilityType::Strength,
        AbilityType::Intelligence,
        AbilityType::Agility,
        AbilityType::Luck,
    ];
}

/// The four ability scores. Each is unset until its first write, then frozen
/// until the whole hero is reset.
///
/// Nominal range is 0 to 100; values are not validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityScores {
    pub strength: Option<i32>,
    pub intelligence: Option<i32>,
    pub agility: Option<i32>,
    pub luck: Option<i32>,
}

impl AbilityScores {
    /// Get a single score.
    pub fn get(&self, ability: AbilityType) -> Option<i32> {
        match ability {
            AbilityType::Strength => self.strength,
            AbilityType::Intelligence => self.intelligence,
            AbilityType::Agility => self.agility,
            AbilityType::Luck => self.luck,
        }
    }

    fn slot_mut(&mut self, ability: AbilityType) -> &mut Option<i32> {
        match ability {
            AbilityType::Strength => &mut self.strength,
            AbilityType::Intelligence => &mut self.intelligence,
            AbilityType::Agility => &mut self.agility,
            AbilityType::Luck => &mut self.luck,
        }
    }

    /// Write a score only if it is still unset. Returns whether it was written.
    ///
    /// Zero is a meaningful value and counts as a write.
    pub fn set_if_unset(&mut self, ability: AbilityType, value: i32) -> bool {
        let slot = self.slot_mut(ability);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    /// Apply every score the update carries under the write-once rule.
    ///
    /// Returns the abilities that were actually written.
    pub fn apply(&mut self, update: StatsUpdate) -> Vec<AbilityType> {
        AbilityType::ALL
            .into_iter()
            .filter(|&ability| {
                update
                    .get(ability)
                    .is_some_and(|value| self.set_if_unset(ability, value))
            })
            .collect()
    }

    /// True only when all four scores are set.
    pub fn is_complete(&self) -> bool {
        AbilityType::ALL.iter().all(|&a| self.get(a).is_some())
    }
}

/// Partial ability score update. `None` means "not provided".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsUpdate {
    #[serde(default)]
    pub strength: Option<i32>,
    #[serde(default)]
    pub intelligence: Option<i32>,
    #[serde(default)]
    pub agility: Option<i32>,
    #[serde(default)]
    pub luck: Option<i32>,
}

impl StatsUpdate {
    /// Get the provided value for a score, if any.
    pub fn get(&self, ability: AbilityType) -> Option<i32> {
        match ability {
            AbilityType::Strength => self.strength,
            AbilityType::Intelligence => self.intelligence,
            AbilityType::Agility => self.agility,
            AbilityType::Luck => self.luck,
        }
    }
}
