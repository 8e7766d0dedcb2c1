//! Equipment mechanics: slot kinds, capacities and the equipment loadout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum occupants of a multi slot.
pub const MULTI_SLOT_CAPACITY: usize = 2;

/// Equipment slots for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Head,
    Chest,
    Legs,
    Feet,
    Neck,
    Hands,
    Wrists,
}

/// How many items a slot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    /// 0 or 1 item; a new item replaces the occupant.
    Singleton,
    /// Ordered sequence up to [`MULTI_SLOT_CAPACITY`].
    Multi,
}

impl EquipmentSlot {
    /// Listing order: singleton slots first, then multi slots.
    pub const ALL: [EquipmentSlot; 7] = [
        EquipmentSlot::Head,
        EquipmentSlot::Chest,
        EquipmentSlot::Legs,
        EquipmentSlot::Feet,
        EquipmentSlot::Neck,
        EquipmentSlot::Hands,
        EquipmentSlot::Wrists,
    ];

    /// Whether this slot holds one item or a capped sequence.
    pub fn kind(&self) -> SlotKind {
        match self {
            EquipmentSlot::Hands | EquipmentSlot::Wrists => SlotKind::Multi,
            _ => SlotKind::Singleton,
        }
    }

    /// Lowercase slot name as used in payloads and the persisted layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentSlot::Head => "head",
            EquipmentSlot::Chest => "chest",
            EquipmentSlot::Legs => "legs",
            EquipmentSlot::Feet => "feet",
            EquipmentSlot::Neck => "neck",
            EquipmentSlot::Hands => "hands",
            EquipmentSlot::Wrists => "wrists",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a slot name is not one of the seven known slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown equipment slot: {0}")]
pub struct UnknownSlot(pub String);

impl FromStr for EquipmentSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| UnknownSlot(s.to_string()))
    }
}

/// An occupied slot as listed by [`Equipment::list`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub slot: EquipmentSlot,
    pub item: String,
}

/// The hero's loadout. Serialized as an object keyed by slot name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub head: Option<String>,
    #[serde(default)]
    pub chest: Option<String>,
    #[serde(default)]
    pub legs: Option<String>,
    #[serde(default)]
    pub hands: Vec<String>,
    #[serde(default)]
    pub feet: Option<String>,
    #[serde(default)]
    pub neck: Option<String>,
    #[serde(default)]
    pub wrists: Vec<String>,
}

impl Equipment {
    /// Create an empty loadout.
    pub fn empty() -> Self {
        Self::default()
    }

    fn single_mut(&mut self, slot: EquipmentSlot) -> Option<&mut Option<String>> {
        match slot {
            EquipmentSlot::Head => Some(&mut self.head),
            EquipmentSlot::Chest => Some(&mut self.chest),
            EquipmentSlot::Legs => Some(&mut self.legs),
            EquipmentSlot::Feet => Some(&mut self.feet),
            EquipmentSlot::Neck => Some(&mut self.neck),
            EquipmentSlot::Hands | EquipmentSlot::Wrists => None,
        }
    }

    fn multi_mut(&mut self, slot: EquipmentSlot) -> Option<&mut Vec<String>> {
        match slot {
            EquipmentSlot::Hands => Some(&mut self.hands),
            EquipmentSlot::Wrists => Some(&mut self.wrists),
            _ => None,
        }
    }

    /// Items currently in a slot, in insertion order.
    pub fn items(&self, slot: EquipmentSlot) -> Vec<&str> {
        match slot {
            EquipmentSlot::Head => self.head.as_deref().into_iter().collect(),
            EquipmentSlot::Chest => self.chest.as_deref().into_iter().collect(),
            EquipmentSlot::Legs => self.legs.as_deref().into_iter().collect(),
            EquipmentSlot::Feet => self.feet.as_deref().into_iter().collect(),
            EquipmentSlot::Neck => self.neck.as_deref().into_iter().collect(),
            EquipmentSlot::Hands => self.hands.iter().map(String::as_str).collect(),
            EquipmentSlot::Wrists => self.wrists.iter().map(String::as_str).collect(),
        }
    }

    /// Put an item in a slot.
    ///
    /// Singleton slots overwrite their occupant. Multi slots append and refuse
    /// once full. Empty items are refused.
    pub fn equip(&mut self, slot: EquipmentSlot, item: impl Into<String>) -> bool {
        let item = item.into();
        if item.is_empty() {
            return false;
        }
        if let Some(occupant) = self.single_mut(slot) {
            *occupant = Some(item);
            return true;
        }
        match self.multi_mut(slot) {
            Some(items) if items.len() < MULTI_SLOT_CAPACITY => {
                items.push(item);
                true
            }
            _ => false,
        }
    }

    /// Take an item out of a slot.
    ///
    /// Singleton slots are cleared regardless of `index` and always succeed.
    /// Multi slots only succeed for an in-range index.
    pub fn unequip(&mut self, slot: EquipmentSlot, index: usize) -> bool {
        if let Some(occupant) = self.single_mut(slot) {
            *occupant = None;
            return true;
        }
        match self.multi_mut(slot) {
            Some(items) if index < items.len() => {
                items.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Whether a multi slot is at capacity. Singleton slots are never full.
    pub fn is_full(&self, slot: EquipmentSlot) -> bool {
        slot.kind() == SlotKind::Multi && self.items(slot).len() >= MULTI_SLOT_CAPACITY
    }

    /// Flattened listing: occupied singleton slots in fixed order, then
    /// hands and wrists items in insertion order.
    pub fn list(&self) -> Vec<EquippedItem> {
        EquipmentSlot::ALL
            .into_iter()
            .flat_map(|slot| {
                self.items(slot).into_iter().map(move |item| EquippedItem {
                    slot,
                    item: item.to_string(),
                })
            })
            .collect()
    }

    /// True when no slot holds an item.
    pub fn is_empty(&self) -> bool {
        EquipmentSlot::ALL
            .iter()
            .all(|&slot| self.items(slot).is_empty())
    }
}
