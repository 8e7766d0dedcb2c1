//! Player State Store - the single owner of a session's hero.
//!
//! All mutations go through the store. None of them fail loudly: rejected
//! attempts return `false` or do nothing. Identity fields and ability scores
//! follow first-write-wins until [`PlayerStateStore::reset`]; vitals and
//! singleton equipment slots are overwritten freely.

mod views;

pub use views::*;

use hero_rules::{BasicInfo, ChoiceRecord, EquipmentSlot, HeroState, StatsUpdate, StatusUpdate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::extractor::AttributeExtractor;

/// Identifier for one play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, e.g. one issued by the narrative service.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owns the hero state for one session.
///
/// The store is an ordinary owned value. Hosts that share it across tasks must
/// serialize mutating calls themselves.
#[derive(Debug, Clone)]
pub struct PlayerStateStore {
    session_id: SessionId,
    config: StoreConfig,
    extractor: AttributeExtractor,
    state: HeroState,
}

impl Default for PlayerStateStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl PlayerStateStore {
    /// Create a store with a fresh hero.
    pub fn new(config: StoreConfig) -> Self {
        let state = HeroState::with_vitals(config.initial_vitals());
        Self {
            session_id: SessionId::new(),
            config,
            extractor: AttributeExtractor::new(),
            state,
        }
    }

    /// Create a store with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Create a store around an existing hero, e.g. one loaded from disk.
    pub fn from_state(session_id: SessionId, config: StoreConfig, state: HeroState) -> Self {
        Self {
            session_id,
            config,
            extractor: AttributeExtractor::new(),
            state,
        }
    }

    /// The session this store belongs to.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// The configuration the store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Read access to the full hero.
    pub fn state(&self) -> &HeroState {
        &self.state
    }

    /// Owned copy of the hero, safe to hand to a long-running request.
    pub fn snapshot(&self) -> HeroState {
        self.state.clone()
    }

    /// Write identity fields that are still unset. Empty values are ignored.
    pub fn set_basic_info(&mut self, info: BasicInfo) -> &HeroState {
        let offered = info.len();
        let written = self.state.identity.apply(info);
        if written < offered {
            tracing::debug!(
                "Ignored {} identity field(s) already set or empty",
                offered - written
            );
        }
        &self.state
    }

    /// Write ability scores that are still unset. `None` leaves a score alone;
    /// `Some(0)` is a real write.
    pub fn set_stats(&mut self, stats: StatsUpdate) -> &HeroState {
        let written = self.state.stats.apply(stats);
        tracing::debug!("Ability scores written: {:?}", written);
        &self.state
    }

    /// Overwrite hp and/or mp. Values are not clamped.
    pub fn update_status(&mut self, status: StatusUpdate) -> &HeroState {
        self.state.vitals.apply(status);
        &self.state
    }

    /// Equip an item by slot name.
    ///
    /// Returns `false` without mutating for an empty item, an unknown slot, or
    /// a full multi slot. Singleton slots replace their occupant.
    pub fn add_equipment(&mut self, slot: &str, item: &str) -> bool {
        if item.is_empty() {
            tracing::debug!("Refused empty item for slot {}", slot);
            return false;
        }
        let Ok(slot) = slot.parse::<EquipmentSlot>() else {
            tracing::debug!("Refused item {} for unknown slot {}", item, slot);
            return false;
        };
        if self.state.equipment.is_full(slot) {
            tracing::debug!("Slot {} is full, refused {}", slot, item);
            return false;
        }
        self.state.equipment.equip(slot, item)
    }

    /// Unequip by slot name.
    ///
    /// Singleton slots are cleared regardless of `index` and always succeed.
    /// Multi slots need `index < len`. Unknown slots return `false`.
    pub fn remove_equipment(&mut self, slot: &str, index: usize) -> bool {
        let Ok(slot) = slot.parse::<EquipmentSlot>() else {
            tracing::debug!("Cannot remove from unknown slot {}", slot);
            return false;
        };
        let removed = self.state.equipment.unequip(slot, index);
        if !removed {
            tracing::debug!("No item at {}[{}]", slot, index);
        }
        removed
    }

    /// Unequip the first item of a slot.
    pub fn remove_equipment_first(&mut self, slot: &str) -> bool {
        self.remove_equipment(slot, 0)
    }

    /// Append a choice to the history and set the current day to `day`.
    pub fn record_choice(&mut self, day: u32, choice: impl Into<String>) {
        self.state.progress.record(day, choice);
    }

    /// The most recent decision, if any.
    pub fn last_choice(&self) -> Option<&ChoiceRecord> {
        self.state.progress.last_choice()
    }

    /// Decisions recorded for `day`, in the order they were made.
    pub fn choices_on(&self, day: u32) -> Vec<&ChoiceRecord> {
        self.state.progress.choices_on(day).collect()
    }

    /// Run attribute extraction over player text and merge the result under
    /// the write-once rule. Returns what was extracted, not what was written.
    pub fn extract_hero_info(&mut self, text: &str) -> BasicInfo {
        let report = self.extractor.extract_with_report(text);
        if !report.is_miss() {
            self.set_basic_info(report.info.clone());
        }
        report.info
    }

    /// Restore every field to its initial value in one assignment.
    ///
    /// hp and mp go back to the configured `initial_hp`/`initial_mp`, which
    /// are 100 only under the default configuration.
    pub fn reset(&mut self) {
        self.state = HeroState::with_vitals(self.config.initial_vitals());
        tracing::info!("Hero state reset for session {}", self.session_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_info_write_once() {
        let mut store = PlayerStateStore::with_defaults();
        store.set_basic_info(BasicInfo::default().with_name("A"));
        store.set_basic_info(BasicInfo::default().with_name("A"));
        assert_eq!(store.state().identity.name, "A");

        store.set_basic_info(BasicInfo::default().with_name("B").with_gender("女"));
        assert_eq!(store.state().identity.name, "A");
        assert_eq!(store.state().identity.gender, "女");
    }

    #[test]
    fn test_stats_write_once_and_zero() {
        let mut store = PlayerStateStore::with_defaults();
        store.set_stats(StatsUpdate {
            strength: Some(0),
            ..Default::default()
        });
        store.set_stats(StatsUpdate {
            strength: Some(50),
            luck: Some(90),
            ..Default::default()
        });
        let stats = store.state().stats;
        assert_eq!(stats.strength, Some(0));
        assert_eq!(stats.luck, Some(90));
        assert_eq!(stats.agility, None);
    }

    #[test]
    fn test_update_status_overwrites_provided_only() {
        let mut store = PlayerStateStore::with_defaults();
        store.update_status(StatusUpdate::hp(35));
        assert_eq!(store.state().vitals.hp, 35);
        assert_eq!(store.state().vitals.mp, 100);

        store.update_status(StatusUpdate {
            hp: Some(-5),
            mp: Some(250),
        });
        assert_eq!(store.state().vitals.hp, -5);
        assert_eq!(store.state().vitals.mp, 250);

        store.update_status(StatusUpdate::default());
        assert_eq!(store.state().vitals.hp, -5);
    }

    #[test]
    fn test_hands_capacity() {
        let mut store = PlayerStateStore::with_defaults();
        assert!(store.add_equipment("hands", "sword"));
        assert!(store.add_equipment("hands", "shield"));
        assert!(!store.add_equipment("hands", "torch"));
        assert_eq!(store.state().equipment.hands.len(), 2);
    }

    #[test]
    fn test_singleton_overwrite() {
        let mut store = PlayerStateStore::with_defaults();
        assert!(store.add_equipment("head", "leather cap"));
        assert!(store.add_equipment("head", "iron helm"));
        assert_eq!(store.state().equipment.head.as_deref(), Some("iron helm"));
    }

    #[test]
    fn test_add_equipment_rejections_do_not_mutate() {
        let mut store = PlayerStateStore::with_defaults();
        assert!(!store.add_equipment("head", ""));
        assert!(!store.add_equipment("tail", "ribbon"));
        assert!(store.state().equipment.is_empty());
    }

    #[test]
    fn test_remove_equipment_bounds() {
        let mut store = PlayerStateStore::with_defaults();
        store.add_equipment("wrists", "bracer");
        assert!(!store.remove_equipment("wrists", 5));
        assert_eq!(store.state().equipment.wrists.len(), 1);
        assert!(store.remove_equipment("wrists", 0));
        assert!(store.state().equipment.wrists.is_empty());

        assert!(!store.remove_equipment("tail", 0));
    }

    #[test]
    fn test_remove_singleton_is_idempotent() {
        let mut store = PlayerStateStore::with_defaults();
        store.add_equipment("neck", "amulet");
        assert!(store.remove_equipment("neck", 9));
        assert!(store.state().equipment.neck.is_none());
        assert!(store.remove_equipment_first("neck"));
    }

    #[test]
    fn test_remove_middle_hand_item() {
        let mut store = PlayerStateStore::with_defaults();
        store.add_equipment("hands", "sword");
        store.add_equipment("hands", "shield");
        assert!(store.remove_equipment("hands", 0));
        assert_eq!(store.state().equipment.hands, vec!["shield"]);
        assert!(store.add_equipment("hands", "torch"));
        assert_eq!(store.state().equipment.hands, vec!["shield", "torch"]);
    }

    #[test]
    fn test_record_choice_history() {
        let mut store = PlayerStateStore::with_defaults();
        store.record_choice(1, "x");
        store.record_choice(2, "y");
        assert_eq!(
            store.state().progress.choices,
            vec![ChoiceRecord::new(1, "x"), ChoiceRecord::new(2, "y")]
        );
        assert_eq!(store.state().progress.day, 2);
    }

    #[test]
    fn test_choice_lookups() {
        let mut store = PlayerStateStore::with_defaults();
        assert!(store.last_choice().is_none());
        store.record_choice(1, "scout");
        store.record_choice(2, "fight");
        store.record_choice(2, "loot");

        assert_eq!(store.last_choice(), Some(&ChoiceRecord::new(2, "loot")));
        let day_two: Vec<&str> = store
            .choices_on(2)
            .into_iter()
            .map(|c| c.choice.as_str())
            .collect();
        assert_eq!(day_two, vec!["fight", "loot"]);
        assert!(store.choices_on(3).is_empty());
    }

    #[test]
    fn test_full_slot_rejection_keeps_items() {
        let mut store = PlayerStateStore::with_defaults();
        store.add_equipment("wrists", "bracer");
        store.add_equipment("wrists", "band");
        assert!(!store.add_equipment("wrists", "cuff"));
        assert_eq!(store.state().equipment.wrists, vec!["bracer", "band"]);
    }

    #[test]
    fn test_session_id_from_uuid() {
        let uuid = Uuid::nil();
        let store = PlayerStateStore::from_state(
            SessionId::from_uuid(uuid),
            StoreConfig::default(),
            HeroState::new(),
        );
        assert_eq!(store.session_id().0, uuid);
        assert_eq!(store.session_id().to_string(), uuid.to_string());
    }

    #[test]
    fn test_record_choice_lower_day_regresses() {
        let mut store = PlayerStateStore::with_defaults();
        store.record_choice(3, "a");
        store.record_choice(1, "b");
        assert_eq!(store.state().progress.day, 1);
        assert_eq!(store.state().progress.choices.len(), 2);
    }

    #[test]
    fn test_extract_hero_info_merges_write_once() {
        let mut store = PlayerStateStore::with_defaults();
        let info = store.extract_hero_info("我叫小明，我是魔法师法师，20岁");
        assert_eq!(info.name.as_deref(), Some("小明"));
        assert_eq!(store.state().identity.name, "小明");
        assert_eq!(store.state().identity.profession, "魔法师");
        assert_eq!(store.state().identity.age, Some(20));

        let info = store.extract_hero_info("我叫小红，女勇者");
        assert_eq!(info.name.as_deref(), Some("小红"));
        assert_eq!(store.state().identity.name, "小明");
        assert_eq!(store.state().identity.gender, "女");
    }

    #[test]
    fn test_extract_miss_leaves_state() {
        let mut store = PlayerStateStore::with_defaults();
        let info = store.extract_hero_info("hello there");
        assert!(info.is_empty());
        assert!(!store.is_basic_info_set());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = PlayerStateStore::with_defaults();
        let session = store.session_id();
        store.extract_hero_info("我叫小明，男勇者，20岁");
        store.set_stats(StatsUpdate {
            strength: Some(1),
            intelligence: Some(2),
            agility: Some(3),
            luck: Some(4),
        });
        store.update_status(StatusUpdate {
            hp: Some(3),
            mp: Some(0),
        });
        store.add_equipment("hands", "sword");
        store.add_equipment("chest", "mail");
        store.record_choice(2, "rest");

        store.reset();

        let state = store.state();
        assert_eq!(state, &HeroState::new());
        assert_eq!(state.vitals.hp, 100);
        assert_eq!(state.vitals.mp, 100);
        assert_eq!(state.progress.day, 0);
        assert!(state.progress.choices.is_empty());
        assert!(state.equipment.is_empty());
        assert_eq!(state.stats.strength, None);
        assert_eq!(store.session_id(), session);

        store.set_basic_info(BasicInfo::default().with_name("B"));
        assert_eq!(store.state().identity.name, "B");
    }

    #[test]
    fn test_reset_uses_configured_vitals() {
        let config = StoreConfig {
            initial_hp: 60,
            initial_mp: 20,
            ..Default::default()
        };
        let mut store = PlayerStateStore::new(config);
        store.update_status(StatusUpdate::hp(1));
        store.reset();
        assert_eq!(store.state().vitals.hp, 60);
        assert_eq!(store.state().vitals.mp, 20);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = PlayerStateStore::with_defaults();
        let snapshot = store.snapshot();
        store.record_choice(1, "walk");
        assert_eq!(snapshot.progress.day, 0);
        assert_eq!(store.state().progress.day, 1);
    }
}
