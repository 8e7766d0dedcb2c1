//! Read-only views computed from the store.

use hero_rules::EquippedItem;

use super::PlayerStateStore;

impl PlayerStateStore {
    /// The hero's name, or the configured placeholder while unnamed.
    pub fn full_name(&self) -> &str {
        if self.state.identity.has_name() {
            &self.state.identity.name
        } else {
            &self.config.unnamed_hero
        }
    }

    /// True as soon as ANY identity field is set.
    pub fn is_basic_info_set(&self) -> bool {
        self.state.identity.is_any_set()
    }

    /// True only when ALL four ability scores are set.
    pub fn is_stats_set(&self) -> bool {
        self.state.stats.is_complete()
    }

    /// Occupied singleton slots (head, chest, legs, feet, neck), then hands and
    /// wrists items in insertion order.
    pub fn equipment_list(&self) -> Vec<EquippedItem> {
        self.state.equipment.list()
    }

    /// Check if the hero still has hp left.
    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// Check if the current day is the session's last day.
    pub fn is_final_day(&self) -> bool {
        self.state.progress.is_final_day(self.config.max_days)
    }

    /// Check if the session has run past its last day.
    pub fn is_game_over(&self) -> bool {
        self.state.progress.is_over(self.config.max_days)
    }

    /// Session completion from 0.0 to 100.0.
    pub fn progress_percentage(&self) -> f32 {
        self.state.progress.percentage(self.config.max_days)
    }
}
