//! Payloads exchanged with the session gateway.
//!
//! The gateway itself (transport, retries, timeouts) lives outside this crate.
//! Requests carry an owned snapshot, so the store stays usable while a request
//! is outstanding. Responses are applied back through the ordinary store
//! operations and keep their boolean-success semantics.

use hero_rules::{ChoiceRecord, HeroState, StatusUpdate};
use serde::{Deserialize, Serialize};

use crate::store::PlayerStateStore;

/// Outbound request to the narrative service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GatewayRequest {
    /// Opening response to the prologue.
    Start { player_response: String },

    /// A day's decision together with the hero as it stands.
    DayChoice {
        day: u32,
        choice: String,
        hero: HeroState,
    },
}

impl GatewayRequest {
    /// Serialize the request body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One equipment change requested by the narrative service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EquipmentChange {
    Add {
        slot: String,
        item: String,
    },
    Remove {
        slot: String,
        #[serde(default)]
        index: usize,
    },
}

/// Authoritative state changes returned by the narrative service.
///
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateUpdate {
    #[serde(default)]
    pub hp: Option<i32>,

    #[serde(default)]
    pub mp: Option<i32>,

    #[serde(default)]
    pub day_choice: Option<ChoiceRecord>,

    #[serde(default)]
    pub equipment: Vec<EquipmentChange>,
}

impl StateUpdate {
    /// Parse a response body.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// What happened when a [`StateUpdate`] was applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub status_changed: bool,
    pub choice_recorded: bool,
    pub equipment_applied: usize,
    pub equipment_rejected: usize,
}

impl PlayerStateStore {
    /// Build the opening request.
    pub fn start_request(&self, player_response: impl Into<String>) -> GatewayRequest {
        GatewayRequest::Start {
            player_response: player_response.into(),
        }
    }

    /// Build a day-choice request carrying the current snapshot.
    pub fn day_choice_request(&self, day: u32, choice: impl Into<String>) -> GatewayRequest {
        GatewayRequest::DayChoice {
            day,
            choice: choice.into(),
            hero: self.snapshot(),
        }
    }

    /// Apply a gateway response: vitals first, then the day choice, then
    /// equipment changes in order.
    pub fn apply_update(&mut self, update: StateUpdate) -> UpdateReport {
        let mut report = UpdateReport::default();

        let status = StatusUpdate {
            hp: update.hp,
            mp: update.mp,
        };
        if !status.is_empty() {
            self.update_status(status);
            report.status_changed = true;
        }

        if let Some(ChoiceRecord { day, choice }) = update.day_choice {
            self.record_choice(day, choice);
            report.choice_recorded = true;
        }

        for change in update.equipment {
            let applied = match change {
                EquipmentChange::Add { slot, item } => self.add_equipment(&slot, &item),
                EquipmentChange::Remove { slot, index } => self.remove_equipment(&slot, index),
            };
            if applied {
                report.equipment_applied += 1;
            } else {
                report.equipment_rejected += 1;
            }
        }

        tracing::debug!("Applied gateway update: {:?}", report);
        report
    }
}
