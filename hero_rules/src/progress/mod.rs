//! Session progress - the current day and the ordered history of choices.

use serde::{Deserialize, Serialize};

/// Default session length in days.
pub const DEFAULT_MAX_DAYS: u32 = 5;

/// One recorded decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    pub day: u32,
    pub choice: String,
}

impl ChoiceRecord {
    /// Create a record for a decision made on `day`.
    pub fn new(day: u32, choice: impl Into<String>) -> Self {
        Self {
            day,
            choice: choice.into(),
        }
    }
}

/// Day counter plus append-only choice history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub choices: Vec<ChoiceRecord>,
}

impl Progress {
    /// Create progress at day 0 with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a choice and move the day counter to `day`.
    ///
    /// The counter is assigned, not maxed: a lower day moves it backwards.
    /// Multiple choices on the same day are all kept.
    pub fn record(&mut self, day: u32, choice: impl Into<String>) {
        if day < self.day {
            tracing::warn!(
                "Choice recorded for day {} while current day is {}; day counter moves back",
                day,
                self.day
            );
        }
        self.choices.push(ChoiceRecord::new(day, choice));
        self.day = day;
    }

    /// Choices recorded for a given day, in order.
    pub fn choices_on(&self, day: u32) -> impl Iterator<Item = &ChoiceRecord> {
        self.choices.iter().filter(move |c| c.day == day)
    }

    /// Most recent choice, if any.
    pub fn last_choice(&self) -> Option<&ChoiceRecord> {
        self.choices.last()
    }

    /// Is the current day the last day of the session?
    pub fn is_final_day(&self, max_days: u32) -> bool {
        self.day == max_days
    }

    /// Has the session run past its last day?
    pub fn is_over(&self, max_days: u32) -> bool {
        self.day > max_days
    }

    /// Completion from 0.0 to 100.0. A zero-length session counts as complete.
    pub fn percentage(&self, max_days: u32) -> f32 {
        if max_days == 0 {
            return 100.0;
        }
        (self.day as f32 / max_days as f32 * 100.0).min(100.0)
    }
}
