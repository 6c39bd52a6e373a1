//! Wizard state — current position plus everything selected so far.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted wizard state.
///
/// Serialized whole into the selection store under the reserved
/// `"wizard_state"` key so an interrupted run resumes in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardState {
    /// Session identifier, fresh on every start and restart.
    pub session_id: Uuid,
    /// Index of the current phase in the registry. Kept within
    /// `[0, registry.count())` by the controller.
    pub current_index: usize,
    /// In-session selections, write-through mirrored to the store.
    pub selections: BTreeMap<String, String>,
    pub started_at: DateTime<Utc>,
    /// Set when the terminal phase is first entered.
    pub completed_at: Option<DateTime<Utc>>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            current_index: 0,
            selections: BTreeMap::new(),
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Record a selection in the in-session map.
    pub fn record(&mut self, key: &str, value: &str) {
        self.selections.insert(key.to_string(), value.to_string());
    }

    /// Read a selection.
    pub fn selection(&self, key: &str) -> Option<&str> {
        self.selections.get(key).map(String::as_str)
    }

    /// Whether the terminal phase was reached.
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
