//! Ephemeral UI selection state, kept apart from the ledger.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::month::MonthKey;

/// The currently selected month bucket plus the category picked for the
/// pending add-purchase form.
///
/// Pure state transitions only; nothing here mutates a ledger. Switching
/// months intentionally leaves the category selection in place, matching
/// the observed app behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionState {
    pub month: MonthKey,
    pub category: Option<Uuid>,
}

impl SelectionState {
    /// Current month, no category picked.
    pub fn new() -> Self {
        Self {
            month: MonthKey::current(),
            category: None,
        }
    }

    pub fn select_month(&mut self, month: MonthKey) {
        self.month = month;
    }

    pub fn select_category(&mut self, category: Uuid) {
        self.category = Some(category);
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
