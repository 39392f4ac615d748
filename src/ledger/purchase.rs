use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded expense entry.
///
/// The category reference is soft: `category_id` names a [`Category`] that
/// may later be deleted, and `category_label` snapshots the category name at
/// add-time so orphaned purchases keep their original label.
///
/// [`Category`]: crate::ledger::Category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    pub id: Uuid,
    /// Free-text description; may be empty.
    pub name: String,
    /// `None` is the explicit "unassigned" sentinel.
    pub category_id: Option<Uuid>,
    pub category_label: String,
    /// Always strictly positive; enforced at the service boundary.
    pub amount: f64,
    /// Fixed at add-time; an explicit edit never moves it.
    pub date: DateTime<Utc>,
}

impl Purchase {
    pub fn new(
        name: impl Into<String>,
        category_id: Option<Uuid>,
        category_label: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self::dated(name, category_id, category_label, amount, Utc::now())
    }

    pub fn dated(
        name: impl Into<String>,
        category_id: Option<Uuid>,
        category_label: impl Into<String>,
        amount: f64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category_id,
            category_label: category_label.into(),
            amount,
            date,
        }
    }
}
