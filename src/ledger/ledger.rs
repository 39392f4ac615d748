use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{category::Category, purchase::Purchase};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The in-memory collection of categories and purchases.
///
/// Insertion order is preserved for both collections and doubles as the
/// display order. All mutation flows through the services in
/// [`crate::services`]; the methods here are unchecked primitives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub purchases: Vec<Purchase>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            categories: Vec::new(),
            purchases: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// A ledger seeded with the app's two starter categories.
    pub fn with_starter_categories(name: impl Into<String>) -> Self {
        let mut ledger = Self::new(name);
        ledger.add_category(Category::new("Groceries", "🛒"));
        ledger.add_category(Category::new("Transport", "🚗"));
        ledger
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        self.touch();
        id
    }

    pub fn add_purchase(&mut self, purchase: Purchase) -> Uuid {
        let id = purchase.id;
        self.purchases.push(purchase);
        self.touch();
        id
    }

    /// Removes the category only; purchases referencing it are untouched
    /// and become orphaned. Returns `false` when the id is unknown.
    pub fn remove_category(&mut self, id: Uuid) -> bool {
        let before = self.categories.len();
        self.categories.retain(|category| category.id != id);
        let removed = self.categories.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Returns `false` when the id is unknown.
    pub fn remove_purchase(&mut self, id: Uuid) -> bool {
        let before = self.purchases.len();
        self.purchases.retain(|purchase| purchase.id != id);
        let removed = self.purchases.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: Uuid) -> Option<&mut Category> {
        self.categories.iter_mut().find(|category| category.id == id)
    }

    pub fn purchase(&self, id: Uuid) -> Option<&Purchase> {
        self.purchases.iter().find(|purchase| purchase.id == id)
    }

    pub fn purchase_mut(&mut self, id: Uuid) -> Option<&mut Purchase> {
        self.purchases.iter_mut().find(|purchase| purchase.id == id)
    }

    /// The label a purchase displays under: the live category name while the
    /// category exists, otherwise the label snapshotted at add-time.
    pub fn category_label_for(&self, purchase: &Purchase) -> String {
        purchase
            .category_id
            .and_then(|id| self.category(id))
            .map(|category| category.name.clone())
            .unwrap_or_else(|| purchase.category_label.clone())
    }

    pub fn purchase_count(&self) -> usize {
        self.purchases.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
