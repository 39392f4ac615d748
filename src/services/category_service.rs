//! Business logic helpers for category management.

use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::{Category, Ledger};
use crate::services::ServiceResult;

/// Provides validated operations for [`Category`] entities.
///
/// Every `Err` leaves the ledger unchanged, so callers may render failures
/// as nothing more than a disabled control.
pub struct CategoryService;

impl CategoryService {
    /// Adds a new category. The name must be non-empty after trimming and
    /// unique among the current categories.
    pub fn add(
        ledger: &mut Ledger,
        name: impl Into<String>,
        icon: impl Into<String>,
    ) -> ServiceResult<Uuid> {
        let name = name.into();
        Self::validate_name(ledger, None, &name)?;
        let id = ledger.add_category(Category::new(name.trim(), icon));
        tracing::debug!(%id, "category added");
        Ok(id)
    }

    /// Renames a category and/or swaps its icon. Purchases referencing the
    /// category pick up the new name through id resolution; their stored
    /// snapshot labels are left alone.
    pub fn edit(
        ledger: &mut Ledger,
        id: Uuid,
        name: impl Into<String>,
        icon: impl Into<String>,
    ) -> ServiceResult<()> {
        let name = name.into();
        Self::validate_name(ledger, Some(id), &name)?;
        let category = ledger
            .category_mut(id)
            .ok_or_else(|| LedgerError::NotFound(format!("category {id}")))?;
        category.name = name.trim().to_string();
        category.icon = icon.into();
        ledger.touch();
        tracing::debug!(%id, "category edited");
        Ok(())
    }

    /// Removes a category. Purchases referencing it are never cascaded;
    /// they keep their id and snapshot label and keep counting toward
    /// totals.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        if !ledger.remove_category(id) {
            return Err(LedgerError::NotFound(format!("category {id}")));
        }
        tracing::debug!(%id, "category removed");
        Ok(())
    }

    /// Returns a snapshot of all categories in display order.
    pub fn list(ledger: &Ledger) -> Vec<&Category> {
        ledger.categories.iter().collect()
    }

    fn validate_name(ledger: &Ledger, exclude: Option<Uuid>, candidate: &str) -> ServiceResult<()> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::Validation("Category name is empty".into()));
        }
        let normalized = trimmed.to_lowercase();
        let duplicate = ledger.categories.iter().any(|category| {
            let name = category.name.trim().to_lowercase();
            name == normalized && exclude != Some(category.id)
        });
        if duplicate {
            Err(LedgerError::Validation(format!(
                "Category `{trimmed}` already exists"
            )))
        } else {
            Ok(())
        }
    }
}
