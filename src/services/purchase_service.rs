//! Business logic helpers for recording and amending purchases.

use uuid::Uuid;

use crate::amount::parse_amount;
use crate::errors::LedgerError;
use crate::ledger::{Ledger, Purchase};
use crate::services::ServiceResult;

/// Partial update applied by [`PurchaseService::edit`]. `None` fields are
/// left untouched; the purchase date is never editable.
#[derive(Debug, Default, Clone)]
pub struct PurchaseUpdate {
    pub name: Option<String>,
    /// Free-text amount expression, re-parsed like the add flow.
    pub amount: Option<String>,
    pub category_id: Option<Uuid>,
}

/// Provides validated operations for [`Purchase`] entries.
pub struct PurchaseService;

impl PurchaseService {
    /// Records a purchase against a live category.
    ///
    /// `raw_amount` is the free-text amount field, which may be an
    /// arithmetic expression ("120+35"); it must evaluate to a finite
    /// positive number. The purchase gets a fresh id and the current
    /// timestamp and is appended in insertion order.
    pub fn add(
        ledger: &mut Ledger,
        name: impl Into<String>,
        raw_amount: &str,
        category_id: Uuid,
    ) -> ServiceResult<Uuid> {
        let amount = parse_amount(raw_amount)?;
        let label = ledger
            .category(category_id)
            .map(|category| category.name.clone())
            .ok_or_else(|| LedgerError::NotFound(format!("category {category_id}")))?;
        let id = ledger.add_purchase(Purchase::new(name, Some(category_id), label, amount));
        tracing::debug!(%id, amount, "purchase added");
        Ok(id)
    }

    /// Applies a partial update to an existing purchase.
    ///
    /// Re-pointing at a live category refreshes the snapshot label; the
    /// date is never touched.
    pub fn edit(ledger: &mut Ledger, id: Uuid, update: PurchaseUpdate) -> ServiceResult<()> {
        let amount = update.amount.as_deref().map(parse_amount).transpose()?;
        let relabel = match update.category_id {
            Some(category_id) => Some((
                category_id,
                ledger
                    .category(category_id)
                    .map(|category| category.name.clone())
                    .ok_or_else(|| LedgerError::NotFound(format!("category {category_id}")))?,
            )),
            None => None,
        };

        let purchase = ledger
            .purchase_mut(id)
            .ok_or_else(|| LedgerError::NotFound(format!("purchase {id}")))?;
        if let Some(name) = update.name {
            purchase.name = name;
        }
        if let Some(amount) = amount {
            purchase.amount = amount;
        }
        if let Some((category_id, label)) = relabel {
            purchase.category_id = Some(category_id);
            purchase.category_label = label;
        }
        ledger.touch();
        tracing::debug!(%id, "purchase edited");
        Ok(())
    }

    /// Deletes a purchase; a safe error when the id is already gone.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        if !ledger.remove_purchase(id) {
            return Err(LedgerError::NotFound(format!("purchase {id}")));
        }
        tracing::debug!(%id, "purchase removed");
        Ok(())
    }
}
