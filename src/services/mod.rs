//! Validated operations and aggregations over a [`Ledger`].
//!
//! [`Ledger`]: crate::ledger::Ledger

pub mod category_service;
pub mod purchase_service;
pub mod summary_service;

pub use category_service::CategoryService;
pub use purchase_service::{PurchaseService, PurchaseUpdate};
pub use summary_service::{CategoryShare, SummaryService};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, LedgerError>;
