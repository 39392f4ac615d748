//! Ledger domain models and helpers.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod purchase;

pub use category::Category;
pub use ledger::Ledger;
pub use purchase::Purchase;
