#![doc(test(attr(deny(warnings))))]

//! Expense Core offers the ledger, month-bucketing, and aggregation
//! primitives behind a personal expense tracker: user-defined categories,
//! recorded purchases, and per-month totals and category breakdowns.

pub mod amount;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod month;
pub mod remote;
pub mod selection;
pub mod services;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
