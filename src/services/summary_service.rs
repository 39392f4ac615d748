//! Month-scoped aggregation over the purchase set.
//!
//! Everything here is pure and recomputes from scratch on every call; the
//! purchase volume of a personal ledger makes incremental aggregation
//! pointless.

use std::collections::HashMap;

use serde::Serialize;

use crate::ledger::Ledger;
use crate::month::MonthKey;

/// One slice of a month's category breakdown, as consumed by the list and
/// pie-chart views.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryShare {
    pub label: String,
    pub value: f64,
    /// Share of the month total, 0..=100. Zero when the month is empty.
    pub percent: f64,
}

/// Aggregates ledger data for the month list and chart views.
pub struct SummaryService;

impl SummaryService {
    /// Sum of all purchase amounts in the given month bucket.
    pub fn total_for_month(ledger: &Ledger, month: MonthKey) -> f64 {
        ledger
            .purchases
            .iter()
            .filter(|purchase| MonthKey::of(purchase.date) == month)
            .map(|purchase| purchase.amount)
            .sum()
    }

    /// Sum restricted to purchases whose resolved label matches `label`.
    pub fn total_for_category_in_month(ledger: &Ledger, label: &str, month: MonthKey) -> f64 {
        ledger
            .purchases
            .iter()
            .filter(|purchase| MonthKey::of(purchase.date) == month)
            .filter(|purchase| ledger.category_label_for(purchase) == label)
            .map(|purchase| purchase.amount)
            .sum()
    }

    /// Groups the month's purchases by resolved category label.
    ///
    /// Sorted by value descending for chart and legend presentation; ties
    /// keep first-encountered label order. Percentages are 0 across the
    /// board for an empty month rather than dividing by zero.
    pub fn breakdown_for_month(ledger: &Ledger, month: MonthKey) -> Vec<CategoryShare> {
        let mut order: Vec<String> = Vec::new();
        let mut values: HashMap<String, f64> = HashMap::new();
        for purchase in ledger
            .purchases
            .iter()
            .filter(|purchase| MonthKey::of(purchase.date) == month)
        {
            let label = ledger.category_label_for(purchase);
            if !values.contains_key(&label) {
                order.push(label.clone());
            }
            *values.entry(label).or_insert(0.0) += purchase.amount;
        }

        let total: f64 = values.values().sum();
        let mut shares: Vec<CategoryShare> = order
            .into_iter()
            .map(|label| {
                let value = values[&label];
                let percent = if total > 0.0 { 100.0 * value / total } else { 0.0 };
                CategoryShare { label, value, percent }
            })
            .collect();
        shares.sort_by(|a, b| b.value.total_cmp(&a.value));
        shares
    }
}
