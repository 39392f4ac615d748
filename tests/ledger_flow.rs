use chrono::{TimeZone, Utc};
use expense_core::ledger::{Ledger, Purchase};
use expense_core::month::MonthKey;
use expense_core::selection::SelectionState;
use expense_core::services::{CategoryService, PurchaseService, SummaryService};

#[test]
fn march_groceries_scenario() {
    let mut ledger = Ledger::new("Personal");
    let groceries = CategoryService::add(&mut ledger, "Groceries", "🛒").expect("category added");
    let march_5 = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
    ledger.add_purchase(Purchase::dated("milk", Some(groceries), "Groceries", 120.0, march_5));

    let march = MonthKey { year: 2024, month: 3 };
    assert_eq!(march.to_string(), "March 2024");
    assert_eq!(SummaryService::total_for_month(&ledger, march), 120.0);

    let shares = SummaryService::breakdown_for_month(&ledger, march);
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].label, "Groceries");
    assert_eq!(shares[0].value, 120.0);
    assert_eq!(shares[0].percent, 100.0);
}

#[test]
fn deleted_category_orphans_but_keeps_purchases() {
    let mut ledger = Ledger::new("Personal");
    let cafe = CategoryService::add(&mut ledger, "Cafe", "☕").expect("category added");
    let id = PurchaseService::add(&mut ledger, "espresso", "3.5", cafe).expect("purchase added");

    CategoryService::remove(&mut ledger, cafe).expect("remove succeeds");

    let purchase = ledger.purchase(id).expect("purchase survives");
    assert_eq!(ledger.category_label_for(purchase), "Cafe");
    let month = MonthKey::of(purchase.date);
    assert_eq!(SummaryService::total_for_month(&ledger, month), 3.5);
    assert_eq!(
        SummaryService::total_for_category_in_month(&ledger, "Cafe", month),
        3.5
    );
}

#[test]
fn rename_propagates_to_live_purchases_only() {
    let mut ledger = Ledger::new("Personal");
    let cafe = CategoryService::add(&mut ledger, "Cafe", "☕").expect("category added");
    let live = PurchaseService::add(&mut ledger, "espresso", "3.5", cafe).expect("purchase added");

    CategoryService::edit(&mut ledger, cafe, "Coffee", "☕").expect("edit succeeds");
    let purchase = ledger.purchase(live).expect("stored").clone();
    assert_eq!(ledger.category_label_for(&purchase), "Coffee");

    CategoryService::remove(&mut ledger, cafe).expect("remove succeeds");
    let purchase = ledger.purchase(live).expect("stored").clone();
    // Orphans fall back to the label captured at add-time.
    assert_eq!(ledger.category_label_for(&purchase), "Cafe");
}

#[test]
fn selection_is_independent_of_the_ledger() {
    let mut ledger = Ledger::with_starter_categories("Personal");
    let mut selection = SelectionState::new();
    let groceries = ledger.categories[0].id;

    selection.select_category(groceries);
    selection.select_month(selection.month.previous());
    assert_eq!(selection.category, Some(groceries));

    // Selecting never mutates the ledger.
    assert_eq!(ledger.categories.len(), 2);
    assert_eq!(ledger.purchase_count(), 0);

    let id = PurchaseService::add(
        &mut ledger,
        "bread",
        "80",
        selection.category.expect("category selected"),
    )
    .expect("purchase added");
    assert!(ledger.purchase(id).is_some());
}

#[test]
fn invalid_input_leaves_the_ledger_unchanged() {
    let mut ledger = Ledger::with_starter_categories("Personal");
    let groceries = ledger.categories[0].id;
    let categories_before = ledger.categories.len();

    assert!(CategoryService::add(&mut ledger, "", "x").is_err());
    assert!(PurchaseService::add(&mut ledger, "milk", "abc", groceries).is_err());
    assert!(PurchaseService::add(&mut ledger, "milk", "0", groceries).is_err());

    assert_eq!(ledger.categories.len(), categories_before);
    assert_eq!(ledger.purchase_count(), 0);
}
