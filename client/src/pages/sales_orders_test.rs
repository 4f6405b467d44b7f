use super::*;

#[test]
fn caption_counts_orders() {
    assert_eq!(sales_caption(12), "12 orders \u{b7} manage entire fulfilment lifecycle");
}

#[test]
fn transitions_refresh_stock_views() {
    for root in ["sales-orders", "sales-order", "inventory", "movements", "dashboard"] {
        assert!(SALES_ACTION_ROOTS.contains(&root), "missing {root}");
    }
}
