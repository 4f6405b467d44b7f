use std::collections::BTreeMap;

use super::*;
use crate::net::types::{LowStockItem, TopSellingProduct};

fn inventory_snapshot(total: i64, low: i64, out: i64) -> InventoryDashboard {
    InventoryDashboard {
        total_products: total,
        low_stock_count: low,
        out_of_stock_count: out,
        total_inventory_valuation: 12_500.0,
        low_stock_items: vec![LowStockItem {
            product_id: 1,
            sku: "SKU-1".to_owned(),
            name: "Widget".to_owned(),
            quantity: 3,
            reorder_level: 10,
            warehouse: "Main".to_owned(),
        }],
        out_of_stock_items: Vec::new(),
        fast_moving_products: Vec::new(),
    }
}

fn order_snapshot(revenues: &[(i64, f64)]) -> OrderDashboard {
    OrderDashboard {
        monthly_revenue: 900.0,
        status_distribution: BTreeMap::new(),
        top_selling_products: revenues
            .iter()
            .map(|&(product_id, total_revenue)| TopSellingProduct { product_id, total_quantity: 1, total_revenue })
            .collect(),
    }
}

// =============================================================================
// headline
// =============================================================================

#[test]
fn headline_prefers_management_snapshot() {
    let management = ManagementDashboard {
        monthly_revenue: 5_000.0,
        yearly_revenue: 60_000.0,
        inventory_valuation: 42_000.0,
        total_active_products: 80,
        low_stock_alerts: 4,
        out_of_stock_alerts: 2,
        total_sales_orders: 300,
        total_purchase_orders: 120,
    };
    let inventory = inventory_snapshot(10, 1, 1);
    let figures = headline(Some(&management), Some(&inventory), None);
    assert_eq!(figures.monthly_revenue, 5_000.0);
    assert_eq!(figures.inventory_value, 42_000.0);
    assert_eq!(figures.low_stock, 4);
    assert_eq!(figures.out_of_stock, 2);
}

#[test]
fn headline_falls_back_to_inventory_and_orders() {
    let inventory = inventory_snapshot(10, 3, 1);
    let orders = order_snapshot(&[]);
    let figures = headline(None, Some(&inventory), Some(&orders));
    assert_eq!(figures.monthly_revenue, 900.0);
    assert_eq!(figures.inventory_value, 12_500.0);
    assert_eq!(figures.low_stock, 3);
    assert_eq!(figures.out_of_stock, 1);
}

#[test]
fn headline_without_data_is_zero() {
    assert_eq!(headline(None, None, None), Headline::default());
}

// =============================================================================
// charts
// =============================================================================

#[test]
fn stock_distribution_derives_in_stock_remainder() {
    let data = stock_distribution(&inventory_snapshot(20, 5, 3));
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    assert_eq!(values, vec![12.0, 5.0, 3.0]);
    assert_eq!(data[0].label, "In Stock");
}

#[test]
fn stock_distribution_never_goes_negative() {
    let data = stock_distribution(&inventory_snapshot(2, 5, 3));
    assert_eq!(data[0].value, 0.0);
}

#[test]
fn top_sellers_sorts_by_revenue_and_caps_bars() {
    let orders = order_snapshot(&[(1, 10.0), (2, 70.0), (3, 30.0), (4, 5.0), (5, 1.0), (6, 2.0), (7, 90.0)]);
    let data = top_sellers(&orders);
    assert_eq!(data.len(), TOP_SELLER_BARS);
    assert_eq!(data[0].label, "#7");
    assert_eq!(data[1].label, "#2");
    assert!(data.iter().all(|d| d.label != "#5"));
}
