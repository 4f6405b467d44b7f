use super::*;
use crate::net::types::CustomerStatus;

fn product(id: i64, status: ProductStatus) -> Product {
    Product {
        id,
        sku: format!("SKU-{id}"),
        name: format!("Item {id}"),
        description: None,
        category_id: None,
        category_name: None,
        unit_price: 9.99,
        cost_price: 5.0,
        reorder_level: 10,
        reorder_quantity: 50,
        unit_of_measure: "EACH".to_owned(),
        status,
        version: 0,
        created_at: None,
        updated_at: None,
    }
}

fn line(key: u64, product_id: &str, quantity: &str, amount: &str) -> LineDraft {
    LineDraft { key, product_id: product_id.to_owned(), quantity: quantity.to_owned(), amount: amount.to_owned() }
}

// =============================================================================
// build_sales_order
// =============================================================================

#[test]
fn build_maps_amount_to_unit_price() {
    let header = OrderHeaderDraft {
        party_id: "5".to_owned(),
        warehouse_id: "1".to_owned(),
        date: "2026-12-24".to_owned(),
        notes: " gift wrap ".to_owned(),
    };
    let request = build_sales_order(&header, &[line(0, "2", "3", "9.99")]).unwrap();
    assert_eq!(request.customer_id, 5);
    assert_eq!(request.requested_date.as_deref(), Some("2026-12-24"));
    assert_eq!(request.notes.as_deref(), Some("gift wrap"));
    assert_eq!(request.items, vec![SalesOrderLineRequest { product_id: 2, quantity: 3, unit_price: 9.99 }]);
}

#[test]
fn build_names_missing_customer() {
    let header = OrderHeaderDraft { warehouse_id: "1".to_owned(), ..OrderHeaderDraft::default() };
    let errors = build_sales_order(&header, &[line(0, "2", "0", "9.99")]).unwrap_err();
    assert_eq!(errors.header.party, Some("Select a customer"));
    assert_eq!(errors.lines[0].quantity, Some("Min 1"));
}

// =============================================================================
// pick lists
// =============================================================================

#[test]
fn only_active_products_are_sellable() {
    let rows = vec![
        product(1, ProductStatus::Active),
        product(2, ProductStatus::Inactive),
        product(3, ProductStatus::Discontinued),
        product(4, ProductStatus::Active),
    ];
    let ids: Vec<i64> = sellable_products(rows).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn customer_options_start_with_placeholder() {
    let customer = Customer {
        id: 8,
        name: "Globex".to_owned(),
        email: None,
        phone: None,
        address: None,
        city: None,
        country: None,
        credit_limit: 0.0,
        status: CustomerStatus::Active,
        created_at: None,
    };
    let options = customer_options(&[customer]);
    assert_eq!(options[0].1, "Select customer");
    assert_eq!(options[1], ("8".to_owned(), "Globex".to_owned()));
}
