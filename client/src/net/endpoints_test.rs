use super::*;
use crate::net::types::{InventoryAdjustRequest, LoginRequest};

#[test]
fn with_query_skips_missing_values() {
    let path = with_query("/inventory/movements", &[("productId", None), ("page", Some("2".to_owned()))]);
    assert_eq!(path, "/inventory/movements?page=2");
}

#[test]
fn with_query_without_params_returns_path() {
    assert_eq!(with_query("/users", &[]), "/users");
}

#[test]
fn search_products_percent_encodes_name() {
    let call = search_products("blue widget&co", 0, PAGE_SIZE);
    assert_eq!(call.method, Method::Get);
    assert_eq!(call.path, "/products/search?name=blue%20widget%26co&page=0&size=20");
}

#[test]
fn list_movements_includes_product_filter() {
    assert_eq!(
        list_movements(Some(4), 1, MOVEMENT_PAGE_SIZE).path,
        "/inventory/movements?productId=4&page=1&size=25"
    );
    assert_eq!(list_movements(None, 0, MOVEMENT_PAGE_SIZE).path, "/inventory/movements?page=0&size=25");
}

#[test]
fn login_is_not_session_bound() {
    let call = login(&LoginRequest { username: "admin".to_owned(), password: "Admin@123".to_owned() });
    assert_eq!(call.method, Method::Post);
    assert_eq!(call.path, "/auth/login");
    assert!(!call.session_bound);
    assert_eq!(
        call.body,
        Some(serde_json::json!({ "username": "admin", "password": "Admin@123" }))
    );
}

#[test]
fn data_calls_are_session_bound() {
    assert!(list_products(0, PAGE_SIZE).session_bound);
    assert!(list_users().session_bound);
}

#[test]
fn adjust_inventory_posts_signed_delta() {
    let call = adjust_inventory(&InventoryAdjustRequest {
        product_id: 1,
        warehouse_id: 2,
        quantity: -5,
        notes: Some("damaged".to_owned()),
    });
    assert_eq!(call.path, "/inventory/adjust");
    assert_eq!(call.body.unwrap()["quantity"], -5);
}

#[test]
fn order_actions_map_to_action_paths() {
    assert_eq!(purchase_order_action(9, PurchaseOrderAction::Receive).path, "/purchase-orders/9/receive");
    assert_eq!(sales_order_action(3, SalesOrderAction::Confirm).path, "/sales-orders/3/confirm");
    assert_eq!(sales_order_action(3, SalesOrderAction::Cancel).method, Method::Post);
}

#[test]
fn deactivate_product_uses_delete() {
    let call = deactivate_product(12);
    assert_eq!(call.method, Method::Delete);
    assert_eq!(call.path, "/products/12");
    assert!(call.body.is_none());
}

#[test]
fn clone_preserves_request_shape() {
    let call = get_sales_order(5);
    let copy = call.clone();
    assert_eq!(copy.path, call.path);
    assert_eq!(copy.method, call.method);
}
