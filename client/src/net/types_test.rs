use super::*;

// =============================================================
// Enums
// =============================================================

#[test]
fn stock_status_uses_screaming_snake_case() {
    assert_eq!(serde_json::to_string(&StockStatus::LowStock).unwrap(), "\"LOW_STOCK\"");
    let parsed: StockStatus = serde_json::from_str("\"OUT_OF_STOCK\"").unwrap();
    assert_eq!(parsed, StockStatus::OutOfStock);
}

#[test]
fn enum_label_replaces_underscores() {
    assert_eq!(PurchaseOrderStatus::PartiallyReceived.label(), "PARTIALLY RECEIVED");
    assert_eq!(StockStatus::InStock.label(), "IN STOCK");
    assert_eq!(UserRole::Admin.label(), "ADMIN");
}

#[test]
fn enum_parse_round_trips_all_variants() {
    for status in SalesOrderStatus::ALL {
        assert_eq!(SalesOrderStatus::parse(status.as_str()), Some(*status));
    }
    assert_eq!(SalesOrderStatus::parse("shipped"), None);
}

#[test]
fn unknown_enum_value_fails_to_decode() {
    assert!(serde_json::from_str::<UserRole>("\"ROOT\"").is_err());
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn envelope_decodes_paged_products() {
    let raw = serde_json::json!({
        "success": true,
        "message": null,
        "timestamp": "2024-03-01T10:15:30",
        "data": {
            "content": [{
                "id": 7,
                "sku": "SKU-007",
                "name": "Widget",
                "unitPrice": 12.5,
                "costPrice": 8.0,
                "reorderLevel": 10,
                "reorderQuantity": 50,
                "unitOfMeasure": "EACH",
                "status": "ACTIVE",
                "version": 2,
                "createdAt": "2024-01-01T00:00:00",
                "updatedAt": "2024-01-02T00:00:00"
            }],
            "totalElements": 41,
            "totalPages": 3,
            "size": 20,
            "number": 0
        }
    });
    let env: ApiEnvelope<Page<Product>> = serde_json::from_value(raw).unwrap();
    assert!(env.success);
    assert_eq!(env.data.total_elements, 41);
    assert_eq!(env.data.content[0].sku, "SKU-007");
    assert_eq!(env.data.content[0].description, None);
    assert_eq!(env.data.content[0].status, ProductStatus::Active);
}

#[test]
fn envelope_tolerates_missing_timestamp() {
    let env: ApiEnvelope<String> = serde_json::from_str(r#"{"success":true,"data":"ok"}"#).unwrap();
    assert_eq!(env.data, "ok");
    assert!(env.timestamp.is_empty());
}

#[test]
fn error_body_decodes_validation_errors() {
    let raw = r#"{
        "timestamp": "2024-03-01T10:15:30",
        "status": 400,
        "message": "Validation failed",
        "errorCode": "VALIDATION_ERROR",
        "path": "/api/products",
        "validationErrors": { "sku": "must not be blank" }
    }"#;
    let body: ErrorBody = serde_json::from_str(raw).unwrap();
    assert_eq!(body.status, 400);
    assert_eq!(body.error_code.as_deref(), Some("VALIDATION_ERROR"));
    assert_eq!(
        body.validation_errors.unwrap().get("sku").map(String::as_str),
        Some("must not be blank")
    );
}

// =============================================================
// Requests
// =============================================================

#[test]
fn adjust_request_serializes_camel_case_and_omits_empty_notes() {
    let req = InventoryAdjustRequest { product_id: 3, warehouse_id: 1, quantity: -4, notes: None };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "productId": 3, "warehouseId": 1, "quantity": -4 })
    );
}

#[test]
fn purchase_order_request_serializes_items() {
    let req = PurchaseOrderRequest {
        supplier_id: 2,
        warehouse_id: 1,
        expected_date: Some("2024-04-01".to_owned()),
        notes: None,
        items: vec![PurchaseOrderLineRequest { product_id: 9, quantity: 5, unit_cost: 2.5 }],
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "supplierId": 2,
            "warehouseId": 1,
            "expectedDate": "2024-04-01",
            "items": [{ "productId": 9, "quantity": 5, "unitCost": 2.5 }]
        })
    );
}

// =============================================================
// Auth
// =============================================================

#[test]
fn auth_user_from_jwt_response_keeps_token() {
    let jwt = JwtAuthResponse {
        access_token: "abc.def".to_owned(),
        token_type: "Bearer".to_owned(),
        expires_in: 86_400_000,
        username: "manager".to_owned(),
        role: UserRole::Manager,
    };
    let user = AuthUser::from(jwt);
    assert_eq!(user.username, "manager");
    assert_eq!(user.role, UserRole::Manager);
    assert_eq!(user.token, "abc.def");
}

#[test]
fn user_display_name_falls_back_to_username() {
    let mut user = User {
        id: 1,
        username: "jdoe".to_owned(),
        email: "j@example.com".to_owned(),
        first_name: None,
        last_name: None,
        role: UserRole::Staff,
        enabled: true,
        last_login: None,
        created_at: None,
    };
    assert_eq!(user.display_name(), "jdoe");
    user.first_name = Some("Jane".to_owned());
    user.last_name = Some("Doe".to_owned());
    assert_eq!(user.display_name(), "Jane Doe");
}

// =============================================================
// Dashboards
// =============================================================

#[test]
fn inventory_dashboard_defaults_missing_sections() {
    let dash: InventoryDashboard = serde_json::from_str(r#"{"totalProducts": 12}"#).unwrap();
    assert_eq!(dash.total_products, 12);
    assert!(dash.low_stock_items.is_empty());
    assert_eq!(dash.total_inventory_valuation, 0.0);
}

#[test]
fn order_dashboard_decodes_status_distribution() {
    let dash: OrderDashboard = serde_json::from_str(
        r#"{"monthlyRevenue": 1500.25, "statusDistribution": {"CREATED": 3, "SHIPPED": 1}}"#,
    )
    .unwrap();
    assert_eq!(dash.status_distribution.get("CREATED"), Some(&3));
    assert_eq!(dash.monthly_revenue, 1500.25);
}
