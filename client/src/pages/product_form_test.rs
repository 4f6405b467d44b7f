use super::*;

fn valid_draft() -> ProductDraft {
    ProductDraft {
        sku: " BLT-100 ".to_owned(),
        name: "Hex Bolt".to_owned(),
        unit_price: "1.25".to_owned(),
        cost_price: "0.40".to_owned(),
        ..ProductDraft::default()
    }
}

#[test]
fn draft_defaults_match_new_product_form() {
    let draft = ProductDraft::default();
    assert_eq!(draft.reorder_level, "10");
    assert_eq!(draft.reorder_quantity, "50");
    assert_eq!(draft.unit_of_measure, "EACH");
    assert_eq!(draft.status, ProductStatus::Active);
}

#[test]
fn validate_builds_trimmed_request() {
    let request = validate_product(&valid_draft()).unwrap();
    assert_eq!(request.sku, "BLT-100");
    assert_eq!(request.unit_price, 1.25);
    assert_eq!(request.cost_price, 0.40);
    assert_eq!(request.reorder_level, 10);
    assert_eq!(request.reorder_quantity, 50);
    assert_eq!(request.description, None);
}

#[test]
fn validate_requires_sku_and_name() {
    let draft = ProductDraft { sku: "  ".to_owned(), name: String::new(), ..valid_draft() };
    let errors = validate_product(&draft).unwrap_err();
    assert_eq!(errors.sku, Some("SKU is required"));
    assert_eq!(errors.name, Some("Name is required"));
}

#[test]
fn validate_caps_sku_length() {
    let draft = ProductDraft { sku: "X".repeat(SKU_MAX_CHARS + 1), ..valid_draft() };
    assert_eq!(validate_product(&draft).unwrap_err().sku, Some("Max 100 chars"));

    let draft = ProductDraft { sku: "X".repeat(SKU_MAX_CHARS), ..valid_draft() };
    assert!(validate_product(&draft).is_ok());
}

#[test]
fn validate_rejects_negative_and_missing_prices() {
    let draft = ProductDraft { unit_price: "-1".to_owned(), cost_price: String::new(), ..valid_draft() };
    let errors = validate_product(&draft).unwrap_err();
    assert_eq!(errors.unit_price, Some("Must be \u{2265} 0"));
    assert_eq!(errors.cost_price, Some("Cost price required"));
}

#[test]
fn validate_rejects_negative_reorder_settings() {
    let draft = ProductDraft { reorder_level: "-5".to_owned(), reorder_quantity: "abc".to_owned(), ..valid_draft() };
    let errors = validate_product(&draft).unwrap_err();
    assert!(errors.reorder_level.is_some());
    assert!(errors.reorder_quantity.is_some());
}

#[test]
fn draft_round_trips_existing_product() {
    let product = Product {
        id: 9,
        sku: "SKU-9".to_owned(),
        name: "Gear".to_owned(),
        description: Some("Steel".to_owned()),
        category_id: None,
        category_name: None,
        unit_price: 12.5,
        cost_price: 7.0,
        reorder_level: 4,
        reorder_quantity: 20,
        unit_of_measure: "BOX".to_owned(),
        status: ProductStatus::Discontinued,
        version: 0,
        created_at: None,
        updated_at: None,
    };
    let request = validate_product(&ProductDraft::from(&product)).unwrap();
    assert_eq!(request.description.as_deref(), Some("Steel"));
    assert_eq!(request.unit_price, 12.5);
    assert_eq!(request.unit_of_measure, "BOX");
    assert_eq!(request.status, ProductStatus::Discontinued);
}

#[test]
fn success_message_depends_on_mode() {
    assert_eq!(success_message(true), "Product updated successfully");
    assert_eq!(success_message(false), "Product created successfully");
}

#[test]
fn unit_options_list_every_unit_in_order() {
    let options = unit_options();
    assert_eq!(options.len(), UNITS_OF_MEASURE.len());
    assert_eq!(options.first(), Some(&("EACH".to_owned(), "EACH".to_owned())));
    assert_eq!(options.last(), Some(&("SET".to_owned(), "SET".to_owned())));
}
