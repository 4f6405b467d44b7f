use super::*;

fn movement(id: i64, movement_type: MovementType, quantity: i64) -> InventoryMovement {
    InventoryMovement {
        id,
        product_id: 1,
        product_sku: "SKU-1".to_owned(),
        product_name: "Widget".to_owned(),
        warehouse_id: 1,
        warehouse_name: "Main".to_owned(),
        movement_type,
        quantity,
        quantity_before: 10,
        quantity_after: 10 + quantity,
        reference_type: None,
        reference_id: None,
        notes: None,
        created_at: None,
        created_by: None,
    }
}

#[test]
fn filter_keeps_only_matching_type() {
    let rows = vec![
        movement(1, MovementType::Purchase, 5),
        movement(2, MovementType::Sale, -2),
        movement(3, MovementType::Purchase, 1),
    ];
    let ids: Vec<i64> = filter_movements(rows, Some(MovementType::Purchase)).iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn no_filter_keeps_page_order() {
    let rows = vec![movement(2, MovementType::Sale, -2), movement(1, MovementType::Return, 1)];
    let ids: Vec<i64> = filter_movements(rows, None).iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn type_options_start_with_all() {
    let options = type_options();
    assert_eq!(options[0].0, "ALL");
    assert_eq!(options.len(), MovementType::ALL.len() + 1);
    assert_eq!(MovementType::parse(&options[0].0), None);
}

#[test]
fn change_class_colors_by_sign() {
    assert!(change_class(3).contains("text-success"));
    assert!(change_class(-3).contains("text-error"));
}

#[test]
fn caption_reports_total_records() {
    assert_eq!(movements_caption(42), "Complete audit trail of all stock changes: 42 records");
}
