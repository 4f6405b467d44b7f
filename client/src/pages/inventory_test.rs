use super::*;

// =============================================================================
// adjust_delta
// =============================================================================

#[test]
fn remove_always_sends_negative_delta() {
    assert_eq!(adjust_delta(AdjustKind::Remove, 5), -5);
    assert_eq!(adjust_delta(AdjustKind::Remove, -5), -5);
}

#[test]
fn add_always_sends_positive_delta() {
    assert_eq!(adjust_delta(AdjustKind::Add, 7), 7);
    assert_eq!(adjust_delta(AdjustKind::Add, -7), 7);
}

#[test]
fn adjust_kind_parses_select_values() {
    assert_eq!(AdjustKind::parse("remove"), AdjustKind::Remove);
    assert_eq!(AdjustKind::parse("add"), AdjustKind::Add);
    assert_eq!(AdjustKind::parse(AdjustKind::Remove.as_str()), AdjustKind::Remove);
}

// =============================================================================
// validate_adjustment
// =============================================================================

fn draft(kind: AdjustKind, quantity: &str) -> AdjustDraft {
    AdjustDraft {
        product_id: "3".to_owned(),
        warehouse_id: "1".to_owned(),
        kind,
        quantity: quantity.to_owned(),
        notes: "  cycle count ".to_owned(),
    }
}

#[test]
fn validate_adjustment_applies_direction_to_typed_quantity() {
    let request = validate_adjustment(&draft(AdjustKind::Remove, "4")).unwrap();
    assert_eq!(request.product_id, 3);
    assert_eq!(request.warehouse_id, 1);
    assert_eq!(request.quantity, -4);
    assert_eq!(request.notes.as_deref(), Some("cycle count"));

    let request = validate_adjustment(&draft(AdjustKind::Add, "-4")).unwrap();
    assert_eq!(request.quantity, 4);
}

#[test]
fn validate_adjustment_rejects_zero_quantity() {
    let errors = validate_adjustment(&draft(AdjustKind::Add, "0")).unwrap_err();
    assert_eq!(errors.quantity, Some("Quantity must be at least 1"));
    assert_eq!(errors.product, None);
}

#[test]
fn validate_adjustment_requires_selections() {
    let errors = validate_adjustment(&AdjustDraft::default()).unwrap_err();
    assert_eq!(errors.product, Some("Select a product"));
    assert_eq!(errors.warehouse, Some("Select a warehouse"));
    assert_eq!(errors.quantity, None);
}

#[test]
fn default_draft_starts_at_one_unit_added() {
    let draft = AdjustDraft::default();
    assert_eq!(draft.kind, AdjustKind::Add);
    assert_eq!(draft.quantity, "1");
}

// =============================================================================
// labels
// =============================================================================

#[test]
fn tab_labels_include_counts() {
    assert_eq!(StockTab::All.label(120), "All Stock (120)");
    assert_eq!(StockTab::Low.label(4), "Low Stock (4)");
    assert_eq!(StockTab::Out.label(0), "Out of Stock (0)");
}

#[test]
fn warehouse_options_start_with_placeholder() {
    let options = warehouse_options(&[]);
    assert_eq!(options, vec![(String::new(), "Select warehouse".to_owned())]);
}
