use super::*;

fn line(key: u64, product_id: &str, quantity: &str, amount: &str) -> LineDraft {
    LineDraft { key, product_id: product_id.to_owned(), quantity: quantity.to_owned(), amount: amount.to_owned() }
}

// =============================================================================
// totals
// =============================================================================

#[test]
fn line_total_multiplies_quantity_and_amount() {
    assert_eq!(line_total(&line(0, "1", "3", "2.50")), 7.5);
}

#[test]
fn line_total_treats_garbage_as_zero() {
    assert_eq!(line_total(&line(0, "1", "", "2.50")), 0.0);
    assert_eq!(line_total(&line(0, "1", "4", "abc")), 0.0);
}

#[test]
fn order_total_sums_lines() {
    let lines = vec![line(0, "1", "2", "10"), line(1, "2", "1", "5.25")];
    assert_eq!(order_total(&lines), 25.25);
    assert_eq!(order_total(&[]), 0.0);
}

// =============================================================================
// push_line
// =============================================================================

#[test]
fn push_line_uses_fresh_keys_after_removal() {
    let mut lines = Vec::new();
    push_line(&mut lines);
    push_line(&mut lines);
    lines.retain(|l| l.key != 0);
    push_line(&mut lines);
    let keys: Vec<u64> = lines.iter().map(|l| l.key).collect();
    assert_eq!(keys, vec![1, 2]);
    assert_eq!(lines[1].quantity, "1");
}

// =============================================================================
// validate_lines
// =============================================================================

#[test]
fn validate_lines_rejects_empty_order() {
    assert_eq!(validate_lines(&[]), Err(Vec::new()));
}

#[test]
fn validate_lines_returns_parsed_rows() {
    let valid = validate_lines(&[line(0, "4", "2", "3.5")]).unwrap();
    assert_eq!(valid, vec![ValidLine { product_id: 4, quantity: 2, amount: 3.5 }]);
}

#[test]
fn validate_lines_reports_errors_per_row() {
    let errors = validate_lines(&[line(0, "4", "2", "3.5"), line(1, "", "0", "0")]).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].is_empty());
    assert_eq!(errors[1].product, Some("Select a product"));
    assert_eq!(errors[1].quantity, Some("Min 1"));
    assert_eq!(errors[1].amount, Some("Must be > 0"));
}
