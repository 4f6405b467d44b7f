use super::*;

#[test]
fn range_label_first_page() {
    assert_eq!(range_label(0, 20, 41), "1\u{2013}20 of 41");
}

#[test]
fn range_label_last_partial_page() {
    assert_eq!(range_label(2, 20, 41), "41\u{2013}41 of 41");
}

#[test]
fn range_label_empty_result() {
    assert_eq!(range_label(0, 20, 0), "0 of 0");
}

#[test]
fn range_label_page_past_end() {
    assert_eq!(range_label(5, 20, 41), "0 of 41");
}

#[test]
fn has_next_stops_at_last_page() {
    assert!(has_next(0, 3));
    assert!(has_next(1, 3));
    assert!(!has_next(2, 3));
    assert!(!has_next(0, 0));
}
