use super::*;

#[test]
fn terminal_order_states_use_success_and_error() {
    assert_eq!(purchase_order(PurchaseOrderStatus::Received), Tone::Success);
    assert_eq!(purchase_order(PurchaseOrderStatus::Cancelled), Tone::Error);
    assert_eq!(sales_order(SalesOrderStatus::Delivered), Tone::Success);
    assert_eq!(sales_order(SalesOrderStatus::Cancelled), Tone::Error);
}

#[test]
fn stock_tones_escalate_with_shortage() {
    assert_eq!(stock(StockStatus::InStock), Tone::Success);
    assert_eq!(stock(StockStatus::LowStock), Tone::Warning);
    assert_eq!(stock(StockStatus::OutOfStock), Tone::Error);
}

#[test]
fn movement_tones_distinguish_inbound_and_outbound() {
    assert_eq!(movement(MovementType::Purchase), Tone::Success);
    assert_eq!(movement(MovementType::Sale), Tone::Error);
}

#[test]
fn css_class_carries_modifier() {
    assert_eq!(Tone::Warning.css_class(), "chip chip--warning");
    assert_eq!(Tone::default().css_class(), "chip chip--neutral");
}

#[test]
fn every_role_has_distinct_tone() {
    assert_ne!(role(UserRole::Admin), role(UserRole::Manager));
    assert_ne!(role(UserRole::Manager), role(UserRole::Staff));
}

#[test]
fn modifier_matches_css_class_suffix() {
    for tone in [Tone::Neutral, Tone::Info, Tone::Accent, Tone::Success, Tone::Warning, Tone::Error] {
        assert!(tone.css_class().ends_with(tone.modifier()));
    }
}
