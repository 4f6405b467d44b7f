use super::*;

fn labels(role: UserRole) -> Vec<&'static str> {
    visible_entries(role).iter().map(|e| e.label).collect()
}

#[test]
fn admin_sees_every_entry() {
    assert_eq!(labels(UserRole::Admin).len(), NAV.len());
}

#[test]
fn manager_sees_purchasing_and_analytics_but_not_users() {
    let visible = labels(UserRole::Manager);
    assert!(visible.contains(&"Purchase Orders"));
    assert!(visible.contains(&"Analytics"));
    assert!(!visible.contains(&"Users"));
}

#[test]
fn staff_sees_only_open_entries() {
    assert_eq!(
        labels(UserRole::Staff),
        vec!["Dashboard", "Products", "Inventory", "Sales Orders", "Suppliers"]
    );
}

#[test]
fn link_is_active_on_exact_path_only() {
    let products = &NAV[1];
    assert!(products.is_active("/products"));
    assert!(!products.is_active("/products/new"));
}

#[test]
fn group_is_active_when_child_prefixes_location() {
    let inventory = &NAV[2];
    assert!(inventory.is_group());
    assert!(inventory.is_active("/inventory"));
    assert!(inventory.is_active("/inventory/movements"));
    assert!(!inventory.is_active("/dashboard"));
}

#[test]
fn page_title_covers_nested_entries() {
    assert_eq!(page_title("/inventory/movements"), "Movements");
    assert_eq!(page_title("/dashboard"), "Dashboard");
}

#[test]
fn page_title_falls_back_for_unlisted_paths() {
    assert_eq!(page_title("/purchase-orders/12"), FALLBACK_TITLE);
    assert_eq!(page_title("/"), "ERP System");
}

#[test]
fn avatar_initial_uppercases_first_char() {
    assert_eq!(avatar_initial("manager"), "M");
    assert_eq!(avatar_initial(""), "?");
}
