use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_sidebar_open() {
    assert!(UiState::default().sidebar_open);
}

#[test]
fn ui_state_default_expands_inventory_group() {
    let state = UiState::default();
    assert!(state.is_expanded("Inventory"));
    assert!(!state.is_expanded("Products"));
}

// =============================================================
// Toggles
// =============================================================

#[test]
fn toggle_sidebar_flips_state() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    state.toggle_sidebar();
    assert!(state.sidebar_open);
}

#[test]
fn toggle_group_collapses_and_reexpands() {
    let mut state = UiState::default();
    state.toggle_group("Inventory");
    assert!(!state.is_expanded("Inventory"));
    state.toggle_group("Inventory");
    assert!(state.is_expanded("Inventory"));
}
