use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    let b = state.push(ToastKind::Success, "two");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for n in 0..5 {
        state.push(ToastKind::Info, format!("toast {n}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    let messages: Vec<&str> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["toast 2", "toast 3", "toast 4"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push(ToastKind::Warning, "keep");
    let drop = state.push(ToastKind::Error, "drop");
    state.dismiss(drop);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "x");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn kind_maps_to_css_modifier() {
    assert_eq!(ToastKind::Success.css_modifier(), "success");
    assert_eq!(ToastKind::Error.css_modifier(), "error");
}
