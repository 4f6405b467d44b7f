use super::*;

fn manager() -> AuthUser {
    AuthUser { username: "manager".to_owned(), role: UserRole::Manager, token: "tok".to_owned() }
}

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
}

#[test]
fn set_credentials_signs_in() {
    let mut state = AuthState::default();
    state.set_credentials(manager());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.role(), Some(UserRole::Manager));
}

#[test]
fn logout_clears_user() {
    let mut state = AuthState::default();
    state.set_credentials(manager());
    state.logout();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_outside_browser_is_signed_out() {
    let state = AuthState::restore();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_eq!(stored_token(), None);
}
