use super::*;
use crate::net::types::AuthUser;

fn signed_in(role: UserRole) -> AuthState {
    AuthState {
        user: Some(AuthUser { username: "someone".to_owned(), role, token: "t".to_owned() }),
        loading: false,
    }
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in(UserRole::Staff)));
}

// =============================================================
// route_access
// =============================================================

#[test]
fn staff_cannot_reach_user_administration() {
    let access = route_access(&signed_in(UserRole::Staff), ADMINS);
    assert_eq!(access, RouteAccess::RedirectHome);
    assert_eq!(access.redirect_target(), Some("/"));
}

#[test]
fn manager_cannot_reach_user_administration() {
    assert_eq!(route_access(&signed_in(UserRole::Manager), ADMINS), RouteAccess::RedirectHome);
}

#[test]
fn admin_reaches_every_gated_route() {
    let admin = signed_in(UserRole::Admin);
    assert_eq!(route_access(&admin, ADMINS), RouteAccess::Granted);
    assert_eq!(route_access(&admin, MANAGERS), RouteAccess::Granted);
    assert_eq!(route_access(&admin, &[]), RouteAccess::Granted);
}

#[test]
fn staff_is_limited_to_open_routes() {
    let staff = signed_in(UserRole::Staff);
    assert_eq!(route_access(&staff, &[]), RouteAccess::Granted);
    assert_eq!(route_access(&staff, MANAGERS), RouteAccess::RedirectHome);
}

#[test]
fn anonymous_user_is_sent_to_login() {
    let state = AuthState { user: None, loading: false };
    let access = route_access(&state, &[]);
    assert_eq!(access, RouteAccess::RedirectLogin);
    assert_eq!(access.redirect_target(), Some("/login"));
}

#[test]
fn restoring_session_is_pending() {
    assert_eq!(route_access(&AuthState::default(), ADMINS), RouteAccess::Pending);
    assert_eq!(RouteAccess::Pending.redirect_target(), None);
}

// =============================================================
// login_redirect / can_access
// =============================================================

#[test]
fn login_page_redirects_signed_in_users_home() {
    assert_eq!(login_redirect(&signed_in(UserRole::Staff)), Some("/"));
    assert_eq!(login_redirect(&AuthState { user: None, loading: false }), None);
    assert_eq!(login_redirect(&AuthState::default()), None);
}

#[test]
fn can_access_is_set_membership() {
    assert!(can_access(UserRole::Manager, MANAGERS));
    assert!(!can_access(UserRole::Staff, MANAGERS));
    assert!(can_access(UserRole::Staff, &[]));
}
