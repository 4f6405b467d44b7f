//! Shared auth and role-gating helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: wait while the
//! session is restoring, send anonymous users to `/login`, and send signed-in
//! users without the required role back to `/`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::UserRole;
use crate::state::auth::AuthState;

/// Roles allowed to manage catalog, purchasing, stock, and analytics.
pub const MANAGERS: &[UserRole] = &[UserRole::Admin, UserRole::Manager];
/// Roles allowed to administer user accounts.
pub const ADMINS: &[UserRole] = &[UserRole::Admin];

/// Outcome of checking the session against a route's requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Session still restoring; render nothing yet.
    Pending,
    Granted,
    RedirectLogin,
    RedirectHome,
}

impl RouteAccess {
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::RedirectLogin => Some("/login"),
            Self::RedirectHome => Some("/"),
            Self::Pending | Self::Granted => None,
        }
    }
}

/// Role membership check. An empty `allowed` set admits every role.
#[must_use]
pub fn can_access(role: UserRole, allowed: &[UserRole]) -> bool {
    allowed.is_empty() || allowed.contains(&role)
}

#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Decide what a route guarded by `allowed` should do for `state`.
#[must_use]
pub fn route_access(state: &AuthState, allowed: &[UserRole]) -> RouteAccess {
    if state.loading {
        return RouteAccess::Pending;
    }
    match state.role() {
        None => RouteAccess::RedirectLogin,
        Some(role) if can_access(role, allowed) => RouteAccess::Granted,
        Some(_) => RouteAccess::RedirectHome,
    }
}

/// Decide where the login page should go: signed-in users skip it.
#[must_use]
pub fn login_redirect(state: &AuthState) -> Option<&'static str> {
    (!state.loading && state.user.is_some()).then_some("/")
}

/// Navigate away whenever the session stops satisfying `allowed`.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, allowed: &'static [UserRole], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let access = route_access(&auth.get(), allowed);
        if let Some(target) = access.redirect_target() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
