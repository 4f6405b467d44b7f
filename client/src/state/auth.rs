//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and role-dependent rendering. The signed-in identity is mirrored to
//! `localStorage` (`erp_user` as JSON, `erp_token` as the raw bearer token) so
//! a reload restores the session without a round trip.
//!
//! DESIGN
//! ======
//! `loading` starts `true` on both server and browser so SSR output matches the
//! first hydrated render; the app flips it once storage has been read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthUser, UserRole};
use crate::util::storage;

pub const TOKEN_KEY: &str = "erp_token";
pub const USER_KEY: &str = "erp_user";

/// Authentication state tracking the current user and restore status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// State rebuilt from persisted storage. A user entry without its token
    /// counts as signed out.
    #[must_use]
    pub fn restore() -> Self {
        let user = storage::load_json::<AuthUser>(USER_KEY).filter(|_| stored_token().is_some());
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Record a fresh sign-in and persist it.
    pub fn set_credentials(&mut self, user: AuthUser) {
        storage::save_raw(TOKEN_KEY, &user.token);
        storage::save_json(USER_KEY, &user);
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the session in memory and in storage.
    pub fn logout(&mut self) {
        clear_persisted_session();
        self.user = None;
        self.loading = false;
    }
}

/// Bearer token for outgoing requests.
pub fn stored_token() -> Option<String> {
    storage::load_raw(TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Remove both persisted session keys.
pub fn clear_persisted_session() {
    storage::remove(TOKEN_KEY);
    storage::remove(USER_KEY);
}
