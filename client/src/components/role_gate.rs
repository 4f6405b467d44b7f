//! Route wrapper that admits only the listed roles.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserRole;
use crate::state::auth::AuthState;
use crate::util::auth::{RouteAccess, install_route_guard, route_access};

/// Render `children` only when the signed-in role is in `roles`; otherwise
/// redirect (anonymous users to `/login`, everyone else to `/`).
#[component]
pub fn RoleGate(roles: &'static [UserRole], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, roles, use_navigate());

    view! {
        <Show when=move || route_access(&auth.get(), roles) == RouteAccess::Granted>
            {children()}
        </Show>
    }
}
