//! Sidebar navigation table and location matching.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::UserRole;
use crate::util::auth::{ADMINS, MANAGERS, can_access};

pub const BRAND: &str = "EnterpriseERP";
pub const FALLBACK_TITLE: &str = "ERP System";

/// One sidebar entry. Groups have no path of their own and list `children`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: Option<&'static str>,
    /// Empty means every signed-in role.
    pub roles: &'static [UserRole],
    pub children: &'static [NavEntry],
}

const fn link(label: &'static str, path: &'static str, roles: &'static [UserRole]) -> NavEntry {
    NavEntry { label, path: Some(path), roles, children: &[] }
}

pub const NAV: &[NavEntry] = &[
    link("Dashboard", "/dashboard", &[]),
    link("Products", "/products", &[]),
    NavEntry {
        label: "Inventory",
        path: None,
        roles: &[],
        children: &[link("Stock Levels", "/inventory", &[]), link("Movements", "/inventory/movements", &[])],
    },
    link("Purchase Orders", "/purchase-orders", MANAGERS),
    link("Sales Orders", "/sales-orders", &[]),
    link("Suppliers", "/suppliers", &[]),
    link("Analytics", "/analytics", MANAGERS),
    link("Users", "/users", ADMINS),
];

impl NavEntry {
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Exact match for links; prefix match on any child for groups.
    #[must_use]
    pub fn is_active(&self, pathname: &str) -> bool {
        self.path == Some(pathname) || self.children.iter().any(|c| c.path.is_some_and(|p| pathname.starts_with(p)))
    }
}

/// Top-level entries visible to `role`.
#[must_use]
pub fn visible_entries(role: UserRole) -> Vec<&'static NavEntry> {
    NAV.iter().filter(|e| can_access(role, e.roles)).collect()
}

/// Title for the top bar: the label of the entry whose path equals `pathname`.
#[must_use]
pub fn page_title(pathname: &str) -> &'static str {
    NAV.iter()
        .flat_map(|e| std::iter::once(e).chain(e.children.iter()))
        .find(|e| e.path == Some(pathname))
        .map_or(FALLBACK_TITLE, |e| e.label)
}

/// First letter of the username, uppercased, for the avatar bubble.
#[must_use]
pub fn avatar_initial(username: &str) -> String {
    username.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_else(|| "?".to_owned())
}
