//! Local UI chrome state (theme, sidebar, nav groups).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session state (`auth`) so
//! layout controls can evolve independently of identity data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::BTreeSet;

/// Nav group expanded on first load.
pub const DEFAULT_EXPANDED_GROUP: &str = "Inventory";

/// UI state for theme, sidebar, and expanded navigation groups.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_open: bool,
    pub expanded_groups: BTreeSet<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: true,
            expanded_groups: BTreeSet::from([DEFAULT_EXPANDED_GROUP.to_owned()]),
        }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_group(&mut self, label: &str) {
        if !self.expanded_groups.remove(label) {
            self.expanded_groups.insert(label.to_owned());
        }
    }

    #[must_use]
    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded_groups.contains(label)
    }
}
