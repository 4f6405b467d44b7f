//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application shell, tables chrome, charts, and
//! dialogs while reading/writing shared state from Leptos context providers.

pub mod chart;
pub mod dialog;
pub mod feedback;
pub mod form_field;
pub mod info_row;
pub mod kpi_card;
pub mod layout;
pub mod order_lines;
pub mod pager;
pub mod role_gate;
pub mod status_chip;
pub mod toast_host;
