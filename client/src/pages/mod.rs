//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (queries, form drafts, dialog
//! state) and delegates rendering details to `components`.

pub mod analytics;
pub mod dashboard;
pub mod inventory;
pub mod inventory_movements;
pub mod login;
pub mod product_form;
pub mod products;
pub mod purchase_order_detail;
pub mod purchase_order_form;
pub mod purchase_orders;
pub mod sales_order_detail;
pub mod sales_order_form;
pub mod sales_orders;
pub mod suppliers;
pub mod users;
