//! Next-step actions offered for purchase and sales orders.
//!
//! The server validates every transition; these tables only decide which
//! buttons to show for the status it last reported.

#[cfg(test)]
#[path = "order_actions_test.rs"]
mod order_actions_test;

use crate::net::endpoints::{PurchaseOrderAction, SalesOrderAction};
use crate::net::types::{PurchaseOrderStatus, SalesOrderStatus};
use crate::state::toast::ToastKind;

/// Sales order progression shown in the detail stepper.
pub const SALES_LIFECYCLE: [SalesOrderStatus; 5] = [
    SalesOrderStatus::Created,
    SalesOrderStatus::Confirmed,
    SalesOrderStatus::Picking,
    SalesOrderStatus::Shipped,
    SalesOrderStatus::Delivered,
];

#[must_use]
pub fn purchase_order_actions(status: PurchaseOrderStatus) -> Vec<PurchaseOrderAction> {
    use PurchaseOrderStatus as S;
    let mut actions = Vec::new();
    if status == S::Created {
        actions.push(PurchaseOrderAction::Approve);
    }
    if matches!(status, S::Approved | S::PartiallyReceived) {
        actions.push(PurchaseOrderAction::Receive);
    }
    if !matches!(status, S::Received | S::Cancelled) {
        actions.push(PurchaseOrderAction::Cancel);
    }
    actions
}

#[must_use]
pub fn sales_order_actions(status: SalesOrderStatus) -> Vec<SalesOrderAction> {
    use SalesOrderStatus as S;
    let mut actions = Vec::new();
    match status {
        S::Created => actions.push(SalesOrderAction::Confirm),
        S::Confirmed | S::Picking => actions.push(SalesOrderAction::Ship),
        S::Shipped => actions.push(SalesOrderAction::Deliver),
        S::Delivered | S::Cancelled => {}
    }
    if !matches!(status, S::Shipped | S::Delivered | S::Cancelled) {
        actions.push(SalesOrderAction::Cancel);
    }
    actions
}

/// Index of `status` in [`SALES_LIFECYCLE`]; `None` for cancelled orders.
#[must_use]
pub fn lifecycle_step(status: SalesOrderStatus) -> Option<usize> {
    SALES_LIFECYCLE.iter().position(|s| *s == status)
}

/// Button text, success toast text, and toast kind for one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionCopy {
    pub label: &'static str,
    pub success: &'static str,
    pub kind: ToastKind,
    /// Rendered as a destructive (outlined red) button.
    pub destructive: bool,
}

/// CSS class for an action button; destructive actions render outlined red.
#[must_use]
pub fn action_button_class(destructive: bool, compact: bool) -> &'static str {
    match (destructive, compact) {
        (true, true) => "btn btn--danger-outline btn--small",
        (true, false) => "btn btn--danger-outline",
        (false, true) => "btn btn--ghost btn--small",
        (false, false) => "btn btn--primary",
    }
}

#[must_use]
pub fn purchase_action_copy(action: PurchaseOrderAction) -> ActionCopy {
    match action {
        PurchaseOrderAction::Approve => ActionCopy {
            label: "Approve",
            success: "Order approved",
            kind: ToastKind::Success,
            destructive: false,
        },
        PurchaseOrderAction::Receive => ActionCopy {
            label: "Mark Received",
            success: "Inventory updated from PO",
            kind: ToastKind::Success,
            destructive: false,
        },
        PurchaseOrderAction::Cancel => ActionCopy {
            label: "Cancel",
            success: "Order cancelled",
            kind: ToastKind::Warning,
            destructive: true,
        },
    }
}

#[must_use]
pub fn sales_action_copy(action: SalesOrderAction) -> ActionCopy {
    match action {
        SalesOrderAction::Confirm => ActionCopy {
            label: "Confirm & Reserve Stock",
            success: "Order confirmed & inventory reserved",
            kind: ToastKind::Success,
            destructive: false,
        },
        SalesOrderAction::Ship => ActionCopy {
            label: "Ship Order",
            success: "Order shipped & inventory deducted",
            kind: ToastKind::Success,
            destructive: false,
        },
        SalesOrderAction::Deliver => ActionCopy {
            label: "Mark Delivered",
            success: "Order delivered",
            kind: ToastKind::Success,
            destructive: false,
        },
        SalesOrderAction::Cancel => ActionCopy {
            label: "Cancel Order",
            success: "Order cancelled & reservation released",
            kind: ToastKind::Warning,
            destructive: true,
        },
    }
}
