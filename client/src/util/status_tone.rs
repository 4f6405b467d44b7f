//! Chip color tone per status value.

#[cfg(test)]
#[path = "status_tone_test.rs"]
mod status_tone_test;

use crate::net::types::{
    MovementType, ProductStatus, PurchaseOrderStatus, SalesOrderStatus, StockStatus, SupplierStatus, UserRole,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Accent,
    Success,
    Warning,
    Error,
}

impl Tone {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "chip chip--neutral",
            Self::Info => "chip chip--info",
            Self::Accent => "chip chip--accent",
            Self::Success => "chip chip--success",
            Self::Warning => "chip chip--warning",
            Self::Error => "chip chip--error",
        }
    }
}

#[must_use]
pub fn purchase_order(status: PurchaseOrderStatus) -> Tone {
    match status {
        PurchaseOrderStatus::Created => Tone::Neutral,
        PurchaseOrderStatus::Approved => Tone::Info,
        PurchaseOrderStatus::PartiallyReceived => Tone::Warning,
        PurchaseOrderStatus::Received => Tone::Success,
        PurchaseOrderStatus::Cancelled => Tone::Error,
    }
}

#[must_use]
pub fn sales_order(status: SalesOrderStatus) -> Tone {
    match status {
        SalesOrderStatus::Created => Tone::Neutral,
        SalesOrderStatus::Confirmed => Tone::Info,
        SalesOrderStatus::Picking => Tone::Accent,
        SalesOrderStatus::Shipped => Tone::Warning,
        SalesOrderStatus::Delivered => Tone::Success,
        SalesOrderStatus::Cancelled => Tone::Error,
    }
}

#[must_use]
pub fn stock(status: StockStatus) -> Tone {
    match status {
        StockStatus::InStock => Tone::Success,
        StockStatus::LowStock => Tone::Warning,
        StockStatus::OutOfStock => Tone::Error,
    }
}

#[must_use]
pub fn product(status: ProductStatus) -> Tone {
    match status {
        ProductStatus::Active => Tone::Success,
        ProductStatus::Inactive => Tone::Neutral,
        ProductStatus::Discontinued => Tone::Error,
    }
}

#[must_use]
pub fn supplier(status: SupplierStatus) -> Tone {
    match status {
        SupplierStatus::Active => Tone::Success,
        SupplierStatus::Inactive => Tone::Neutral,
        SupplierStatus::Blacklisted => Tone::Error,
    }
}

#[must_use]
pub fn movement(kind: MovementType) -> Tone {
    match kind {
        MovementType::Purchase => Tone::Success,
        MovementType::Sale => Tone::Error,
        MovementType::Return => Tone::Warning,
        MovementType::Adjustment => Tone::Info,
        MovementType::Transfer => Tone::Neutral,
    }
}

#[must_use]
pub fn role(role: UserRole) -> Tone {
    match role {
        UserRole::Admin => Tone::Error,
        UserRole::Manager => Tone::Warning,
        UserRole::Staff => Tone::Info,
    }
}
