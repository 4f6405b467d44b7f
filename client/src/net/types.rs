//! Wire DTOs mirroring the ERP REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON representations (camelCase fields,
//! SCREAMING_SNAKE_CASE enums) so serde decoding stays lossless. The client
//! never derives or enforces invariants from them; they are attribute bags
//! the pages render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Declares a status-like enum with its wire strings and a display label.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire representation (e.g. `"LOW_STOCK"`).
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Human label with underscores replaced by spaces.
            #[must_use]
            pub fn label(self) -> String {
                self.as_str().replace('_', " ")
            }

            /// Parse the wire representation.
            #[must_use]
            pub fn parse(raw: &str) -> Option<Self> {
                match raw {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Role attached to an authenticated account.
    UserRole { Admin => "ADMIN", Manager => "MANAGER", Staff => "STAFF" }
}

wire_enum! {
    ProductStatus { Active => "ACTIVE", Inactive => "INACTIVE", Discontinued => "DISCONTINUED" }
}

wire_enum! {
    SupplierStatus { Active => "ACTIVE", Inactive => "INACTIVE", Blacklisted => "BLACKLISTED" }
}

wire_enum! {
    CustomerStatus { Active => "ACTIVE", Inactive => "INACTIVE", Blocked => "BLOCKED" }
}

wire_enum! {
    WarehouseStatus { Active => "ACTIVE", Inactive => "INACTIVE", Maintenance => "MAINTENANCE" }
}

wire_enum! {
    /// Reason a stock movement was recorded.
    MovementType {
        Purchase => "PURCHASE",
        Sale => "SALE",
        Return => "RETURN",
        Adjustment => "ADJUSTMENT",
        Transfer => "TRANSFER",
    }
}

wire_enum! {
    ReferenceType { PurchaseOrder => "PURCHASE_ORDER", SalesOrder => "SALES_ORDER", Manual => "MANUAL" }
}

wire_enum! {
    PurchaseOrderStatus {
        Created => "CREATED",
        Approved => "APPROVED",
        PartiallyReceived => "PARTIALLY_RECEIVED",
        Received => "RECEIVED",
        Cancelled => "CANCELLED",
    }
}

wire_enum! {
    SalesOrderStatus {
        Created => "CREATED",
        Confirmed => "CONFIRMED",
        Picking => "PICKING",
        Shipped => "SHIPPED",
        Delivered => "DELIVERED",
        Cancelled => "CANCELLED",
    }
}

wire_enum! {
    /// Server-computed stock classification for an inventory record.
    StockStatus { InStock => "IN_STOCK", LowStock => "LOW_STOCK", OutOfStock => "OUT_OF_STOCK" }
}

// =============================================================================
// ENVELOPES
// =============================================================================

/// Uniform response envelope wrapping every API payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: T,
    #[serde(default)]
    pub timestamp: String,
}

/// Page envelope returned by collection endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    pub number: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { content: Vec::new(), total_elements: 0, total_pages: 0, size: 0, number: 0 }
    }
}

/// Error body the server returns on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub validation_errors: Option<BTreeMap<String, String>>,
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token response from `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtAuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub username: String,
    pub role: UserRole,
}

/// Signed-in identity kept in the session store and localStorage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    pub role: UserRole,
    pub token: String,
}

impl From<JwtAuthResponse> for AuthUser {
    fn from(value: JwtAuthResponse) -> Self {
        Self { username: value.username, role: value.role, token: value.access_token }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub role: UserRole,
}

// =============================================================================
// CATALOG
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub unit_price: f64,
    pub cost_price: f64,
    pub reorder_level: i64,
    pub reorder_quantity: i64,
    pub unit_of_measure: String,
    pub status: ProductStatus,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub sku: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub unit_price: f64,
    pub cost_price: f64,
    pub reorder_level: i64,
    pub reorder_quantity: i64,
    pub unit_of_measure: String,
    pub status: ProductStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub payment_terms: i64,
    pub lead_time: i64,
    pub status: SupplierStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub payment_terms: i64,
    pub lead_time: i64,
    pub status: SupplierStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub credit_limit: f64,
    pub status: CustomerStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub location: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub status: WarehouseStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =============================================================================
// INVENTORY
// =============================================================================

/// Stock record for one product in one warehouse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: i64,
    pub product_id: i64,
    pub product_sku: String,
    pub product_name: String,
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub quantity: i64,
    pub reserved_quantity: i64,
    pub available_quantity: i64,
    pub stock_value: f64,
    pub stock_status: StockStatus,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Body of `POST /inventory/adjust`; `quantity` is a signed delta.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAdjustRequest {
    pub product_id: i64,
    pub warehouse_id: i64,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryMovement {
    pub id: i64,
    pub product_id: i64,
    pub product_sku: String,
    pub product_name: String,
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub movement_type: MovementType,
    pub quantity: i64,
    pub quantity_before: i64,
    pub quantity_after: i64,
    pub reference_type: Option<ReferenceType>,
    pub reference_id: Option<i64>,
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

// =============================================================================
// ORDERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderItem {
    pub id: Option<i64>,
    pub product_id: i64,
    pub product_sku: Option<String>,
    pub product_name: Option<String>,
    pub quantity: i64,
    pub received_quantity: Option<i64>,
    pub pending_quantity: Option<i64>,
    pub unit_cost: f64,
    pub total_cost: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: i64,
    pub order_number: String,
    pub supplier_id: i64,
    pub supplier_name: String,
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub status: PurchaseOrderStatus,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub expected_date: Option<String>,
    pub received_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<PurchaseOrderItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderLineRequest {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderRequest {
    pub supplier_id: i64,
    pub warehouse_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<PurchaseOrderLineRequest>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderItem {
    pub id: Option<i64>,
    pub product_id: i64,
    pub product_sku: Option<String>,
    pub product_name: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: i64,
    pub order_number: String,
    pub customer_id: i64,
    pub customer_name: String,
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub status: SalesOrderStatus,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub requested_date: Option<String>,
    pub shipped_at: Option<String>,
    pub delivered_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<SalesOrderItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderLineRequest {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderRequest {
    pub customer_id: i64,
    pub warehouse_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<SalesOrderLineRequest>,
}

// =============================================================================
// USERS
// =============================================================================

/// Account row from `GET /users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
    pub enabled: bool,
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// "First Last", falling back to the username when no name is on file.
    #[must_use]
    pub fn display_name(&self) -> String {
        let parts = [self.first_name.as_deref(), self.last_name.as_deref()];
        let name = parts
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() { self.username.clone() } else { name }
    }
}

// =============================================================================
// DASHBOARDS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    pub product_id: i64,
    pub sku: String,
    pub name: String,
    pub quantity: i64,
    pub reorder_level: i64,
    pub warehouse: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfStockItem {
    pub product_id: i64,
    pub sku: String,
    pub name: String,
    pub warehouse: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FastMovingProduct {
    pub product_id: i64,
    pub total_sold_qty: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryDashboard {
    pub total_products: i64,
    pub low_stock_count: i64,
    pub out_of_stock_count: i64,
    pub total_inventory_valuation: f64,
    pub low_stock_items: Vec<LowStockItem>,
    pub out_of_stock_items: Vec<OutOfStockItem>,
    pub fast_moving_products: Vec<FastMovingProduct>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSellingProduct {
    pub product_id: i64,
    pub total_quantity: i64,
    pub total_revenue: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDashboard {
    pub monthly_revenue: f64,
    pub status_distribution: BTreeMap<String, i64>,
    pub top_selling_products: Vec<TopSellingProduct>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagementDashboard {
    pub monthly_revenue: f64,
    pub yearly_revenue: f64,
    pub inventory_valuation: f64,
    pub total_active_products: i64,
    pub low_stock_alerts: i64,
    pub out_of_stock_alerts: i64,
    pub total_sales_orders: i64,
    pub total_purchase_orders: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPerformance {
    pub supplier_id: i64,
    pub supplier_name: String,
    pub total_orders: i64,
    #[serde(default)]
    pub avg_delivery_days: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierSpend {
    pub supplier_id: i64,
    pub supplier_name: String,
    pub order_count: i64,
    pub total_spend: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupplierDashboard {
    pub supplier_performance: Vec<SupplierPerformance>,
    pub top_suppliers_by_spend: Vec<SupplierSpend>,
}
