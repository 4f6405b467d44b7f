//! Typed request descriptors for every ERP REST endpoint.
//!
//! DESIGN
//! ======
//! Each function returns an [`ApiCall<T>`] naming the HTTP method, the path
//! relative to the API base, the JSON body, and (via the type parameter) the
//! payload type inside the response envelope. Transport lives in `api`, so
//! request shapes can be unit-tested without a browser.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use super::types::{
    Customer, InventoryAdjustRequest, InventoryDashboard, InventoryMovement, InventoryRecord, JwtAuthResponse,
    LoginRequest, ManagementDashboard, OrderDashboard, Page, Product, ProductRequest, PurchaseOrder,
    PurchaseOrderRequest, RegisterRequest, SalesOrder, SalesOrderRequest, Supplier, SupplierDashboard,
    SupplierRequest, User, Warehouse,
};

/// Default collection page size.
pub const PAGE_SIZE: u32 = 20;
/// Page size used by the movement history table.
pub const MOVEMENT_PAGE_SIZE: u32 = 25;
/// Page size used to populate pick lists (products, suppliers, customers).
pub const PICKLIST_SIZE: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request whose enveloped payload decodes to `T`.
#[derive(Debug)]
pub struct ApiCall<T> {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    /// Whether a 401 on this call means the stored session is dead.
    pub session_bound: bool,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Clone for ApiCall<T> {
    fn clone(&self) -> Self {
        Self {
            method: self.method,
            path: self.path.clone(),
            body: self.body.clone(),
            session_bound: self.session_bound,
            _payload: PhantomData,
        }
    }
}

impl<T> ApiCall<T> {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None, session_bound: true, _payload: PhantomData }
    }

    fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    fn json<B: Serialize>(mut self, body: &B) -> Self {
        // Request DTOs are plain structs; serialization cannot fail.
        self.body = serde_json::to_value(body).ok();
        self
    }

    fn anonymous(mut self) -> Self {
        self.session_bound = false;
        self
    }
}

/// Build `path?k=v&...`, skipping `None` values and percent-encoding the rest.
pub fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let query = params
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}={}", urlencoding::encode(v))))
        .collect::<Vec<_>>();
    if query.is_empty() { path.to_owned() } else { format!("{path}?{}", query.join("&")) }
}

fn paged(path: &str, page: u32, size: u32) -> String {
    with_query(path, &[("page", Some(page.to_string())), ("size", Some(size.to_string()))])
}

// =============================================================================
// AUTH
// =============================================================================

pub fn login(request: &LoginRequest) -> ApiCall<JwtAuthResponse> {
    ApiCall::post("/auth/login").json(request).anonymous()
}

pub fn register(request: &RegisterRequest) -> ApiCall<Value> {
    ApiCall::post("/auth/register").json(request)
}

// =============================================================================
// PRODUCTS
// =============================================================================

pub fn list_products(page: u32, size: u32) -> ApiCall<Page<Product>> {
    ApiCall::get(paged("/products", page, size))
}

/// Name search; the server matches against name and SKU.
pub fn search_products(name: &str, page: u32, size: u32) -> ApiCall<Page<Product>> {
    ApiCall::get(with_query(
        "/products/search",
        &[
            ("name", Some(name.to_owned())),
            ("page", Some(page.to_string())),
            ("size", Some(size.to_string())),
        ],
    ))
}

pub fn get_product(id: i64) -> ApiCall<Product> {
    ApiCall::get(format!("/products/{id}"))
}

pub fn create_product(request: &ProductRequest) -> ApiCall<Product> {
    ApiCall::post("/products").json(request)
}

pub fn update_product(id: i64, request: &ProductRequest) -> ApiCall<Product> {
    ApiCall::put(format!("/products/{id}")).json(request)
}

/// Soft delete: the server flips the product to INACTIVE.
pub fn deactivate_product(id: i64) -> ApiCall<Value> {
    ApiCall::delete(format!("/products/{id}"))
}

// =============================================================================
// INVENTORY
// =============================================================================

pub fn list_inventory(page: u32, size: u32) -> ApiCall<Page<InventoryRecord>> {
    ApiCall::get(paged("/inventory", page, size))
}

pub fn low_stock() -> ApiCall<Vec<InventoryRecord>> {
    ApiCall::get("/inventory/low-stock")
}

pub fn out_of_stock() -> ApiCall<Vec<InventoryRecord>> {
    ApiCall::get("/inventory/out-of-stock")
}

pub fn adjust_inventory(request: &InventoryAdjustRequest) -> ApiCall<InventoryRecord> {
    ApiCall::post("/inventory/adjust").json(request)
}

pub fn list_movements(product_id: Option<i64>, page: u32, size: u32) -> ApiCall<Page<InventoryMovement>> {
    ApiCall::get(with_query(
        "/inventory/movements",
        &[
            ("productId", product_id.map(|id| id.to_string())),
            ("page", Some(page.to_string())),
            ("size", Some(size.to_string())),
        ],
    ))
}

// =============================================================================
// PARTNERS & SITES
// =============================================================================

pub fn list_suppliers(page: u32, size: u32) -> ApiCall<Page<Supplier>> {
    ApiCall::get(paged("/suppliers", page, size))
}

pub fn get_supplier(id: i64) -> ApiCall<Supplier> {
    ApiCall::get(format!("/suppliers/{id}"))
}

pub fn create_supplier(request: &SupplierRequest) -> ApiCall<Supplier> {
    ApiCall::post("/suppliers").json(request)
}

pub fn update_supplier(id: i64, request: &SupplierRequest) -> ApiCall<Supplier> {
    ApiCall::put(format!("/suppliers/{id}")).json(request)
}

pub fn list_customers(page: u32, size: u32) -> ApiCall<Page<Customer>> {
    ApiCall::get(paged("/customers", page, size))
}

pub fn list_warehouses() -> ApiCall<Page<Warehouse>> {
    ApiCall::get("/warehouses?size=50")
}

// =============================================================================
// PURCHASE ORDERS
// =============================================================================

/// Lifecycle actions the purchase order API exposes as `POST /{id}/{action}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseOrderAction {
    Approve,
    Receive,
    Cancel,
}

impl PurchaseOrderAction {
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Receive => "receive",
            Self::Cancel => "cancel",
        }
    }
}

pub fn list_purchase_orders(page: u32, size: u32) -> ApiCall<Page<PurchaseOrder>> {
    ApiCall::get(paged("/purchase-orders", page, size))
}

pub fn get_purchase_order(id: i64) -> ApiCall<PurchaseOrder> {
    ApiCall::get(format!("/purchase-orders/{id}"))
}

pub fn create_purchase_order(request: &PurchaseOrderRequest) -> ApiCall<PurchaseOrder> {
    ApiCall::post("/purchase-orders").json(request)
}

pub fn purchase_order_action(id: i64, action: PurchaseOrderAction) -> ApiCall<PurchaseOrder> {
    ApiCall::post(format!("/purchase-orders/{id}/{}", action.path_segment()))
}

// =============================================================================
// SALES ORDERS
// =============================================================================

/// Lifecycle actions the sales order API exposes as `POST /{id}/{action}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalesOrderAction {
    Confirm,
    Ship,
    Deliver,
    Cancel,
}

impl SalesOrderAction {
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Ship => "ship",
            Self::Deliver => "deliver",
            Self::Cancel => "cancel",
        }
    }
}

pub fn list_sales_orders(page: u32, size: u32) -> ApiCall<Page<SalesOrder>> {
    ApiCall::get(paged("/sales-orders", page, size))
}

pub fn get_sales_order(id: i64) -> ApiCall<SalesOrder> {
    ApiCall::get(format!("/sales-orders/{id}"))
}

pub fn create_sales_order(request: &SalesOrderRequest) -> ApiCall<SalesOrder> {
    ApiCall::post("/sales-orders").json(request)
}

pub fn sales_order_action(id: i64, action: SalesOrderAction) -> ApiCall<SalesOrder> {
    ApiCall::post(format!("/sales-orders/{id}/{}", action.path_segment()))
}

// =============================================================================
// USERS & DASHBOARDS
// =============================================================================

pub fn list_users() -> ApiCall<Vec<User>> {
    ApiCall::get("/users")
}

pub fn inventory_dashboard() -> ApiCall<InventoryDashboard> {
    ApiCall::get("/dashboard/inventory")
}

pub fn order_dashboard() -> ApiCall<OrderDashboard> {
    ApiCall::get("/dashboard/orders")
}

pub fn management_dashboard() -> ApiCall<ManagementDashboard> {
    ApiCall::get("/dashboard/management")
}

pub fn supplier_dashboard() -> ApiCall<SupplierDashboard> {
    ApiCall::get("/dashboard/supplier")
}
