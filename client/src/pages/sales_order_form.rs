//! New sales order form. Unit prices fill from the product's selling price.

#[cfg(test)]
#[path = "sales_order_form_test.rs"]
mod sales_order_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, SelectField};
use crate::components::order_lines::{
    LineDraft, LineErrors, OrderHeaderDraft, OrderHeaderErrors, OrderLinesEditor, validate_header, validate_lines,
};
use crate::net::endpoints::{self, PICKLIST_SIZE};
use crate::net::types::{Customer, Product, ProductStatus, SalesOrderLineRequest, SalesOrderRequest};
use crate::pages::inventory::warehouse_options;
use crate::state::mutation::Mutator;
use crate::state::query::{key, use_query};
use crate::state::toast::ToastKind;

/// Customers offered in the pick list.
pub const CUSTOMER_PICKLIST_SIZE: u32 = 100;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SalesOrderErrors {
    pub header: OrderHeaderErrors,
    pub lines: Vec<LineErrors>,
}

/// # Errors
///
/// Returns header and per-line messages when any field fails.
pub fn build_sales_order(header: &OrderHeaderDraft, lines: &[LineDraft]) -> Result<SalesOrderRequest, SalesOrderErrors> {
    match (validate_header(header, "Select a customer"), validate_lines(lines)) {
        (Ok((customer_id, warehouse_id, requested_date, notes)), Ok(items)) => Ok(SalesOrderRequest {
            customer_id,
            warehouse_id,
            requested_date,
            notes,
            items: items
                .into_iter()
                .map(|l| SalesOrderLineRequest { product_id: l.product_id, quantity: l.quantity, unit_price: l.amount })
                .collect(),
        }),
        (header, lines) => {
            Err(SalesOrderErrors { header: header.err().unwrap_or_default(), lines: lines.err().unwrap_or_default() })
        }
    }
}

/// Only active products can be sold.
#[must_use]
pub fn sellable_products(products: Vec<Product>) -> Vec<Product> {
    products.into_iter().filter(|p| p.status == ProductStatus::Active).collect()
}

#[must_use]
pub fn customer_options(customers: &[Customer]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select customer".to_owned()))
        .chain(customers.iter().map(|c| (c.id.to_string(), c.name.clone())))
        .collect()
}

#[component]
pub fn SalesOrderFormPage() -> impl IntoView {
    let navigate = use_navigate();
    let mutator = Mutator::from_context();

    let header = RwSignal::new(OrderHeaderDraft::default());
    let lines = RwSignal::new(vec![LineDraft::new(0)]);
    let errors = RwSignal::new(SalesOrderErrors::default());
    let saving = RwSignal::new(false);

    let customers = use_query(|| key(["customers", "picklist"]), |_| endpoints::list_customers(0, CUSTOMER_PICKLIST_SIZE));
    let warehouses = use_query(|| key(["warehouses"]), |_| endpoints::list_warehouses());
    let products = use_query(|| key(["products", "picklist"]), |_| endpoints::list_products(0, PICKLIST_SIZE));
    let product_rows =
        Signal::derive(move || sellable_products(products.get().and_then(Result::ok).map(|p| p.content).unwrap_or_default()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match build_sales_order(&header.get_untracked(), &lines.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(SalesOrderErrors::default());
        let navigate = navigate.clone();
        mutator.run_reporting(
            endpoints::create_sales_order(&request),
            &["sales-orders", "dashboard"],
            "Failed to create order",
            saving,
            move |so| {
                navigate("/sales-orders", NavigateOptions::default());
                (ToastKind::Success, format!("Sales order {} created", so.order_number))
            },
        );
    };

    let header_field = move |get: fn(&OrderHeaderDraft) -> &String| Signal::derive(move || header.with(|h| get(h).clone()));
    let header_setter =
        move |set: fn(&mut OrderHeaderDraft, String)| Callback::new(move |v: String| header.update(|h| set(h, v)));

    view! {
        <div class="page page--narrow">
            <nav class="breadcrumbs">
                <a href="/sales-orders">"Sales Orders"</a>
                <span>"New Sales Order"</span>
            </nav>
            <div class="page__header">
                <a class="btn btn--ghost" href="/sales-orders">"\u{2190} Back"</a>
                <div>
                    <h1 class="page__title">"Create Sales Order"</h1>
                    <p class="page__subtitle">"Stock is reserved when you confirm the order"</p>
                </div>
            </div>
            <div class="banner banner--info">
                <strong>"Inventory reservation: "</strong>
                "Stock will be reserved when you confirm the order. Inventory is only deducted when the order is shipped."
            </div>
            <form on:submit=on_submit>
                <div class="card form-grid">
                    <h3 class="form-grid__section">"Order Details"</h3>
                    <SelectField
                        label="Customer *"
                        options=Signal::derive(move || {
                            customer_options(&customers.get().and_then(Result::ok).map(|p| p.content).unwrap_or_default())
                        })
                        value=header_field(|h| &h.party_id)
                        on_change=header_setter(|h, v| h.party_id = v)
                        error=Signal::derive(move || errors.get().header.party)
                    />
                    <SelectField
                        label="Ship from Warehouse *"
                        options=Signal::derive(move || {
                            warehouse_options(&warehouses.get().and_then(Result::ok).map(|p| p.content).unwrap_or_default())
                        })
                        value=header_field(|h| &h.warehouse_id)
                        on_change=header_setter(|h, v| h.warehouse_id = v)
                        error=Signal::derive(move || errors.get().header.warehouse)
                    />
                    <FormField
                        label="Requested Delivery Date"
                        input_type="date"
                        value=header_field(|h| &h.date)
                        on_input=header_setter(|h, v| h.date = v)
                    />
                    <FormField label="Notes" value=header_field(|h| &h.notes) on_input=header_setter(|h, v| h.notes = v)/>
                </div>
                <OrderLinesEditor
                    lines=lines
                    products=product_rows
                    errors=Signal::derive(move || errors.get().lines)
                    amount_label="Unit Price"
                    total_label="Subtotal"
                    autofill_price=true
                />
                <div class="form-grid__actions">
                    <a class="btn btn--ghost" href="/sales-orders">"Cancel"</a>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || saving.get() || lines.with(Vec::is_empty)
                    >
                        {move || if saving.get() { "Creating..." } else { "Create Sales Order" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
