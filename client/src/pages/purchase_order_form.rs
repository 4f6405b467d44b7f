//! New purchase order form.

#[cfg(test)]
#[path = "purchase_order_form_test.rs"]
mod purchase_order_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, SelectField};
use crate::components::order_lines::{
    LineDraft, LineErrors, OrderHeaderDraft, OrderHeaderErrors, OrderLinesEditor, validate_header, validate_lines,
};
use crate::net::endpoints::{self, PICKLIST_SIZE};
use crate::net::types::{PurchaseOrderLineRequest, PurchaseOrderRequest, Supplier};
use crate::pages::inventory::warehouse_options;
use crate::state::mutation::Mutator;
use crate::state::query::{key, use_query};
use crate::state::toast::ToastKind;

/// Form validation outcome for a purchase order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PurchaseOrderErrors {
    pub header: OrderHeaderErrors,
    pub lines: Vec<LineErrors>,
}

/// # Errors
///
/// Returns header and per-line messages when any field fails.
pub fn build_purchase_order(
    header: &OrderHeaderDraft,
    lines: &[LineDraft],
) -> Result<PurchaseOrderRequest, PurchaseOrderErrors> {
    match (validate_header(header, "Select a supplier"), validate_lines(lines)) {
        (Ok((supplier_id, warehouse_id, expected_date, notes)), Ok(items)) => Ok(PurchaseOrderRequest {
            supplier_id,
            warehouse_id,
            expected_date,
            notes,
            items: items
                .into_iter()
                .map(|l| PurchaseOrderLineRequest { product_id: l.product_id, quantity: l.quantity, unit_cost: l.amount })
                .collect(),
        }),
        (header, lines) => Err(PurchaseOrderErrors {
            header: header.err().unwrap_or_default(),
            lines: lines.err().unwrap_or_default(),
        }),
    }
}

#[must_use]
pub fn supplier_options(suppliers: &[Supplier]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select supplier".to_owned()))
        .chain(suppliers.iter().map(|s| (s.id.to_string(), s.name.clone())))
        .collect()
}

#[component]
pub fn PurchaseOrderFormPage() -> impl IntoView {
    let navigate = use_navigate();
    let mutator = Mutator::from_context();

    let header = RwSignal::new(OrderHeaderDraft::default());
    let lines = RwSignal::new(vec![LineDraft::new(0)]);
    let errors = RwSignal::new(PurchaseOrderErrors::default());
    let saving = RwSignal::new(false);

    let suppliers = use_query(|| key(["suppliers", "picklist"]), |_| endpoints::list_suppliers(0, 100));
    let warehouses = use_query(|| key(["warehouses"]), |_| endpoints::list_warehouses());
    let products = use_query(|| key(["products", "picklist"]), |_| endpoints::list_products(0, PICKLIST_SIZE));
    let product_rows = Signal::derive(move || products.get().and_then(Result::ok).map(|p| p.content).unwrap_or_default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match build_purchase_order(&header.get_untracked(), &lines.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(PurchaseOrderErrors::default());
        let navigate = navigate.clone();
        mutator.run_reporting(
            endpoints::create_purchase_order(&request),
            &["purchase-orders", "dashboard"],
            "Failed to create PO",
            saving,
            move |po| {
                navigate("/purchase-orders", NavigateOptions::default());
                (ToastKind::Success, format!("Purchase order {} created", po.order_number))
            },
        );
    };

    let header_field = move |get: fn(&OrderHeaderDraft) -> &String| Signal::derive(move || header.with(|h| get(h).clone()));
    let header_setter =
        move |set: fn(&mut OrderHeaderDraft, String)| Callback::new(move |v: String| header.update(|h| set(h, v)));

    view! {
        <div class="page page--narrow">
            <nav class="breadcrumbs">
                <a href="/purchase-orders">"Purchase Orders"</a>
                <span>"New PO"</span>
            </nav>
            <div class="page__header">
                <a class="btn btn--ghost" href="/purchase-orders">"\u{2190} Back"</a>
                <div>
                    <h1 class="page__title">"Create Purchase Order"</h1>
                    <p class="page__subtitle">"Order stock from a supplier"</p>
                </div>
            </div>
            <form on:submit=on_submit>
                <div class="card form-grid">
                    <h3 class="form-grid__section">"Order Details"</h3>
                    <SelectField
                        label="Supplier *"
                        options=Signal::derive(move || {
                            supplier_options(&suppliers.get().and_then(Result::ok).map(|p| p.content).unwrap_or_default())
                        })
                        value=header_field(|h| &h.party_id)
                        on_change=header_setter(|h, v| h.party_id = v)
                        error=Signal::derive(move || errors.get().header.party)
                    />
                    <SelectField
                        label="Destination Warehouse *"
                        options=Signal::derive(move || {
                            warehouse_options(&warehouses.get().and_then(Result::ok).map(|p| p.content).unwrap_or_default())
                        })
                        value=header_field(|h| &h.warehouse_id)
                        on_change=header_setter(|h, v| h.warehouse_id = v)
                        error=Signal::derive(move || errors.get().header.warehouse)
                    />
                    <FormField
                        label="Expected Date"
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
                    amount_label="Unit Cost"
                    total_label="Total"
                />
                <div class="form-grid__actions">
                    <a class="btn btn--ghost" href="/purchase-orders">"Cancel"</a>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || saving.get() || lines.with(Vec::is_empty)
                    >
                        {move || if saving.get() { "Submitting..." } else { "Submit Purchase Order" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
