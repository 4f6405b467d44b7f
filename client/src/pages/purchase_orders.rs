//! Purchase order list with per-row lifecycle actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Approve, receive, and cancel all change stock or order state on the server,
//! so every action refreshes the order list, the open detail view, inventory,
//! the movement history, and the dashboards.

#[cfg(test)]
#[path = "purchase_orders_test.rs"]
mod purchase_orders_test;

use leptos::prelude::*;

use crate::components::feedback::{ErrorBanner, Loading};
use crate::components::pager::Pager;
use crate::components::status_chip::StatusChip;
use crate::net::endpoints::{self, PAGE_SIZE, PurchaseOrderAction};
use crate::net::types::PurchaseOrderStatus;
use crate::state::mutation::Mutator;
use crate::state::query::{key, use_query};
use crate::util::order_actions::{action_button_class, purchase_action_copy, purchase_order_actions};
use crate::util::{format, status_tone};

/// Query roots touched by any purchase order transition.
pub const PURCHASE_ACTION_ROOTS: &[&str] = &["purchase-orders", "purchase-order", "inventory", "movements", "dashboard"];

#[must_use]
pub fn orders_caption(total: u64) -> String {
    format!("{total} orders total")
}

/// Buttons for every transition `status` allows. One busy flag covers the
/// whole group so a second click cannot race the first.
#[component]
pub fn PurchaseOrderActions(id: i64, status: PurchaseOrderStatus, #[prop(optional)] compact: bool) -> impl IntoView {
    let mutator = Mutator::from_context();
    let busy = RwSignal::new(false);

    purchase_order_actions(status)
        .into_iter()
        .map(|action: PurchaseOrderAction| {
            let copy = purchase_action_copy(action);
            view! {
                <button
                    class=action_button_class(copy.destructive, compact)
                    disabled=move || busy.get()
                    on:click=move |_| {
                        mutator.run(
                            endpoints::purchase_order_action(id, action),
                            PURCHASE_ACTION_ROOTS,
                            (copy.kind, copy.success.to_owned()),
                            "Action failed",
                            busy,
                            |_| {},
                        );
                    }
                >
                    {copy.label}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn PurchaseOrdersPage() -> impl IntoView {
    let page = RwSignal::new(0_u32);

    let orders = use_query(
        move || key(["purchase-orders".to_owned(), page.get().to_string()]),
        |key: &[String]| {
            endpoints::list_purchase_orders(key.get(1).and_then(|p| p.parse().ok()).unwrap_or(0), PAGE_SIZE)
        },
    );
    let data = Signal::derive(move || orders.get().and_then(Result::ok).unwrap_or_default());

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Purchase Orders"</h1>
                    <p class="page__subtitle">{move || orders_caption(data.get().total_elements)}</p>
                </div>
                <a class="btn btn--primary" href="/purchase-orders/new">
                    "Create PO"
                </a>
            </div>
            {move || orders.get().and_then(Result::err).map(|e| view! { <ErrorBanner error=e fallback="Failed to load purchase orders"/> })}
            <div class="table-card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"PO Number"</th>
                            <th>"Supplier"</th>
                            <th>"Warehouse"</th>
                            <th>"Status"</th>
                            <th class="num">"Total"</th>
                            <th>"Expected"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            data.get()
                                .content
                                .into_iter()
                                .map(|po| view! {
                                    <tr>
                                        <td class="mono text-primary strong">{po.order_number}</td>
                                        <td>{po.supplier_name}</td>
                                        <td>{po.warehouse_name}</td>
                                        <td>
                                            <StatusChip label=po.status.label() tone=status_tone::purchase_order(po.status)/>
                                        </td>
                                        <td class="num strong">{format::currency(po.total_amount)}</td>
                                        <td class="text-small">{format::date_or_dash(po.expected_date.as_deref())}</td>
                                        <td class="text-small text-muted">{format::date_or_dash(po.created_at.as_deref())}</td>
                                        <td class="row-actions">
                                            <a class="btn btn--ghost btn--small" href=format!("/purchase-orders/{}", po.id)>
                                                "View Details"
                                            </a>
                                            <PurchaseOrderActions id=po.id status=po.status compact=true/>
                                        </td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || orders.get().is_none()>
                    <Loading/>
                </Show>
                <Show when=move || orders.get().is_some() && data.get().content.is_empty()>
                    <p class="empty">"No purchase orders yet"</p>
                </Show>
                <Pager
                    page=page
                    total_pages=Signal::derive(move || data.get().total_pages)
                    total_elements=Signal::derive(move || data.get().total_elements)
                    size=PAGE_SIZE
                />
            </div>
        </div>
    }
}
