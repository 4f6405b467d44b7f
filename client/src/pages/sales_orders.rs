//! Sales order list covering the whole fulfilment lifecycle.

#[cfg(test)]
#[path = "sales_orders_test.rs"]
mod sales_orders_test;

use leptos::prelude::*;

use crate::components::feedback::{ErrorBanner, Loading};
use crate::components::pager::Pager;
use crate::components::status_chip::StatusChip;
use crate::net::endpoints::{self, PAGE_SIZE, SalesOrderAction};
use crate::net::types::SalesOrderStatus;
use crate::state::mutation::Mutator;
use crate::state::query::{key, use_query};
use crate::util::order_actions::{action_button_class, sales_action_copy, sales_order_actions};
use crate::util::{format, status_tone};

/// Confirm reserves stock, ship deducts it, cancel releases a reservation.
pub const SALES_ACTION_ROOTS: &[&str] = &["sales-orders", "sales-order", "inventory", "movements", "dashboard"];

#[must_use]
pub fn sales_caption(total: u64) -> String {
    format!("{total} orders \u{b7} manage entire fulfilment lifecycle")
}

#[component]
pub fn SalesOrderActions(id: i64, status: SalesOrderStatus, #[prop(optional)] compact: bool) -> impl IntoView {
    let mutator = Mutator::from_context();
    let busy = RwSignal::new(false);

    sales_order_actions(status)
        .into_iter()
        .map(|action: SalesOrderAction| {
            let copy = sales_action_copy(action);
            view! {
                <button
                    class=action_button_class(copy.destructive, compact)
                    disabled=move || busy.get()
                    on:click=move |_| {
                        mutator.run(
                            endpoints::sales_order_action(id, action),
                            SALES_ACTION_ROOTS,
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
pub fn SalesOrdersPage() -> impl IntoView {
    let page = RwSignal::new(0_u32);

    let orders = use_query(
        move || key(["sales-orders".to_owned(), page.get().to_string()]),
        |key: &[String]| endpoints::list_sales_orders(key.get(1).and_then(|p| p.parse().ok()).unwrap_or(0), PAGE_SIZE),
    );
    let data = Signal::derive(move || orders.get().and_then(Result::ok).unwrap_or_default());

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Sales Orders"</h1>
                    <p class="page__subtitle">{move || sales_caption(data.get().total_elements)}</p>
                </div>
                <a class="btn btn--primary" href="/sales-orders/new">
                    "New Order"
                </a>
            </div>
            {move || orders.get().and_then(Result::err).map(|e| view! { <ErrorBanner error=e fallback="Failed to load sales orders"/> })}
            <div class="table-card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"SO Number"</th>
                            <th>"Customer"</th>
                            <th>"Warehouse"</th>
                            <th>"Status"</th>
                            <th class="num">"Total"</th>
                            <th>"Requested"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            data.get()
                                .content
                                .into_iter()
                                .map(|so| view! {
                                    <tr>
                                        <td class="mono text-primary strong">{so.order_number}</td>
                                        <td>{so.customer_name}</td>
                                        <td>{so.warehouse_name}</td>
                                        <td>
                                            <StatusChip label=so.status.label() tone=status_tone::sales_order(so.status)/>
                                        </td>
                                        <td class="num strong">{format::currency(so.total_amount)}</td>
                                        <td class="text-small">{format::date_or_dash(so.requested_date.as_deref())}</td>
                                        <td class="text-small text-muted">{format::date_or_dash(so.created_at.as_deref())}</td>
                                        <td class="row-actions">
                                            <a class="btn btn--ghost btn--small" href=format!("/sales-orders/{}", so.id)>
                                                "View Details"
                                            </a>
                                            <SalesOrderActions id=so.id status=so.status compact=true/>
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
                    <p class="empty">"No sales orders yet"</p>
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
