//! Single purchase order: header info, received progress per item, actions.

#[cfg(test)]
#[path = "purchase_order_detail_test.rs"]
mod purchase_order_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::feedback::{ErrorBanner, Loading};
use crate::components::info_row::InfoRow;
use crate::components::status_chip::StatusChip;
use crate::net::endpoints;
use crate::net::types::{PurchaseOrder, PurchaseOrderItem};
use crate::pages::purchase_orders::PurchaseOrderActions;
use crate::state::query::{key, use_query};
use crate::util::format;
use crate::util::status_tone::{self, Tone};

/// Line total from the server, or quantity times unit cost when absent.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn item_total(item: &PurchaseOrderItem) -> f64 {
    item.total_cost.unwrap_or(item.quantity as f64 * item.unit_cost)
}

/// Green once the full ordered quantity has arrived.
#[must_use]
pub fn received_tone(item: &PurchaseOrderItem) -> Tone {
    if item.received_quantity.unwrap_or(0) >= item.quantity { Tone::Success } else { Tone::Neutral }
}

#[component]
pub fn PurchaseOrderDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id")).and_then(|id| id.parse::<i64>().ok()).unwrap_or_default();

    let order = use_query(move || key(["purchase-order".to_owned(), id.to_string()]), move |_| endpoints::get_purchase_order(id));

    view! {
        <div class="page page--narrow">
            {move || match order.get() {
                None => view! { <Loading/> }.into_any(),
                Some(Err(e)) => view! { <ErrorBanner error=e fallback="Order not found"/> }.into_any(),
                Some(Ok(po)) => view! { <PurchaseOrderView po=po/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PurchaseOrderView(po: PurchaseOrder) -> impl IntoView {
    let item_count = po.items.len();
    let items = po
        .items
        .iter()
        .map(|item| {
            let received = item.received_quantity.unwrap_or(0);
            view! {
                <tr>
                    <td>
                        <div class="strong">{item.product_name.clone().unwrap_or_default()}</div>
                        <div class="mono text-small text-muted">{item.product_sku.clone().unwrap_or_default()}</div>
                    </td>
                    <td class="num">{format::number(item.quantity)}</td>
                    <td class="num">
                        <StatusChip label=format::number(received) tone=received_tone(item)/>
                    </td>
                    <td class="num text-small">{format::currency(item.unit_cost)}</td>
                    <td class="num strong">{format::currency(item_total(item))}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <nav class="breadcrumbs">
            <a href="/purchase-orders">"Purchase Orders"</a>
            <span>{po.order_number.clone()}</span>
        </nav>
        <div class="page__header">
            <div class="page__header-group">
                <a class="btn btn--ghost" href="/purchase-orders">"\u{2190} Back"</a>
                <div>
                    <div class="page__title-row">
                        <h1 class="page__title mono">{po.order_number.clone()}</h1>
                        <StatusChip label=po.status.label() tone=status_tone::purchase_order(po.status)/>
                    </div>
                    <p class="page__subtitle">{format!("Created {}", format::date_or_dash(po.created_at.as_deref()))}</p>
                </div>
            </div>
            <div class="page__actions">
                <PurchaseOrderActions id=po.id status=po.status/>
            </div>
        </div>
        <div class="detail-grid">
            <div class="card">
                <h3 class="card__overline">"Order Info"</h3>
                <InfoRow label="Supplier">{po.supplier_name.clone()}</InfoRow>
                <InfoRow label="Warehouse">{po.warehouse_name.clone()}</InfoRow>
                <InfoRow label="Expected Date">{format::date_or_dash(po.expected_date.as_deref())}</InfoRow>
                {po.received_at.clone().map(|at| view! { <InfoRow label="Received At">{format::date_time(&at)}</InfoRow> })}
                {po.notes.clone().map(|notes| view! { <InfoRow label="Notes">{notes}</InfoRow> })}
                <InfoRow label="Total Amount">
                    <span class="info-row__total">{format::currency(po.total_amount)}</span>
                </InfoRow>
            </div>
            <div class="card">
                <h3 class="card__overline">{format!("Order Items ({item_count})")}</h3>
                <table class="table table--dense">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th class="num">"Ordered"</th>
                            <th class="num">"Received"</th>
                            <th class="num">"Unit Cost"</th>
                            <th class="num">"Total"</th>
                        </tr>
                    </thead>
                    <tbody>{items}</tbody>
                </table>
            </div>
        </div>
    }
}
