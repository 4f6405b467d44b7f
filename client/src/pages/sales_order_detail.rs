//! Single sales order with a lifecycle stepper.
//!
//! DESIGN
//! ======
//! The stepper walks `SALES_LIFECYCLE`; cancelled orders have no position on
//! it and show a banner instead.

#[cfg(test)]
#[path = "sales_order_detail_test.rs"]
mod sales_order_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::feedback::{ErrorBanner, Loading};
use crate::components::info_row::InfoRow;
use crate::components::status_chip::StatusChip;
use crate::net::endpoints;
use crate::net::types::{SalesOrder, SalesOrderItem, SalesOrderStatus};
use crate::pages::sales_orders::SalesOrderActions;
use crate::state::query::{key, use_query};
use crate::util::order_actions::{SALES_LIFECYCLE, lifecycle_step};
use crate::util::{format, status_tone};

/// Rendering state of one stepper node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Pending,
}

impl StepState {
    fn class(self) -> &'static str {
        match self {
            Self::Done => "stepper__step stepper__step--done",
            Self::Current => "stepper__step stepper__step--current",
            Self::Pending => "stepper__step",
        }
    }
}

/// One entry per lifecycle status, or `None` for a cancelled order.
#[must_use]
pub fn stepper(status: SalesOrderStatus) -> Option<Vec<(SalesOrderStatus, StepState)>> {
    let current = lifecycle_step(status)?;
    Some(
        SALES_LIFECYCLE
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let state = match i.cmp(&current) {
                    std::cmp::Ordering::Less => StepState::Done,
                    std::cmp::Ordering::Equal => StepState::Current,
                    std::cmp::Ordering::Greater => StepState::Pending,
                };
                (*step, state)
            })
            .collect(),
    )
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn item_subtotal(item: &SalesOrderItem) -> f64 {
    item.total_price.unwrap_or(item.quantity as f64 * item.unit_price)
}

#[component]
pub fn SalesOrderDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id")).and_then(|id| id.parse::<i64>().ok()).unwrap_or_default();

    let order = use_query(move || key(["sales-order".to_owned(), id.to_string()]), move |_| endpoints::get_sales_order(id));

    view! {
        <div class="page page--narrow">
            {move || match order.get() {
                None => view! { <Loading/> }.into_any(),
                Some(Err(e)) => view! { <ErrorBanner error=e fallback="Order not found"/> }.into_any(),
                Some(Ok(so)) => view! { <SalesOrderView so=so/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SalesOrderView(so: SalesOrder) -> impl IntoView {
    let item_count = so.items.len();
    let steps = stepper(so.status);
    let items = so
        .items
        .iter()
        .map(|item| {
            view! {
                <tr>
                    <td>
                        <div class="strong">{item.product_name.clone().unwrap_or_default()}</div>
                        <div class="mono text-small text-muted">{item.product_sku.clone().unwrap_or_default()}</div>
                    </td>
                    <td class="num strong">{format::number(item.quantity)}</td>
                    <td class="num text-small">{format::currency(item.unit_price)}</td>
                    <td class="num strong">{format::currency(item_subtotal(item))}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <nav class="breadcrumbs">
            <a href="/sales-orders">"Sales Orders"</a>
            <span>{so.order_number.clone()}</span>
        </nav>
        <div class="page__header">
            <div class="page__header-group">
                <a class="btn btn--ghost" href="/sales-orders">"\u{2190} Back"</a>
                <div>
                    <div class="page__title-row">
                        <h1 class="page__title mono">{so.order_number.clone()}</h1>
                        <StatusChip label=so.status.label() tone=status_tone::sales_order(so.status)/>
                    </div>
                    <p class="page__subtitle">{format!("Created {}", format::date_or_dash(so.created_at.as_deref()))}</p>
                </div>
            </div>
            <div class="page__actions">
                <SalesOrderActions id=so.id status=so.status/>
            </div>
        </div>
        {match steps {
            Some(steps) => view! {
                <div class="card">
                    <ol class="stepper">
                        {steps
                            .into_iter()
                            .map(|(status, state)| view! {
                                <li class=state.class()>
                                    <span class="stepper__dot"></span>
                                    <span class="stepper__label">{status.label()}</span>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                </div>
            }
            .into_any(),
            None => view! {
                <div class="banner banner--error">
                    "This order has been cancelled. Any reserved inventory has been released."
                </div>
            }
            .into_any(),
        }}
        <div class="detail-grid detail-grid--wide">
            <div class="card">
                <h3 class="card__overline">"Order Info"</h3>
                <InfoRow label="Customer">{so.customer_name.clone()}</InfoRow>
                <InfoRow label="Warehouse">{so.warehouse_name.clone()}</InfoRow>
                {so.requested_date.clone().map(|d| view! { <InfoRow label="Requested Date">{format::date(&d)}</InfoRow> })}
                {so.shipped_at.clone().map(|at| view! { <InfoRow label="Shipped At">{format::date_time(&at)}</InfoRow> })}
                {so.delivered_at.clone().map(|at| view! { <InfoRow label="Delivered At">{format::date_time(&at)}</InfoRow> })}
                {so.notes.clone().map(|notes| view! { <InfoRow label="Notes">{notes}</InfoRow> })}
                <InfoRow label="Total Amount">
                    <span class="info-row__total">{format::currency(so.total_amount)}</span>
                </InfoRow>
            </div>
            <div class="card">
                <h3 class="card__overline">{format!("Order Items ({item_count})")}</h3>
                <table class="table table--dense">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th class="num">"Qty"</th>
                            <th class="num">"Unit Price"</th>
                            <th class="num">"Subtotal"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {items}
                        <tr class="table__total">
                            <td colspan="3" class="num strong">"Total"</td>
                            <td class="num info-row__total">{format::currency(so.total_amount)}</td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
