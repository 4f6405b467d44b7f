//! Operations dashboard: headline KPIs, stock mix, top sellers, and alerts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Aggregates come from the dashboard
//! endpoints; `/dashboard/management` is ADMIN-only, so other roles get the
//! same headline figures assembled from the inventory and order snapshots.
//! STAFF cannot read any dashboard snapshot and sees shortcuts instead.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::chart::{BarChart, ChartDatum, DonutChart};
use crate::components::feedback::{ErrorBanner, Loading};
use crate::components::kpi_card::KpiCard;
use crate::net::endpoints;
use crate::net::types::{InventoryDashboard, ManagementDashboard, OrderDashboard, UserRole};
use crate::state::auth::AuthState;
use crate::state::query::{key, use_query};
use crate::util::auth::{MANAGERS, can_access};
use crate::util::format;
use crate::util::status_tone::Tone;

/// Rows shown in the low-stock alert table.
pub const LOW_STOCK_PREVIEW: usize = 6;
/// Bars shown in the top-sellers chart.
pub const TOP_SELLER_BARS: usize = 6;

/// Figures behind the four KPI cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Headline {
    pub monthly_revenue: f64,
    pub inventory_value: f64,
    pub low_stock: i64,
    pub out_of_stock: i64,
}

/// Prefer the management snapshot; fall back to the inventory and order
/// snapshots field by field.
#[must_use]
pub fn headline(
    management: Option<&ManagementDashboard>,
    inventory: Option<&InventoryDashboard>,
    orders: Option<&OrderDashboard>,
) -> Headline {
    if let Some(m) = management {
        return Headline {
            monthly_revenue: m.monthly_revenue,
            inventory_value: m.inventory_valuation,
            low_stock: m.low_stock_alerts,
            out_of_stock: m.out_of_stock_alerts,
        };
    }
    Headline {
        monthly_revenue: orders.map_or(0.0, |o| o.monthly_revenue),
        inventory_value: inventory.map_or(0.0, |i| i.total_inventory_valuation),
        low_stock: inventory.map_or(0, |i| i.low_stock_count),
        out_of_stock: inventory.map_or(0, |i| i.out_of_stock_count),
    }
}

/// In-stock / low / out split for the donut. In-stock is whatever remains
/// of the product total.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stock_distribution(inventory: &InventoryDashboard) -> Vec<ChartDatum> {
    let in_stock = (inventory.total_products - inventory.low_stock_count - inventory.out_of_stock_count).max(0);
    vec![
        ChartDatum::new("In Stock", in_stock as f64),
        ChartDatum::new("Low Stock", inventory.low_stock_count.max(0) as f64),
        ChartDatum::new("Out of Stock", inventory.out_of_stock_count.max(0) as f64),
    ]
}

/// Revenue per top-selling product, highest first.
#[must_use]
pub fn top_sellers(orders: &OrderDashboard) -> Vec<ChartDatum> {
    let mut rows = orders.top_selling_products.clone();
    rows.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    rows.into_iter()
        .take(TOP_SELLER_BARS)
        .map(|p| ChartDatum::new(format!("#{}", p.product_id), p.total_revenue))
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let role = auth.get_untracked().role();

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Operations Dashboard"</h1>
                    <p class="page__subtitle">"Real-time inventory & order intelligence"</p>
                </div>
            </div>
            {match role {
                Some(r) if can_access(r, MANAGERS) => view! { <ManagerDashboard is_admin=r == UserRole::Admin/> }.into_any(),
                _ => view! { <StaffShortcuts/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ManagerDashboard(is_admin: bool) -> impl IntoView {
    let inventory = use_query(|| key(["dashboard", "inventory"]), |_| endpoints::inventory_dashboard());
    let orders = use_query(|| key(["dashboard", "orders"]), |_| endpoints::order_dashboard());
    let management =
        is_admin.then(|| use_query(|| key(["dashboard", "management"]), |_| endpoints::management_dashboard()));

    let inventory_data = Signal::derive(move || inventory.get().and_then(Result::ok));
    let orders_data = Signal::derive(move || orders.get().and_then(Result::ok));
    let management_data = Signal::derive(move || management.and_then(|m| m.get()).and_then(Result::ok));
    let loading = Signal::derive(move || inventory.get().is_none());

    let figures = Memo::new(move |_| {
        headline(management_data.get().as_ref(), inventory_data.get().as_ref(), orders_data.get().as_ref())
    });

    view! {
        {move || inventory.get().and_then(Result::err).map(|e| view! { <ErrorBanner error=e fallback="Failed to load dashboard"/> })}
        <div class="kpi-grid">
            <KpiCard
                title="MONTHLY REVENUE"
                value=Signal::derive(move || format::currency(figures.get().monthly_revenue))
                caption="Current month"
                tone=Tone::Info
                loading=loading
            />
            <KpiCard
                title="INVENTORY VALUE"
                value=Signal::derive(move || format::currency(figures.get().inventory_value))
                caption="At cost price"
                tone=Tone::Success
                loading=loading
            />
            <KpiCard
                title="LOW STOCK ALERTS"
                value=Signal::derive(move || format::number(figures.get().low_stock))
                caption="Items at reorder level"
                tone=Tone::Warning
                loading=loading
            />
            <KpiCard
                title="OUT OF STOCK"
                value=Signal::derive(move || format::number(figures.get().out_of_stock))
                caption="Immediate action needed"
                tone=Tone::Error
                loading=loading
            />
        </div>
        <div class="panel-grid">
            <section class="panel">
                <h2 class="panel__title">"Stock Status"</h2>
                <DonutChart
                    data=Signal::derive(move || inventory_data.get().map(|i| stock_distribution(&i)).unwrap_or_default())
                    empty_text="No inventory yet"
                />
            </section>
            <section class="panel">
                <h2 class="panel__title">"Top Selling Products"</h2>
                <BarChart
                    data=Signal::derive(move || orders_data.get().map(|o| top_sellers(&o)).unwrap_or_default())
                    empty_text="No sales recorded"
                />
            </section>
        </div>
        <div class="panel-grid">
            <section class="panel">
                <h2 class="panel__title">"Low Stock Alerts"</h2>
                {move || match inventory.get() {
                    None => view! { <Loading/> }.into_any(),
                    Some(Err(_)) => ().into_any(),
                    Some(Ok(snapshot)) if snapshot.low_stock_items.is_empty() => {
                        view! { <p class="empty">"All products have sufficient stock"</p> }.into_any()
                    }
                    Some(Ok(snapshot)) => view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"SKU"</th>
                                    <th>"Product"</th>
                                    <th class="num">"Qty"</th>
                                    <th class="num">"Reorder"</th>
                                    <th>"Warehouse"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {snapshot
                                    .low_stock_items
                                    .into_iter()
                                    .take(LOW_STOCK_PREVIEW)
                                    .map(|item| view! {
                                        <tr>
                                            <td class="mono">{item.sku}</td>
                                            <td>{item.name}</td>
                                            <td class="num text-warning">{format::number(item.quantity)}</td>
                                            <td class="num">{format::number(item.reorder_level)}</td>
                                            <td>{item.warehouse}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                }}
            </section>
            <section class="panel">
                <h2 class="panel__title">"System Summary"</h2>
                <dl class="summary">
                    <SummaryRow
                        label="Total Active Products"
                        value=Signal::derive(move || {
                            management_data
                                .get()
                                .map(|m| m.total_active_products)
                                .or_else(|| inventory_data.get().map(|i| i.total_products))
                                .map_or_else(|| "\u{2014}".to_owned(), format::number)
                        })
                    />
                    <SummaryRow
                        label="Total Sales Orders"
                        value=Signal::derive(move || {
                            management_data
                                .get()
                                .map(|m| m.total_sales_orders)
                                .or_else(|| orders_data.get().map(|o| o.status_distribution.values().sum()))
                                .map_or_else(|| "\u{2014}".to_owned(), format::number)
                        })
                    />
                    <SummaryRow
                        label="Total Purchase Orders"
                        value=Signal::derive(move || {
                            management_data
                                .get()
                                .map_or_else(|| "\u{2014}".to_owned(), |m| format::number(m.total_purchase_orders))
                        })
                    />
                    <SummaryRow
                        label="Yearly Revenue"
                        value=Signal::derive(move || {
                            management_data
                                .get()
                                .map_or_else(|| "\u{2014}".to_owned(), |m| format::currency(m.yearly_revenue))
                        })
                    />
                </dl>
            </section>
        </div>
    }
}

#[component]
fn SummaryRow(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="summary__row">
            <dt>{label}</dt>
            <dd>{move || value.get()}</dd>
        </div>
    }
}

#[component]
fn StaffShortcuts() -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"Quick Links"</h2>
            <div class="shortcuts">
                <a class="btn btn--ghost" href="/products">"Browse Products"</a>
                <a class="btn btn--ghost" href="/inventory">"Stock Levels"</a>
                <a class="btn btn--ghost" href="/sales-orders">"Sales Orders"</a>
                <a class="btn btn--ghost" href="/suppliers">"Suppliers"</a>
            </div>
        </section>
    }
}
