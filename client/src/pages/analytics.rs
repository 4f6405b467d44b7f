//! Analytics: order mix, best sellers, fast movers, and supplier performance.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every chart is drawn from a dashboard snapshot. The management KPIs need
//! ADMIN; managers see the rest.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;

use crate::components::chart::{BarChart, ChartDatum, DonutChart};
use crate::components::feedback::ErrorBanner;
use crate::components::kpi_card::KpiCard;
use crate::net::endpoints;
use crate::net::types::{
    InventoryDashboard, ManagementDashboard, OrderDashboard, SalesOrderStatus, SupplierDashboard, UserRole,
};
use crate::pages::dashboard::top_sellers;
use crate::state::auth::AuthState;
use crate::state::query::{key, use_query};
use crate::util::format;
use crate::util::status_tone::Tone;

pub const FAST_MOVER_BARS: usize = 8;
pub const TOP_SPENDERS: usize = 5;

/// Order count per status, in lifecycle order, with readable labels.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn status_distribution(orders: &OrderDashboard) -> Vec<ChartDatum> {
    let mut rows: Vec<(usize, String, i64)> = orders
        .status_distribution
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(raw, count)| match SalesOrderStatus::parse(raw) {
            Some(status) => {
                let rank = SalesOrderStatus::ALL.iter().position(|s| *s == status).unwrap_or(usize::MAX);
                (rank, status.label(), *count)
            }
            None => (usize::MAX, raw.replace('_', " "), *count),
        })
        .collect();
    rows.sort_by_key(|(rank, _, _)| *rank);
    rows.into_iter().map(|(_, label, count)| ChartDatum::new(label, count as f64)).collect()
}

/// Units sold per product, highest first.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fast_movers(inventory: &InventoryDashboard) -> Vec<ChartDatum> {
    let mut rows = inventory.fast_moving_products.clone();
    rows.sort_by(|a, b| b.total_sold_qty.cmp(&a.total_sold_qty));
    rows.into_iter()
        .take(FAST_MOVER_BARS)
        .map(|p| ChartDatum::new(format!("#{}", p.product_id), p.total_sold_qty as f64))
        .collect()
}

/// Average delivery days per supplier; suppliers without received orders
/// have no average and are left out.
#[must_use]
pub fn delivery_days(suppliers: &SupplierDashboard) -> Vec<ChartDatum> {
    suppliers
        .supplier_performance
        .iter()
        .filter_map(|s| s.avg_delivery_days.map(|days| ChartDatum::new(s.supplier_name.clone(), days)))
        .collect()
}

/// Titles of the management KPI strip, in display order.
pub const MANAGEMENT_KPI_TITLES: [&str; 6] =
    ["MONTHLY REVENUE", "YEARLY REVENUE", "INVENTORY VALUE", "ACTIVE PRODUCTS", "SALES ORDERS", "PURCHASE ORDERS"];

/// Formatted values matching [`MANAGEMENT_KPI_TITLES`].
#[must_use]
pub fn management_kpis(m: &ManagementDashboard) -> [String; 6] {
    [
        format::currency(m.monthly_revenue),
        format::currency(m.yearly_revenue),
        format::currency(m.inventory_valuation),
        format::number(m.total_active_products),
        format::number(m.total_sales_orders),
        format::number(m.total_purchase_orders),
    ]
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let is_admin = auth.get_untracked().role() == Some(UserRole::Admin);

    let inventory = use_query(|| key(["dashboard", "inventory"]), |_| endpoints::inventory_dashboard());
    let orders = use_query(|| key(["dashboard", "orders"]), |_| endpoints::order_dashboard());
    let suppliers = use_query(|| key(["dashboard", "supplier"]), |_| endpoints::supplier_dashboard());

    let order_data = Signal::derive(move || orders.get().and_then(Result::ok));
    let inventory_data = Signal::derive(move || inventory.get().and_then(Result::ok));
    let supplier_data = Signal::derive(move || suppliers.get().and_then(Result::ok));

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Analytics"</h1>
                    <p class="page__subtitle">"Business intelligence & performance insights"</p>
                </div>
            </div>
            {is_admin.then(|| view! { <ManagementStrip/> })}
            {move || orders.get().and_then(Result::err).map(|e| view! { <ErrorBanner error=e fallback="Failed to load order analytics"/> })}
            <div class="chart-grid">
                <ChartCard title="Order Status Distribution" subtitle="Current status breakdown">
                    <DonutChart
                        data=Signal::derive(move || order_data.get().map(|o| status_distribution(&o)).unwrap_or_default())
                        empty_text="No orders yet"
                    />
                </ChartCard>
                <ChartCard title="Top Selling Products" subtitle="Revenue by product">
                    <BarChart
                        data=Signal::derive(move || order_data.get().map(|o| top_sellers(&o)).unwrap_or_default())
                        empty_text="No sales recorded"
                    />
                </ChartCard>
                <ChartCard title="Fast-Moving Products" subtitle="Units sold">
                    <BarChart
                        data=Signal::derive(move || inventory_data.get().map(|i| fast_movers(&i)).unwrap_or_default())
                        empty_text="No stock movement yet"
                    />
                </ChartCard>
                <ChartCard title="Supplier Performance" subtitle="Average delivery days">
                    <BarChart
                        data=Signal::derive(move || supplier_data.get().map(|s| delivery_days(&s)).unwrap_or_default())
                        empty_text="No received purchase orders"
                    />
                </ChartCard>
            </div>
            <div class="card">
                <h3 class="card__overline">"Top Suppliers by Spend"</h3>
                <table class="table table--dense">
                    <thead>
                        <tr>
                            <th>"Supplier"</th>
                            <th class="num">"Orders"</th>
                            <th class="num">"Total Spend"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            supplier_data
                                .get()
                                .map(|s| s.top_suppliers_by_spend)
                                .unwrap_or_default()
                                .into_iter()
                                .take(TOP_SPENDERS)
                                .map(|s| view! {
                                    <tr>
                                        <td>{s.supplier_name}</td>
                                        <td class="num">{format::number(s.order_count)}</td>
                                        <td class="num strong">{format::currency(s.total_spend)}</td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn ChartCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card chart-card">
            <h3 class="chart-card__title">{title}</h3>
            <p class="chart-card__subtitle">{subtitle}</p>
            {children()}
        </div>
    }
}

#[component]
fn ManagementStrip() -> impl IntoView {
    let management = use_query(|| key(["dashboard", "management"]), |_| endpoints::management_dashboard());
    let loading = Signal::derive(move || management.get().is_none());
    let kpis = Memo::new(move |_| management.get().and_then(Result::ok).map(|m| management_kpis(&m)));

    view! {
        {move || management.get().and_then(Result::err).map(|e| view! { <ErrorBanner error=e fallback="Failed to load management KPIs"/> })}
        <div class="kpi-grid kpi-grid--six">
            {MANAGEMENT_KPI_TITLES
                .iter()
                .enumerate()
                .map(|(i, &title)| {
                    view! {
                        <KpiCard
                            title=title
                            value=Signal::derive(move || kpis.with(|k| k.as_ref().map(|k| k[i].clone()).unwrap_or_default()))
                            tone=Tone::Info
                            loading=loading
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
