//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::layout::AppLayout;
use crate::components::role_gate::RoleGate;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    analytics::AnalyticsPage, dashboard::DashboardPage, inventory::InventoryPage,
    inventory_movements::InventoryMovementsPage, login::LoginPage, product_form::ProductFormPage,
    products::ProductsPage, purchase_order_detail::PurchaseOrderDetailPage,
    purchase_order_form::PurchaseOrderFormPage, purchase_orders::PurchaseOrdersPage,
    sales_order_detail::SalesOrderDetailPage, sales_order_form::SalesOrderFormPage, sales_orders::SalesOrdersPage,
    suppliers::SuppliersPage, users::UsersPage,
};
use crate::state::{auth::AuthState, query::QueryCache, toast::ToastState, ui::UiState};
use crate::util::auth::{ADMINS, MANAGERS};
use crate::util::dark_mode;
use crate::util::nav::BRAND;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(RwSignal::new(QueryCache::default()));
    provide_context(RwSignal::new(ToastState::default()));

    // Storage is browser-only, so both slices are restored after hydration.
    Effect::new(move || {
        auth.set(AuthState::restore());
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/erp-ui.css"/>
        <Title text=BRAND/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=path!("/login") view=LoginPage/>
                <ParentRoute path=path!("") view=AppLayout>
                    <Route path=path!("") view=DashboardPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route
                        path=path!("/products/new")
                        view=|| view! { <RoleGate roles=MANAGERS><ProductFormPage/></RoleGate> }
                    />
                    <Route
                        path=path!("/products/:id/edit")
                        view=|| view! { <RoleGate roles=MANAGERS><ProductFormPage/></RoleGate> }
                    />
                    <Route path=path!("/inventory") view=InventoryPage/>
                    <Route path=path!("/inventory/movements") view=InventoryMovementsPage/>
                    <Route
                        path=path!("/purchase-orders")
                        view=|| view! { <RoleGate roles=MANAGERS><PurchaseOrdersPage/></RoleGate> }
                    />
                    <Route
                        path=path!("/purchase-orders/new")
                        view=|| view! { <RoleGate roles=MANAGERS><PurchaseOrderFormPage/></RoleGate> }
                    />
                    <Route
                        path=path!("/purchase-orders/:id")
                        view=|| view! { <RoleGate roles=MANAGERS><PurchaseOrderDetailPage/></RoleGate> }
                    />
                    <Route path=path!("/sales-orders") view=SalesOrdersPage/>
                    <Route path=path!("/sales-orders/new") view=SalesOrderFormPage/>
                    <Route path=path!("/sales-orders/:id") view=SalesOrderDetailPage/>
                    <Route path=path!("/suppliers") view=SuppliersPage/>
                    <Route
                        path=path!("/analytics")
                        view=|| view! { <RoleGate roles=MANAGERS><AnalyticsPage/></RoleGate> }
                    />
                    <Route
                        path=path!("/users")
                        view=|| view! { <RoleGate roles=ADMINS><UsersPage/></RoleGate> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
