//! Product catalog: server-paged table with name search and manager actions.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::components::dialog::ConfirmDialog;
use crate::components::feedback::{ErrorBanner, Loading};
use crate::components::pager::Pager;
use crate::components::status_chip::StatusChip;
use crate::net::endpoints::{self, ApiCall, PAGE_SIZE};
use crate::net::types::{Page, Product};
use crate::state::auth::AuthState;
use crate::state::mutation::Mutator;
use crate::state::query::{QueryKey, key, use_query};
use crate::state::toast::ToastKind;
use crate::util::auth::{MANAGERS, can_access};
use crate::util::{format, status_tone};

/// Cache key for one page of the catalog under an optional search term.
#[must_use]
pub fn products_key(page: u32, search: &str) -> QueryKey {
    key(["products".to_owned(), page.to_string(), search.trim().to_owned()])
}

/// Blank searches list the catalog; anything else goes to the search endpoint.
#[must_use]
pub fn products_request(page: u32, search: &str) -> ApiCall<Page<Product>> {
    let term = search.trim();
    if term.is_empty() {
        endpoints::list_products(page, PAGE_SIZE)
    } else {
        endpoints::search_products(term, page, PAGE_SIZE)
    }
}

#[must_use]
pub fn catalog_caption(total: u64) -> String {
    format!("{} products in catalog", format::number(i64::try_from(total).unwrap_or(i64::MAX)))
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let mutator = Mutator::from_context();

    let can_edit = Signal::derive(move || auth.get().role().is_some_and(|r| can_access(r, MANAGERS)));
    let page = RwSignal::new(0_u32);
    let search = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Product>);
    let deleting = RwSignal::new(false);

    let products = use_query(
        move || products_key(page.get(), &search.get()),
        |key: &[String]| {
            let page = key.get(1).and_then(|p| p.parse().ok()).unwrap_or(0);
            products_request(page, key.get(2).map_or("", String::as_str))
        },
    );
    let data = Signal::derive(move || products.get().and_then(Result::ok).unwrap_or_default());

    let confirm_delete = Callback::new(move |()| {
        let Some(product) = pending_delete.get_untracked() else {
            return;
        };
        mutator.run(
            endpoints::deactivate_product(product.id),
            &["products"],
            (ToastKind::Success, "Product deactivated".to_owned()),
            "Failed to delete product",
            deleting,
            move |_| pending_delete.set(None),
        );
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Products"</h1>
                    <p class="page__subtitle">{move || catalog_caption(data.get().total_elements)}</p>
                </div>
                <Show when=move || can_edit.get()>
                    <a class="btn btn--primary" href="/products/new">
                        "Add Product"
                    </a>
                </Show>
            </div>
            <div class="toolbar">
                <input
                    class="field__input toolbar__search"
                    type="search"
                    placeholder="Search by name or SKU..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        page.set(0);
                    }
                />
            </div>
            {move || products.get().and_then(Result::err).map(|e| view! { <ErrorBanner error=e fallback="Failed to load products"/> })}
            <div class="table-card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"SKU"</th>
                            <th>"Product Name"</th>
                            <th>"Category"</th>
                            <th class="num">"Unit Price"</th>
                            <th class="num">"Cost Price"</th>
                            <th class="center">"Reorder Lvl"</th>
                            <th>"Status"</th>
                            <Show when=move || can_edit.get()>
                                <th>"Actions"</th>
                            </Show>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                                data.get()
                                    .content
                                    .into_iter()
                                    .map(|product| {
                                        let edit_href = format!("/products/{}/edit", product.id);
                                        let target = product.clone();
                                        view! {
                                            <tr>
                                                <td class="mono text-primary">{product.sku}</td>
                                                <td>{product.name}</td>
                                                <td>
                                                    {product
                                                        .category_name
                                                        .map_or_else(
                                                            || view! { <span class="text-muted">"\u{2014}"</span> }.into_any(),
                                                            |c| view! { <span class="chip chip--outlined">{c}</span> }.into_any(),
                                                        )}
                                                </td>
                                                <td class="num strong">{format::currency(product.unit_price)}</td>
                                                <td class="num text-muted">{format::currency(product.cost_price)}</td>
                                                <td class="center">{format::number(product.reorder_level)}</td>
                                                <td>
                                                    <StatusChip label=product.status.as_str() tone=status_tone::product(product.status)/>
                                                </td>
                                                <Show when=move || can_edit.get()>
                                                    <td class="row-actions">
                                                        <a class="btn btn--ghost btn--small" href=edit_href.clone()>
                                                            "Edit"
                                                        </a>
                                                        <button
                                                            class="btn btn--ghost btn--small text-error"
                                                            on:click={
                                                                let target = target.clone();
                                                                move |_| pending_delete.set(Some(target.clone()))
                                                            }
                                                        >
                                                            "Deactivate"
                                                        </button>
                                                    </td>
                                                </Show>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || products.get().is_none()>
                    <Loading/>
                </Show>
                <Pager
                    page=page
                    total_pages=Signal::derive(move || data.get().total_pages)
                    total_elements=Signal::derive(move || data.get().total_elements)
                    size=PAGE_SIZE
                />
            </div>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Deactivate Product?"
                    message=Signal::derive(move || {
                        pending_delete
                            .get()
                            .map(|p| format!("{} will be set to INACTIVE and hidden from active listings.", p.name))
                            .unwrap_or_default()
                    })
                    confirm_label="Deactivate"
                    busy=deleting
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </div>
    }
}
