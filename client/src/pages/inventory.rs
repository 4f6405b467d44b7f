//! Stock levels: tabbed inventory tables, alert banners, and manual
//! adjustment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The "All" tab pages on the server; the low/out tabs are full lists from
//! dedicated endpoints. All three share the `inventory` cache root, so a
//! successful adjustment refreshes every tab at once.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use leptos::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::feedback::{ErrorBanner, Loading};
use crate::components::form_field::{FormField, SelectField, TextAreaField};
use crate::components::pager::Pager;
use crate::components::status_chip::StatusChip;
use crate::net::endpoints::{self, PAGE_SIZE, PICKLIST_SIZE};
use crate::net::types::{InventoryAdjustRequest, InventoryRecord, Page, Product, Warehouse};
use crate::state::auth::AuthState;
use crate::state::mutation::Mutator;
use crate::state::query::{key, use_query};
use crate::state::toast::ToastKind;
use crate::util::auth::{MANAGERS, can_access};
use crate::util::{format, status_tone};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StockTab {
    #[default]
    All,
    Low,
    Out,
}

impl StockTab {
    pub const ALL: [Self; 3] = [Self::All, Self::Low, Self::Out];

    #[must_use]
    pub fn label(self, count: u64) -> String {
        let name = match self {
            Self::All => "All Stock",
            Self::Low => "Low Stock",
            Self::Out => "Out of Stock",
        };
        format!("{name} ({count})")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdjustKind {
    #[default]
    Add,
    Remove,
}

impl AdjustKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }

    fn parse(raw: &str) -> Self {
        if raw == "remove" { Self::Remove } else { Self::Add }
    }
}

/// Signed quantity sent to the server. The typed sign is ignored; only the
/// chosen action decides the direction.
#[must_use]
pub fn adjust_delta(kind: AdjustKind, quantity: i64) -> i64 {
    match kind {
        AdjustKind::Add => quantity.saturating_abs(),
        AdjustKind::Remove => -quantity.saturating_abs(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdjustDraft {
    pub product_id: String,
    pub warehouse_id: String,
    pub kind: AdjustKind,
    pub quantity: String,
    pub notes: String,
}

impl Default for AdjustDraft {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            warehouse_id: String::new(),
            kind: AdjustKind::Add,
            quantity: "1".to_owned(),
            notes: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjustErrors {
    pub product: Option<&'static str>,
    pub warehouse: Option<&'static str>,
    pub quantity: Option<&'static str>,
}

fn positive_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// # Errors
///
/// Returns per-field messages when a selection is missing or the quantity is
/// not a whole number of at least one.
pub fn validate_adjustment(draft: &AdjustDraft) -> Result<InventoryAdjustRequest, AdjustErrors> {
    let product_id = positive_id(&draft.product_id);
    let warehouse_id = positive_id(&draft.warehouse_id);
    let quantity = draft.quantity.trim().parse::<i64>().ok().filter(|q| q.saturating_abs() >= 1);
    match (product_id, warehouse_id, quantity) {
        (Some(product_id), Some(warehouse_id), Some(quantity)) => {
            let notes = draft.notes.trim();
            Ok(InventoryAdjustRequest {
                product_id,
                warehouse_id,
                quantity: adjust_delta(draft.kind, quantity),
                notes: (!notes.is_empty()).then(|| notes.to_owned()),
            })
        }
        _ => Err(AdjustErrors {
            product: product_id.is_none().then_some("Select a product"),
            warehouse: warehouse_id.is_none().then_some("Select a warehouse"),
            quantity: quantity.is_none().then_some("Quantity must be at least 1"),
        }),
    }
}

#[must_use]
pub fn product_options(products: &[Product]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select product".to_owned()))
        .chain(products.iter().map(|p| (p.id.to_string(), format!("{} ({})", p.name, p.sku))))
        .collect()
}

#[must_use]
pub fn warehouse_options(warehouses: &[Warehouse]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select warehouse".to_owned()))
        .chain(warehouses.iter().map(|w| (w.id.to_string(), w.name.clone())))
        .collect()
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let can_adjust = Signal::derive(move || auth.get().role().is_some_and(|r| can_access(r, MANAGERS)));

    let page = RwSignal::new(0_u32);
    let tab = RwSignal::new(StockTab::All);
    let adjust_open = RwSignal::new(false);

    let all = use_query(
        move || key(["inventory".to_owned(), "all".to_owned(), page.get().to_string()]),
        |key: &[String]| endpoints::list_inventory(key.get(2).and_then(|p| p.parse().ok()).unwrap_or(0), PAGE_SIZE),
    );
    let low = use_query(|| key(["inventory", "low"]), |_| endpoints::low_stock());
    let out = use_query(|| key(["inventory", "out"]), |_| endpoints::out_of_stock());

    let all_page = Signal::derive(move || all.get().and_then(Result::ok).unwrap_or_default());
    let low_rows = Signal::derive(move || low.get().and_then(Result::ok).unwrap_or_default());
    let out_rows = Signal::derive(move || out.get().and_then(Result::ok).unwrap_or_default());

    let count = move |t: StockTab| match t {
        StockTab::All => all_page.get().total_elements,
        StockTab::Low => low_rows.get().len() as u64,
        StockTab::Out => out_rows.get().len() as u64,
    };
    let rows = Signal::derive(move || match tab.get() {
        StockTab::All => all_page.get().content,
        StockTab::Low => low_rows.get(),
        StockTab::Out => out_rows.get(),
    });
    let loading = Signal::derive(move || match tab.get() {
        StockTab::All => all.get().is_none(),
        StockTab::Low => low.get().is_none(),
        StockTab::Out => out.get().is_none(),
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Inventory"</h1>
                    <p class="page__subtitle">"Stock levels across all warehouses"</p>
                </div>
                <Show when=move || can_adjust.get()>
                    <button class="btn btn--primary" on:click=move |_| adjust_open.set(true)>
                        "Adjust Stock"
                    </button>
                </Show>
            </div>
            <Show when=move || !out_rows.get().is_empty()>
                <div class="banner banner--error">
                    <strong>{move || format!("{} products", out_rows.get().len())}</strong>
                    " are out of stock and need immediate restocking."
                </div>
            </Show>
            <Show when=move || !low_rows.get().is_empty()>
                <div class="banner banner--warning">
                    <strong>{move || format!("{} products", low_rows.get().len())}</strong>
                    " are at or below reorder level."
                </div>
            </Show>
            {move || all.get().and_then(Result::err).map(|e| view! { <ErrorBanner error=e fallback="Failed to load inventory"/> })}
            <div class="tabs">
                {StockTab::ALL
                    .into_iter()
                    .map(|t| {
                        let class = move || if tab.get() == t { "tabs__tab tabs__tab--active" } else { "tabs__tab" };
                        view! {
                            <button class=class on:click=move |_| tab.set(t)>
                                {move || t.label(count(t))}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="table-card">
                <InventoryTable rows=rows/>
                <Show when=move || loading.get()>
                    <Loading/>
                </Show>
                <Show when=move || tab.get() == StockTab::All>
                    <Pager
                        page=page
                        total_pages=Signal::derive(move || all_page.get().total_pages)
                        total_elements=Signal::derive(move || all_page.get().total_elements)
                        size=PAGE_SIZE
                    />
                </Show>
            </div>
            <Show when=move || adjust_open.get()>
                <AdjustDialog on_close=Callback::new(move |()| adjust_open.set(false))/>
            </Show>
        </div>
    }
}

#[component]
fn InventoryTable(#[prop(into)] rows: Signal<Vec<InventoryRecord>>) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"SKU"</th>
                    <th>"Product"</th>
                    <th>"Warehouse"</th>
                    <th class="num">"On Hand"</th>
                    <th class="num">"Reserved"</th>
                    <th class="num">"Available"</th>
                    <th class="num">"Value"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|r| view! {
                            <tr>
                                <td class="mono text-primary">{r.product_sku}</td>
                                <td>{r.product_name}</td>
                                <td>{r.warehouse_name}</td>
                                <td class="num strong">{format::number(r.quantity)}</td>
                                <td class="num text-warning">{format::number(r.reserved_quantity)}</td>
                                <td class="num text-success">{format::number(r.available_quantity)}</td>
                                <td class="num">{format::currency(r.stock_value)}</td>
                                <td>
                                    <StatusChip label=r.stock_status.label() tone=status_tone::stock(r.stock_status)/>
                                </td>
                            </tr>
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn AdjustDialog(on_close: Callback<()>) -> impl IntoView {
    let mutator = Mutator::from_context();
    let draft = RwSignal::new(AdjustDraft::default());
    let errors = RwSignal::new(AdjustErrors::default());
    let busy = RwSignal::new(false);

    let products = use_query(|| key(["products", "picklist"]), |_| endpoints::list_products(0, PICKLIST_SIZE));
    let warehouses = use_query(|| key(["warehouses"]), |_| endpoints::list_warehouses());
    let product_choices = Signal::derive(move || {
        product_options(&products.get().and_then(Result::ok).map(|p: Page<Product>| p.content).unwrap_or_default())
    });
    let warehouse_choices = Signal::derive(move || {
        warehouse_options(&warehouses.get().and_then(Result::ok).map(|w| w.content).unwrap_or_default())
    });

    let submit = move |_: leptos::ev::MouseEvent| {
        let request = match validate_adjustment(&draft.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(AdjustErrors::default());
        mutator.run(
            endpoints::adjust_inventory(&request),
            &["inventory", "movements", "dashboard"],
            (ToastKind::Success, "Inventory adjusted successfully".to_owned()),
            "Adjustment failed",
            busy,
            move |_| on_close.run(()),
        );
    };

    view! {
        <Dialog title="Adjust Inventory" on_close=on_close>
            <div class="form-stack">
                <SelectField
                    label="Product *"
                    options=product_choices
                    value=Signal::derive(move || draft.with(|d| d.product_id.clone()))
                    on_change=Callback::new(move |v: String| draft.update(|d| d.product_id = v))
                    error=Signal::derive(move || errors.get().product)
                />
                <SelectField
                    label="Warehouse *"
                    options=warehouse_choices
                    value=Signal::derive(move || draft.with(|d| d.warehouse_id.clone()))
                    on_change=Callback::new(move |v: String| draft.update(|d| d.warehouse_id = v))
                    error=Signal::derive(move || errors.get().warehouse)
                />
                <SelectField
                    label="Adjustment Type"
                    options=vec![
                        ("add".to_owned(), "Add Stock (Positive)".to_owned()),
                        ("remove".to_owned(), "Remove Stock (Negative)".to_owned()),
                    ]
                    value=Signal::derive(move || draft.with(|d| d.kind.as_str().to_owned()))
                    on_change=Callback::new(move |v: String| draft.update(|d| d.kind = AdjustKind::parse(&v)))
                />
                <FormField
                    label="Quantity *"
                    input_type="number"
                    min="1"
                    value=Signal::derive(move || draft.with(|d| d.quantity.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.quantity = v))
                    error=Signal::derive(move || errors.get().quantity)
                />
                <TextAreaField
                    label="Reason / Notes"
                    value=Signal::derive(move || draft.with(|d| d.notes.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.notes = v))
                />
            </div>
            <div class="dialog__actions">
                <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" disabled=move || busy.get() on:click=submit>
                    "Apply Adjustment"
                </button>
            </div>
        </Dialog>
    }
}
