//! Stock movement audit trail.
//!
//! The type filter applies to the rows of the current server page only; the
//! pager still walks the unfiltered history.

#[cfg(test)]
#[path = "inventory_movements_test.rs"]
mod inventory_movements_test;

use leptos::prelude::*;

use crate::components::feedback::{ErrorBanner, Loading};
use crate::components::form_field::SelectField;
use crate::components::pager::Pager;
use crate::components::status_chip::StatusChip;
use crate::net::endpoints::{self, MOVEMENT_PAGE_SIZE};
use crate::net::types::{InventoryMovement, MovementType};
use crate::state::query::{key, use_query};
use crate::util::{format, status_tone};

#[must_use]
pub fn filter_movements(rows: Vec<InventoryMovement>, kind: Option<MovementType>) -> Vec<InventoryMovement> {
    match kind {
        Some(kind) => rows.into_iter().filter(|m| m.movement_type == kind).collect(),
        None => rows,
    }
}

#[must_use]
pub fn movements_caption(total: u64) -> String {
    format!("Complete audit trail of all stock changes: {total} records")
}

/// Tone for the quantity change column.
#[must_use]
pub fn change_class(quantity: i64) -> &'static str {
    if quantity > 0 { "num strong text-success" } else { "num strong text-error" }
}

fn type_options() -> Vec<(String, String)> {
    std::iter::once(("ALL".to_owned(), "All Types".to_owned()))
        .chain(MovementType::ALL.iter().map(|t| (t.to_string(), t.to_string())))
        .collect()
}

#[component]
pub fn InventoryMovementsPage() -> impl IntoView {
    let page = RwSignal::new(0_u32);
    let type_filter = RwSignal::new(None::<MovementType>);

    let movements = use_query(
        move || key(["movements".to_owned(), page.get().to_string()]),
        |key: &[String]| {
            endpoints::list_movements(None, key.get(1).and_then(|p| p.parse().ok()).unwrap_or(0), MOVEMENT_PAGE_SIZE)
        },
    );
    let data = Signal::derive(move || movements.get().and_then(Result::ok).unwrap_or_default());
    let rows = Signal::derive(move || filter_movements(data.get().content, type_filter.get()));

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Inventory Movements"</h1>
                    <p class="page__subtitle">{move || movements_caption(data.get().total_elements)}</p>
                </div>
            </div>
            <div class="toolbar">
                <SelectField
                    label="Movement Type"
                    options=type_options()
                    value=Signal::derive(move || type_filter.get().map_or_else(|| "ALL".to_owned(), |t| t.to_string()))
                    on_change=Callback::new(move |v: String| type_filter.set(MovementType::parse(&v)))
                />
            </div>
            {move || movements.get().and_then(Result::err).map(|e| view! { <ErrorBanner error=e fallback="Failed to load movements"/> })}
            <div class="table-card">
                <table class="table table--dense">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"SKU"</th>
                            <th>"Product"</th>
                            <th>"Warehouse"</th>
                            <th>"Type"</th>
                            <th class="num">"Qty Change"</th>
                            <th class="num">"Before"</th>
                            <th class="num">"After"</th>
                            <th>"Reference"</th>
                            <th>"Notes"</th>
                            <th>"Date"</th>
                            <th>"By"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|m| view! {
                                    <tr>
                                        <td class="mono text-muted">{format!("#{}", m.id)}</td>
                                        <td class="mono text-primary">{m.product_sku}</td>
                                        <td>{m.product_name}</td>
                                        <td>{m.warehouse_name}</td>
                                        <td>
                                            <StatusChip label=m.movement_type.as_str() tone=status_tone::movement(m.movement_type)/>
                                        </td>
                                        <td class=change_class(m.quantity)>{format::signed_number(m.quantity)}</td>
                                        <td class="num text-muted">{format::number(m.quantity_before)}</td>
                                        <td class="num strong">{format::number(m.quantity_after)}</td>
                                        <td>
                                            {m.reference_type.map_or_else(
                                                || view! { <span class="text-muted">"\u{2014}"</span> }.into_any(),
                                                |r| view! { <span class="chip chip--outlined">{r.label()}</span> }.into_any(),
                                            )}
                                        </td>
                                        <td class="text-muted truncate">{m.notes.unwrap_or_else(|| "\u{2014}".to_owned())}</td>
                                        <td class="mono">{format::date_time_or_dash(m.created_at.as_deref())}</td>
                                        <td class="text-muted">{m.created_by.unwrap_or_default()}</td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || movements.get().is_none()>
                    <Loading/>
                </Show>
                <Show when=move || movements.get().is_some() && rows.get().is_empty()>
                    <p class="empty">"No movements match this filter"</p>
                </Show>
                <Pager
                    page=page
                    total_pages=Signal::derive(move || data.get().total_pages)
                    total_elements=Signal::derive(move || data.get().total_elements)
                    size=MOVEMENT_PAGE_SIZE
                />
            </div>
        </div>
    }
}
