//! Editable line-item table shared by the purchase and sales order forms.
//!
//! DESIGN
//! ======
//! Rows carry a stable `key` so the keyed `For` keeps each row's inputs
//! mounted while its fields change; re-rendering the whole table on every
//! keystroke would drop input focus. Amount means unit cost on purchase
//! orders and unit price on sales orders.

#[cfg(test)]
#[path = "order_lines_test.rs"]
mod order_lines_test;

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::format;

#[derive(Clone, Debug, PartialEq)]
pub struct LineDraft {
    pub key: u64,
    pub product_id: String,
    pub quantity: String,
    pub amount: String,
}

impl LineDraft {
    #[must_use]
    pub fn new(key: u64) -> Self {
        Self { key, product_id: String::new(), quantity: "1".to_owned(), amount: "0".to_owned() }
    }

    fn quantity_value(&self) -> Option<i64> {
        self.quantity.trim().parse().ok()
    }

    fn amount_value(&self) -> Option<f64> {
        self.amount.trim().parse().ok().filter(|v: &f64| v.is_finite())
    }
}

/// Append a blank row keyed past every existing row.
pub fn push_line(lines: &mut Vec<LineDraft>) {
    let key = lines.iter().map(|l| l.key).max().map_or(0, |k| k + 1);
    lines.push(LineDraft::new(key));
}

/// Quantity times amount; unparseable fields count as zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn line_total(line: &LineDraft) -> f64 {
    line.quantity_value().unwrap_or(0) as f64 * line.amount_value().unwrap_or(0.0)
}

#[must_use]
pub fn order_total(lines: &[LineDraft]) -> f64 {
    lines.iter().map(line_total).sum()
}

/// A validated line: product, quantity, amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidLine {
    pub product_id: i64,
    pub quantity: i64,
    pub amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineErrors {
    pub product: Option<&'static str>,
    pub quantity: Option<&'static str>,
    pub amount: Option<&'static str>,
}

impl LineErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Every line needs a product, a quantity of at least 1, and a positive
/// amount. Errors are returned per row in row order.
///
/// # Errors
///
/// Returns one [`LineErrors`] per row when any row fails; an empty order is
/// rejected with an empty error list.
pub fn validate_lines(lines: &[LineDraft]) -> Result<Vec<ValidLine>, Vec<LineErrors>> {
    if lines.is_empty() {
        return Err(Vec::new());
    }
    let mut valid = Vec::with_capacity(lines.len());
    let mut errors = Vec::with_capacity(lines.len());
    for line in lines {
        let product_id = line.product_id.trim().parse::<i64>().ok().filter(|id| *id > 0);
        let quantity = line.quantity_value().filter(|q| *q >= 1);
        let amount = line.amount_value().filter(|a| *a > 0.0);
        errors.push(LineErrors {
            product: product_id.is_none().then_some("Select a product"),
            quantity: quantity.is_none().then_some("Min 1"),
            amount: amount.is_none().then_some("Must be > 0"),
        });
        if let (Some(product_id), Some(quantity), Some(amount)) = (product_id, quantity, amount) {
            valid.push(ValidLine { product_id, quantity, amount });
        }
    }
    if errors.iter().all(LineErrors::is_empty) { Ok(valid) } else { Err(errors) }
}

// =============================================================================
// HEADER
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderHeaderDraft {
    pub party_id: String,
    pub warehouse_id: String,
    pub date: String,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderHeaderErrors {
    pub party: Option<&'static str>,
    pub warehouse: Option<&'static str>,
}

/// Parsed header fields shared by purchase and sales orders: counterparty,
/// warehouse, optional date, optional notes.
pub type ValidHeader = (i64, i64, Option<String>, Option<String>);

/// # Errors
///
/// Returns which selections are missing; `party_message` names the
/// counterparty (supplier or customer).
pub fn validate_header(draft: &OrderHeaderDraft, party_message: &'static str) -> Result<ValidHeader, OrderHeaderErrors> {
    let party = draft.party_id.trim().parse::<i64>().ok().filter(|id| *id > 0);
    let warehouse = draft.warehouse_id.trim().parse::<i64>().ok().filter(|id| *id > 0);
    match (party, warehouse) {
        (Some(party), Some(warehouse)) => {
            let optional = |raw: &str| {
                let raw = raw.trim();
                (!raw.is_empty()).then(|| raw.to_owned())
            };
            Ok((party, warehouse, optional(&draft.date), optional(&draft.notes)))
        }
        _ => Err(OrderHeaderErrors {
            party: party.is_none().then_some(party_message),
            warehouse: warehouse.is_none().then_some("Select a warehouse"),
        }),
    }
}

// =============================================================================
// EDITOR
// =============================================================================

#[component]
pub fn OrderLinesEditor(
    lines: RwSignal<Vec<LineDraft>>,
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] errors: Signal<Vec<LineErrors>>,
    amount_label: &'static str,
    total_label: &'static str,
    /// Fill the amount from the product's selling price when picked.
    #[prop(optional)]
    autofill_price: bool,
) -> impl IntoView {
    let update_line = move |key: u64, apply: Box<dyn FnOnce(&mut LineDraft)>| {
        lines.update(|ls| {
            if let Some(line) = ls.iter_mut().find(|l| l.key == key) {
                apply(line);
            }
        });
    };
    let field = move |key: u64, get: fn(&LineDraft) -> &String| {
        move || lines.with(|ls| ls.iter().find(|l| l.key == key).map(|l| get(l).clone()).unwrap_or_default())
    };
    let row_error = move |key: u64, get: fn(&LineErrors) -> Option<&'static str>| {
        move || {
            let index = lines.with(|ls| ls.iter().position(|l| l.key == key));
            index.and_then(|i| errors.with(|e| e.get(i).and_then(get)))
        }
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="form-grid__section">"Order Items"</h3>
                <button class="btn btn--ghost btn--small" type="button" on:click=move |_| lines.update(push_line)>
                    "+ Add Item"
                </button>
            </div>
            <Show
                when=move || !lines.with(Vec::is_empty)
                fallback=|| view! { <div class="banner banner--info">"Add at least one product to the order."</div> }
            >
                <table class="table table--dense">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th class="col-qty">"Quantity"</th>
                            <th class="col-amount">{amount_label}</th>
                            <th class="num col-amount">{total_label}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || lines.get() key=|line| line.key let:line>
                            {
                                let key = line.key;
                                view! {
                                    <tr>
                                        <td>
                                            <select
                                                class="field__input"
                                                prop:value=field(key, |l| &l.product_id)
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    let price = autofill_price
                                                        .then(|| {
                                                            products.with(|ps| {
                                                                ps.iter().find(|p| p.id.to_string() == value).map(|p| p.unit_price)
                                                            })
                                                        })
                                                        .flatten();
                                                    update_line(
                                                        key,
                                                        Box::new(move |l| {
                                                            l.product_id = value;
                                                            if let Some(price) = price {
                                                                l.amount = price.to_string();
                                                            }
                                                        }),
                                                    );
                                                }
                                            >
                                                <option value="" disabled=true>"Select product"</option>
                                                {move || {
                                                    let current = field(key, |l| &l.product_id)();
                                                    products
                                                        .get()
                                                        .into_iter()
                                                        .map(|p| {
                                                            let value = p.id.to_string();
                                                            let selected = value == current;
                                                            view! {
                                                                <option value=value selected=selected>
                                                                    {format!("{} ({})", p.name, p.sku)}
                                                                </option>
                                                            }
                                                        })
                                                        .collect_view()
                                                }}
                                            </select>
                                            <span class="field__error">{row_error(key, |e| e.product)}</span>
                                        </td>
                                        <td>
                                            <input
                                                class="field__input"
                                                type="number"
                                                min="1"
                                                prop:value=field(key, |l| &l.quantity)
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    update_line(key, Box::new(move |l| l.quantity = value));
                                                }
                                            />
                                            <span class="field__error">{row_error(key, |e| e.quantity)}</span>
                                        </td>
                                        <td>
                                            <input
                                                class="field__input"
                                                type="number"
                                                min="0"
                                                step="0.01"
                                                prop:value=field(key, |l| &l.amount)
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    update_line(key, Box::new(move |l| l.amount = value));
                                                }
                                            />
                                            <span class="field__error">{row_error(key, |e| e.amount)}</span>
                                        </td>
                                        <td class="num strong">
                                            {move || {
                                                format::currency(
                                                    lines.with(|ls| ls.iter().find(|l| l.key == key).map_or(0.0, line_total)),
                                                )
                                            }}
                                        </td>
                                        <td>
                                            <button
                                                class="btn btn--icon text-error"
                                                type="button"
                                                title="Remove item"
                                                on:click=move |_| lines.update(|ls| ls.retain(|l| l.key != key))
                                            >
                                                "\u{2715}"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
                <div class="order-total">
                    <span class="order-total__label">"Order Total"</span>
                    <span class="order-total__value">{move || format::currency(lines.with(|ls| order_total(ls)))}</span>
                </div>
            </Show>
        </div>
    }
}
