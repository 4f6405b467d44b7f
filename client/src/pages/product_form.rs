//! Create/edit product form.
//!
//! DESIGN
//! ======
//! The form edits a string-typed [`ProductDraft`]; [`validate_product`] is the
//! single place that parses numbers and applies field rules, so the page only
//! wires inputs and reacts to the result.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::feedback::{ErrorBanner, Loading};
use crate::components::form_field::{FormField, SelectField, TextAreaField, enum_options};
use crate::net::endpoints;
use crate::net::types::{Product, ProductRequest, ProductStatus};
use crate::state::mutation::Mutator;
use crate::state::query::{key, use_query};
use crate::state::toast::ToastKind;

pub const UNITS_OF_MEASURE: [&str; 7] = ["EACH", "KG", "LITER", "BOX", "PACK", "METER", "SET"];
pub const SKU_MAX_CHARS: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub unit_price: String,
    pub cost_price: String,
    pub reorder_level: String,
    pub reorder_quantity: String,
    pub unit_of_measure: String,
    pub status: ProductStatus,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            sku: String::new(),
            name: String::new(),
            description: String::new(),
            unit_price: "0".to_owned(),
            cost_price: "0".to_owned(),
            reorder_level: "10".to_owned(),
            reorder_quantity: "50".to_owned(),
            unit_of_measure: "EACH".to_owned(),
            status: ProductStatus::Active,
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(p: &Product) -> Self {
        Self {
            sku: p.sku.clone(),
            name: p.name.clone(),
            description: p.description.clone().unwrap_or_default(),
            unit_price: p.unit_price.to_string(),
            cost_price: p.cost_price.to_string(),
            reorder_level: p.reorder_level.to_string(),
            reorder_quantity: p.reorder_quantity.to_string(),
            unit_of_measure: p.unit_of_measure.clone(),
            status: p.status,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFormErrors {
    pub sku: Option<&'static str>,
    pub name: Option<&'static str>,
    pub unit_price: Option<&'static str>,
    pub cost_price: Option<&'static str>,
    pub reorder_level: Option<&'static str>,
    pub reorder_quantity: Option<&'static str>,
}

impl ProductFormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_price(raw: &str, missing: &'static str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(missing);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err("Must be \u{2265} 0"),
    }
}

fn parse_count(raw: &str) -> Result<i64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(v) if v >= 0 => Ok(v),
        _ => Err("Must be \u{2265} 0"),
    }
}

/// Apply the field rules and build the request body.
///
/// # Errors
///
/// Returns per-field messages for every rule that fails.
pub fn validate_product(draft: &ProductDraft) -> Result<ProductRequest, ProductFormErrors> {
    let sku = draft.sku.trim();
    let name = draft.name.trim();
    let unit_price = parse_price(&draft.unit_price, "Unit price required");
    let cost_price = parse_price(&draft.cost_price, "Cost price required");
    let reorder_level = parse_count(&draft.reorder_level);
    let reorder_quantity = parse_count(&draft.reorder_quantity);

    let errors = ProductFormErrors {
        sku: if sku.is_empty() {
            Some("SKU is required")
        } else if sku.chars().count() > SKU_MAX_CHARS {
            Some("Max 100 chars")
        } else {
            None
        },
        name: name.is_empty().then_some("Name is required"),
        unit_price: unit_price.err(),
        cost_price: cost_price.err(),
        reorder_level: reorder_level.err(),
        reorder_quantity: reorder_quantity.err(),
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    let description = draft.description.trim();
    Ok(ProductRequest {
        sku: sku.to_owned(),
        name: name.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
        category_id: None,
        unit_price: unit_price.unwrap_or_default(),
        cost_price: cost_price.unwrap_or_default(),
        reorder_level: reorder_level.unwrap_or_default(),
        reorder_quantity: reorder_quantity.unwrap_or_default(),
        unit_of_measure: draft.unit_of_measure.clone(),
        status: draft.status,
    })
}

/// Select options for [`UNITS_OF_MEASURE`], value and label alike.
#[must_use]
pub fn unit_options() -> Vec<(String, String)> {
    UNITS_OF_MEASURE.iter().map(|u| ((*u).to_owned(), (*u).to_owned())).collect()
}

#[must_use]
pub fn success_message(is_edit: bool) -> &'static str {
    if is_edit { "Product updated successfully" } else { "Product created successfully" }
}

#[component]
pub fn ProductFormPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let mutator = Mutator::from_context();

    let product_id = params.with_untracked(|p| p.get("id")).and_then(|id| id.parse::<i64>().ok());
    let is_edit = product_id.is_some();

    let draft = RwSignal::new(ProductDraft::default());
    let errors = RwSignal::new(ProductFormErrors::default());
    let saving = RwSignal::new(false);

    let existing = product_id
        .map(|id| use_query(move || key(["product".to_owned(), id.to_string()]), move |_| endpoints::get_product(id)));
    let loading = Signal::derive(move || existing.is_some_and(|r| r.get().is_none()));
    Effect::new(move || {
        if let Some(Some(Ok(product))) = existing.map(|r| r.get()) {
            draft.set(ProductDraft::from(&product));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_product(&draft.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ProductFormErrors::default());
        let call = match product_id {
            Some(id) => endpoints::update_product(id, &request),
            None => endpoints::create_product(&request),
        };
        let navigate = navigate.clone();
        mutator.run(
            call,
            &["products", "product"],
            (ToastKind::Success, success_message(is_edit).to_owned()),
            "Operation failed",
            saving,
            move |_| navigate("/products", NavigateOptions::default()),
        );
    };

    let field = move |get: fn(&ProductDraft) -> &String| Signal::derive(move || draft.with(|d| get(d).clone()));
    let setter = move |set: fn(&mut ProductDraft, String)| Callback::new(move |v: String| draft.update(|d| set(d, v)));

    view! {
        <div class="page page--narrow">
            <nav class="breadcrumbs">
                <a href="/products">"Products"</a>
                <span>{if is_edit { "Edit Product" } else { "New Product" }}</span>
            </nav>
            <div class="page__header">
                <a class="btn btn--ghost" href="/products">"\u{2190} Back"</a>
                <div>
                    <h1 class="page__title">{if is_edit { "Edit Product" } else { "Create Product" }}</h1>
                    <p class="page__subtitle">
                        {move || {
                            if is_edit {
                                format!("Editing: {}", draft.with(|d| d.sku.clone()))
                            } else {
                                "Add a new product to the catalog".to_owned()
                            }
                        }}
                    </p>
                </div>
            </div>
            {move || {
                existing
                    .and_then(|r| r.get())
                    .and_then(Result::err)
                    .map(|e| view! { <ErrorBanner error=e fallback="Failed to load product"/> })
            }}
            <Show when=move || loading.get()>
                <Loading/>
            </Show>
            <form class="card form-grid" on:submit=on_submit>
                <h3 class="form-grid__section">"Basic Information"</h3>
                <FormField
                    label="SKU *"
                    value=field(|d| &d.sku)
                    on_input=setter(|d, v| d.sku = v)
                    error=Signal::derive(move || errors.get().sku)
                    disabled=is_edit
                />
                <FormField
                    label="Product Name *"
                    value=field(|d| &d.name)
                    on_input=setter(|d, v| d.name = v)
                    error=Signal::derive(move || errors.get().name)
                />
                <TextAreaField
                    label="Description"
                    value=field(|d| &d.description)
                    on_input=setter(|d, v| d.description = v)
                />
                <h3 class="form-grid__section">"Pricing"</h3>
                <FormField
                    label="Unit Price (Selling) *"
                    input_type="number"
                    min="0"
                    step="0.01"
                    value=field(|d| &d.unit_price)
                    on_input=setter(|d, v| d.unit_price = v)
                    error=Signal::derive(move || errors.get().unit_price)
                />
                <FormField
                    label="Cost Price (Purchase) *"
                    input_type="number"
                    min="0"
                    step="0.01"
                    value=field(|d| &d.cost_price)
                    on_input=setter(|d, v| d.cost_price = v)
                    error=Signal::derive(move || errors.get().cost_price)
                />
                <h3 class="form-grid__section">"Inventory Settings"</h3>
                <FormField
                    label="Reorder Level"
                    input_type="number"
                    min="0"
                    value=field(|d| &d.reorder_level)
                    on_input=setter(|d, v| d.reorder_level = v)
                    error=Signal::derive(move || errors.get().reorder_level)
                />
                <FormField
                    label="Reorder Qty"
                    input_type="number"
                    min="0"
                    value=field(|d| &d.reorder_quantity)
                    on_input=setter(|d, v| d.reorder_quantity = v)
                    error=Signal::derive(move || errors.get().reorder_quantity)
                />
                <SelectField
                    label="Unit of Measure"
                    options=unit_options()
                    value=field(|d| &d.unit_of_measure)
                    on_change=setter(|d, v| d.unit_of_measure = v)
                />
                <SelectField
                    label="Status"
                    options=enum_options(ProductStatus::ALL)
                    value=Signal::derive(move || draft.with(|d| d.status.to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(status) = ProductStatus::parse(&v) {
                            draft.update(|d| d.status = status);
                        }
                    })
                />
                <div class="form-grid__actions">
                    <a class="btn btn--ghost" href="/products">"Cancel"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || match (saving.get(), is_edit) {
                            (true, _) => "Saving...",
                            (false, true) => "Save Changes",
                            (false, false) => "Create Product",
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
