//! Supplier directory with a create/edit dialog for managers.

#[cfg(test)]
#[path = "suppliers_test.rs"]
mod suppliers_test;

use leptos::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::feedback::{ErrorBanner, Loading};
use crate::components::form_field::{FormField, SelectField, TextAreaField, enum_options};
use crate::components::pager::Pager;
use crate::components::status_chip::StatusChip;
use crate::net::endpoints::{self, PAGE_SIZE};
use crate::net::types::{Supplier, SupplierRequest, SupplierStatus};
use crate::state::auth::AuthState;
use crate::state::mutation::Mutator;
use crate::state::query::{key, use_query};
use crate::state::toast::ToastKind;
use crate::util::auth::{MANAGERS, can_access};
use crate::util::nav::avatar_initial;
use crate::util::status_tone;

#[derive(Clone, Debug, PartialEq)]
pub struct SupplierDraft {
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub payment_terms: String,
    pub lead_time: String,
    pub status: SupplierStatus,
}

impl Default for SupplierDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            contact_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            country: String::new(),
            payment_terms: "30".to_owned(),
            lead_time: "7".to_owned(),
            status: SupplierStatus::Active,
        }
    }
}

impl From<&Supplier> for SupplierDraft {
    fn from(s: &Supplier) -> Self {
        Self {
            name: s.name.clone(),
            contact_name: s.contact_name.clone().unwrap_or_default(),
            email: s.email.clone().unwrap_or_default(),
            phone: s.phone.clone().unwrap_or_default(),
            address: s.address.clone().unwrap_or_default(),
            city: s.city.clone().unwrap_or_default(),
            country: s.country.clone().unwrap_or_default(),
            payment_terms: s.payment_terms.to_string(),
            lead_time: s.lead_time.to_string(),
            status: s.status,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupplierErrors {
    pub name: Option<&'static str>,
    pub payment_terms: Option<&'static str>,
    pub lead_time: Option<&'static str>,
}

fn optional(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_owned())
}

fn days(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|d| *d >= 0)
}

/// # Errors
///
/// Returns per-field messages when the name is blank or a day count is not a
/// non-negative integer.
pub fn validate_supplier(draft: &SupplierDraft) -> Result<SupplierRequest, SupplierErrors> {
    let name = draft.name.trim();
    let payment_terms = days(&draft.payment_terms);
    let lead_time = days(&draft.lead_time);
    let errors = SupplierErrors {
        name: name.is_empty().then_some("Name required"),
        payment_terms: payment_terms.is_none().then_some("Must be \u{2265} 0"),
        lead_time: lead_time.is_none().then_some("Must be \u{2265} 0"),
    };
    match (payment_terms, lead_time) {
        (Some(payment_terms), Some(lead_time)) if errors == SupplierErrors::default() => Ok(SupplierRequest {
            name: name.to_owned(),
            contact_name: optional(&draft.contact_name),
            email: optional(&draft.email),
            phone: optional(&draft.phone),
            address: optional(&draft.address),
            city: optional(&draft.city),
            country: optional(&draft.country),
            payment_terms,
            lead_time,
            status: draft.status,
        }),
        _ => Err(errors),
    }
}

/// "City, Country" with whichever parts are present, or a dash.
#[must_use]
pub fn supplier_location(supplier: &Supplier) -> String {
    let parts: Vec<&str> = [supplier.city.as_deref(), supplier.country.as_deref()]
        .into_iter()
        .flatten()
        .filter(|p| !p.trim().is_empty())
        .collect();
    if parts.is_empty() { "\u{2014}".to_owned() } else { parts.join(", ") }
}

#[must_use]
pub fn suppliers_caption(total: u64) -> String {
    format!("{total} suppliers registered")
}

#[must_use]
pub fn save_message(is_edit: bool) -> &'static str {
    if is_edit { "Supplier updated" } else { "Supplier created" }
}

#[component]
pub fn SuppliersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let can_edit = Signal::derive(move || auth.get().role().is_some_and(|r| can_access(r, MANAGERS)));
    let page = RwSignal::new(0_u32);
    // `Some((None, _))` creates, `Some((Some(id), _))` edits.
    let dialog = RwSignal::new(None::<(Option<i64>, SupplierDraft)>);

    let suppliers = use_query(
        move || key(["suppliers".to_owned(), page.get().to_string()]),
        |key: &[String]| endpoints::list_suppliers(key.get(1).and_then(|p| p.parse().ok()).unwrap_or(0), PAGE_SIZE),
    );
    let data = Signal::derive(move || suppliers.get().and_then(Result::ok).unwrap_or_default());

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Suppliers"</h1>
                    <p class="page__subtitle">{move || suppliers_caption(data.get().total_elements)}</p>
                </div>
                <Show when=move || can_edit.get()>
                    <button class="btn btn--primary" on:click=move |_| dialog.set(Some((None, SupplierDraft::default())))>
                        "Add Supplier"
                    </button>
                </Show>
            </div>
            {move || suppliers.get().and_then(Result::err).map(|e| view! { <ErrorBanner error=e fallback="Failed to load suppliers"/> })}
            <div class="table-card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Supplier Name"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Location"</th>
                            <th class="center">"Payment Terms"</th>
                            <th class="center">"Lead Time"</th>
                            <th>"Status"</th>
                            <Show when=move || can_edit.get()>
                                <th></th>
                            </Show>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            data.get()
                                .content
                                .into_iter()
                                .map(|supplier| {
                                    let location = supplier_location(&supplier);
                                    let initial = avatar_initial(&supplier.name);
                                    let draft = SupplierDraft::from(&supplier);
                                    let id = supplier.id;
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="identity">
                                                    <span class="avatar avatar--small">{initial}</span>
                                                    <div>
                                                        <div>{supplier.name}</div>
                                                        <div class="text-small text-muted">{supplier.contact_name.unwrap_or_default()}</div>
                                                    </div>
                                                </div>
                                            </td>
                                            <td class="text-small text-primary">{supplier.email.unwrap_or_else(|| "\u{2014}".to_owned())}</td>
                                            <td class="text-small">{supplier.phone.unwrap_or_else(|| "\u{2014}".to_owned())}</td>
                                            <td class="text-small">{location}</td>
                                            <td class="center">
                                                <span class="chip chip--outlined">{format!("{} days", supplier.payment_terms)}</span>
                                            </td>
                                            <td class="center text-small">{format!("{} days", supplier.lead_time)}</td>
                                            <td>
                                                <StatusChip label=supplier.status.label() tone=status_tone::supplier(supplier.status)/>
                                            </td>
                                            <Show when=move || can_edit.get()>
                                                <td>
                                                    <button
                                                        class="btn btn--ghost btn--small"
                                                        on:click={
                                                            let draft = draft.clone();
                                                            move |_| dialog.set(Some((Some(id), draft.clone())))
                                                        }
                                                    >
                                                        "Edit"
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
                <Show when=move || suppliers.get().is_none()>
                    <Loading/>
                </Show>
                <Pager
                    page=page
                    total_pages=Signal::derive(move || data.get().total_pages)
                    total_elements=Signal::derive(move || data.get().total_elements)
                    size=PAGE_SIZE
                />
            </div>
            {move || {
                dialog
                    .get()
                    .map(|(id, initial)| {
                        view! { <SupplierDialog id=id initial=initial on_close=Callback::new(move |()| dialog.set(None))/> }
                    })
            }}
        </div>
    }
}

#[component]
fn SupplierDialog(id: Option<i64>, initial: SupplierDraft, on_close: Callback<()>) -> impl IntoView {
    let mutator = Mutator::from_context();
    let draft = RwSignal::new(initial);
    let errors = RwSignal::new(SupplierErrors::default());
    let busy = RwSignal::new(false);
    let is_edit = id.is_some();

    let submit = move |_: leptos::ev::MouseEvent| {
        let request = match validate_supplier(&draft.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(SupplierErrors::default());
        let call = match id {
            Some(id) => endpoints::update_supplier(id, &request),
            None => endpoints::create_supplier(&request),
        };
        mutator.run(
            call,
            &["suppliers"],
            (ToastKind::Success, save_message(is_edit).to_owned()),
            "Operation failed",
            busy,
            move |_| on_close.run(()),
        );
    };

    let field = move |get: fn(&SupplierDraft) -> &String| Signal::derive(move || draft.with(|d| get(d).clone()));
    let setter = move |set: fn(&mut SupplierDraft, String)| Callback::new(move |v: String| draft.update(|d| set(d, v)));

    view! {
        <Dialog title=if is_edit { "Edit Supplier" } else { "Add New Supplier" } on_close=on_close>
            <div class="form-grid form-grid--two">
                <div class="form-grid__full">
                    <FormField
                        label="Company Name *"
                        value=field(|d| &d.name)
                        on_input=setter(|d, v| d.name = v)
                        error=Signal::derive(move || errors.get().name)
                    />
                </div>
                <FormField label="Contact Person" value=field(|d| &d.contact_name) on_input=setter(|d, v| d.contact_name = v)/>
                <FormField label="Email" input_type="email" value=field(|d| &d.email) on_input=setter(|d, v| d.email = v)/>
                <FormField label="Phone" value=field(|d| &d.phone) on_input=setter(|d, v| d.phone = v)/>
                <FormField label="City" value=field(|d| &d.city) on_input=setter(|d, v| d.city = v)/>
                <FormField label="Country" value=field(|d| &d.country) on_input=setter(|d, v| d.country = v)/>
                <FormField
                    label="Payment Terms (days)"
                    input_type="number"
                    min="0"
                    value=field(|d| &d.payment_terms)
                    on_input=setter(|d, v| d.payment_terms = v)
                    error=Signal::derive(move || errors.get().payment_terms)
                />
                <FormField
                    label="Lead Time (days)"
                    input_type="number"
                    min="0"
                    value=field(|d| &d.lead_time)
                    on_input=setter(|d, v| d.lead_time = v)
                    error=Signal::derive(move || errors.get().lead_time)
                />
                <SelectField
                    label="Status"
                    options=enum_options(SupplierStatus::ALL)
                    value=Signal::derive(move || draft.with(|d| d.status.to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(status) = SupplierStatus::parse(&v) {
                            draft.update(|d| d.status = status);
                        }
                    })
                />
                <div class="form-grid__full">
                    <TextAreaField label="Address" value=field(|d| &d.address) on_input=setter(|d, v| d.address = v)/>
                </div>
            </div>
            <div class="dialog__actions">
                <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" disabled=move || busy.get() on:click=submit>
                    {if is_edit { "Save Changes" } else { "Create Supplier" }}
                </button>
            </div>
        </Dialog>
    }
}
