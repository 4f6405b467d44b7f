//! Labelled form controls shared by the page forms and dialogs.
//!
//! Values travel as strings; each form parses and validates them on submit
//! and feeds per-field messages back through `error`.

use leptos::prelude::*;

#[component]
pub fn FormField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] min: &'static str,
    #[prop(optional)] step: &'static str,
    #[prop(into, optional)] error: Signal<Option<&'static str>>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text" } else { input_type };
    let class = move || if error.get().is_some() { "field field--invalid" } else { "field" };
    view! {
        <label class=class>
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                min=(!min.is_empty()).then_some(min)
                step=(!step.is_empty()).then_some(step)
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <span class="field__error">{move || error.get()}</span>
        </label>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] rows: u8,
) -> impl IntoView {
    let rows = if rows == 0 { 2 } else { rows };
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--multiline"
                rows=rows.to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// `options` are `(value, label)` pairs; an empty value renders as a
/// disabled placeholder.
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into, optional)] error: Signal<Option<&'static str>>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let class = move || if error.get().is_some() { "field field--invalid" } else { "field" };
    view! {
        <label class=class>
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let selected = option_value == current;
                            let placeholder = option_value.is_empty();
                            view! {
                                <option value=option_value selected=selected disabled=placeholder>
                                    {option_label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <span class="field__error">{move || error.get()}</span>
        </label>
    }
}

/// `(value, label)` pairs for a wire enum, labelled by its wire string.
pub fn enum_options<T: Copy + std::fmt::Display>(all: &[T]) -> Vec<(String, String)> {
    all.iter().map(|v| (v.to_string(), v.to_string())).collect()
}
