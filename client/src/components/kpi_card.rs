//! Headline metric card used on the dashboard and analytics pages.

use leptos::prelude::*;

use crate::util::status_tone::Tone;

/// Card with an overline title, a large value, and an optional caption.
/// Shows a skeleton while `loading` is true.
#[component]
pub fn KpiCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] caption: &'static str,
    #[prop(optional)] tone: Tone,
    #[prop(into, optional)] loading: Signal<bool>,
) -> impl IntoView {
    let class = format!("kpi-card kpi-card--{}", tone.modifier());
    view! {
        <div class=class>
            <span class="kpi-card__title">{title}</span>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="kpi-card__value skeleton"></span> }
            >
                <span class="kpi-card__value">{move || value.get()}</span>
            </Show>
            <Show when=move || !caption.is_empty()>
                <span class="kpi-card__caption">{caption}</span>
            </Show>
        </div>
    }
}
