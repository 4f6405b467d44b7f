//! Label/value row used on detail cards.

use leptos::prelude::*;

#[component]
pub fn InfoRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-row__label">{label}</span>
            <span class="info-row__value">{children()}</span>
        </div>
    }
}
