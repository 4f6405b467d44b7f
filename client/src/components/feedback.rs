//! Loading and error placeholders shared by data pages.

use leptos::prelude::*;

use crate::net::api::ApiError;

#[component]
pub fn Loading(#[prop(optional)] label: &'static str) -> impl IntoView {
    let label = if label.is_empty() { "Loading..." } else { label };
    view! { <p class="loading">{label}</p> }
}

/// Inline error banner with the server message or `fallback`.
#[component]
pub fn ErrorBanner(error: ApiError, fallback: &'static str) -> impl IntoView {
    view! { <div class="banner banner--error">{error.user_message(fallback)}</div> }
}
