//! Colored status pill.

use leptos::prelude::*;

use crate::util::status_tone::Tone;

#[component]
pub fn StatusChip(#[prop(into)] label: String, tone: Tone) -> impl IntoView {
    view! { <span class=tone.css_class()>{label}</span> }
}
