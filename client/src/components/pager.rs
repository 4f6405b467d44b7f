//! Previous/next pager for server-paged tables.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use leptos::prelude::*;

/// "1-20 of 41" style range text for a zero-based `page`.
#[must_use]
pub fn range_label(page: u32, size: u32, total: u64) -> String {
    if total == 0 || size == 0 {
        return "0 of 0".to_owned();
    }
    let start = u64::from(page) * u64::from(size) + 1;
    let end = (start + u64::from(size) - 1).min(total);
    if start > total {
        return format!("0 of {total}");
    }
    format!("{start}\u{2013}{end} of {total}")
}

#[must_use]
pub fn has_next(page: u32, total_pages: u32) -> bool {
    page + 1 < total_pages
}

#[component]
pub fn Pager(
    page: RwSignal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] total_elements: Signal<u64>,
    size: u32,
) -> impl IntoView {
    view! {
        <div class="pager">
            <span class="pager__range">{move || range_label(page.get(), size, total_elements.get())}</span>
            <button
                class="btn btn--ghost pager__prev"
                disabled=move || page.get() == 0
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
            >
                "\u{2039} Prev"
            </button>
            <button
                class="btn btn--ghost pager__next"
                disabled=move || !has_next(page.get(), total_pages.get())
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next \u{203a}"
            </button>
        </div>
    }
}
