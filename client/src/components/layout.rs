//! Authenticated application shell: sidebar, top bar, and routed content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except `/login` renders inside this shell. It owns the
//! unauthenticated redirect; role checks for individual routes live in
//! [`crate::components::role_gate::RoleGate`].

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_route_guard;
use crate::util::nav::{self, NavEntry};
use crate::util::status_tone;

#[component]
pub fn AppLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    // Logout only clears the session; this guard performs the redirect.
    install_route_guard(auth, &[], use_navigate());

    let pathname = location.pathname;
    let role = Memo::new(move |_| auth.get().role());
    let shell_class = move || if ui.get().sidebar_open { "app" } else { "app app--collapsed" };

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            <div class=shell_class>
                <aside class="sidebar">
                    <div class="sidebar__brand">
                        <span class="sidebar__logo">"E"</span>
                        <Show when=move || ui.get().sidebar_open>
                            <span class="sidebar__brand-name">{nav::BRAND}</span>
                        </Show>
                    </div>
                    <nav class="sidebar__nav">
                        {move || {
                            role.get()
                                .map(|r| {
                                    nav::visible_entries(r)
                                        .into_iter()
                                        .map(|entry| {
                                            if entry.is_group() {
                                                view! { <NavGroup entry=entry pathname=pathname/> }.into_any()
                                            } else {
                                                view! { <NavLink entry=entry pathname=pathname/> }.into_any()
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </nav>
                    <div class="sidebar__footer">
                        {move || {
                            auth.get()
                                .user
                                .map(|user| {
                                    let tone = status_tone::role(user.role);
                                    view! {
                                        <div class="sidebar__user">
                                            <span class="sidebar__username">{user.username.clone()}</span>
                                            <span class=tone.css_class()>{user.role.as_str()}</span>
                                        </div>
                                    }
                                })
                        }}
                        <button
                            class="btn btn--ghost sidebar__logout"
                            title="Logout"
                            on:click=move |_| auth.update(AuthState::logout)
                        >
                            "Logout"
                        </button>
                    </div>
                </aside>
                <div class="app__main">
                    <TopBar pathname=pathname/>
                    <main class="app__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn NavLink(entry: &'static NavEntry, pathname: Memo<String>) -> impl IntoView {
    let href = entry.path.unwrap_or("/");
    let class = move || {
        if entry.is_active(&pathname.get()) { "nav-item nav-item--active" } else { "nav-item" }
    };
    view! {
        <a href=href class=class>
            <span class="nav-item__label">{entry.label}</span>
        </a>
    }
}

#[component]
fn NavGroup(entry: &'static NavEntry, pathname: Memo<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let label = entry.label;
    let class = move || {
        if entry.is_active(&pathname.get()) { "nav-group nav-group--active" } else { "nav-group" }
    };

    view! {
        <div class=class>
            <button class="nav-item nav-item--group" on:click=move |_| ui.update(|u| u.toggle_group(label))>
                <span class="nav-item__label">{label}</span>
                <span class="nav-item__caret">
                    {move || if ui.get().is_expanded(label) { "\u{25be}" } else { "\u{25b8}" }}
                </span>
            </button>
            <Show when=move || ui.get().is_expanded(label) && ui.get().sidebar_open>
                <div class="nav-group__children">
                    {entry
                        .children
                        .iter()
                        .map(|child| view! { <NavLink entry=child pathname=pathname/> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn TopBar(pathname: Memo<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let initial = move || auth.get().user.map_or_else(|| "?".to_owned(), |u| nav::avatar_initial(&u.username));

    view! {
        <header class="topbar">
            <button class="btn btn--icon" title="Toggle sidebar" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                "\u{2630}"
            </button>
            <h1 class="topbar__title">{move || nav::page_title(&pathname.get())}</h1>
            <span class="topbar__spacer"></span>
            <button
                class="btn btn--icon"
                title="Toggle dark mode"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
            <span class="topbar__avatar">{initial}</span>
        </header>
    }
}
