//! Login page: username/password sign-in with demo account shortcuts.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::login_redirect;

pub const LOGIN_FAILED: &str = "Invalid username or password";

/// Seeded accounts offered as one-click fills.
pub const DEMO_ACCOUNTS: [(&str, &str); 3] =
    [("admin", "Admin@123"), ("manager", "Manager@123"), ("staff", "Staff@123")];

/// Per-field validation messages for the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Trim the username and require both fields.
///
/// # Errors
///
/// Returns the per-field messages when either field is blank.
pub fn validate_login(username: &str, password: &str) -> Result<LoginRequest, LoginErrors> {
    let username = username.trim();
    let errors = LoginErrors {
        username: username.is_empty().then_some("Username is required"),
        password: password.is_empty().then_some("Password is required"),
    };
    if errors.is_empty() {
        Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

#[must_use]
pub fn welcome_message(username: &str) -> String {
    format!("Welcome back, {username}!")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let field_errors = RwSignal::new(LoginErrors::default());

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if let Some(target) = login_redirect(&auth.get()) {
            navigate_home(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(LoginErrors::default());
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::mutate(crate::net::endpoints::login(&request)).await {
                    Ok(response) => {
                        let user = crate::net::types::AuthUser::from(response);
                        crate::state::toast::success(toasts, welcome_message(&user.username));
                        auth.update(|a| a.set_credentials(user));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.user_message(LOGIN_FAILED))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, toasts, &navigate);
            busy.set(false);
        }
    };

    let fill_demo = move |user: &'static str, pass: &'static str| {
        username.set(user.to_owned());
        password.set(pass.to_owned());
        field_errors.set(LoginErrors::default());
    };

    view! {
        <div class="login-page">
            <div class="login-page__inner">
                <div class="login-brand">
                    <span class="login-brand__logo">"E"</span>
                    <h1 class="login-brand__name">{crate::util::nav::BRAND}</h1>
                    <p class="login-brand__tagline">"INVENTORY & ORDER MANAGEMENT"</p>
                </div>
                <div class="login-card">
                    <h2>"Sign in to your account"</h2>
                    <p class="login-card__subtitle">"Access your ERP dashboard"</p>
                    <Show when=move || error.get().is_some()>
                        <div class="banner banner--error">{move || error.get().unwrap_or_default()}</div>
                    </Show>
                    <form class="login-form" on:submit=on_submit>
                        <label class="field">
                            <span class="field__label">"Username"</span>
                            <input
                                class="field__input"
                                type="text"
                                autocomplete="username"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                            <span class="field__error">{move || field_errors.get().username}</span>
                        </label>
                        <label class="field">
                            <span class="field__label">"Password"</span>
                            <div class="field__row">
                                <input
                                    class="field__input"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    autocomplete="current-password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button
                                    class="btn btn--icon"
                                    type="button"
                                    title="Show or hide password"
                                    on:click=move |_| show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                            <span class="field__error">{move || field_errors.get().password}</span>
                        </label>
                        <button class="btn btn--primary login-form__submit" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                    <div class="login-demo">
                        <p class="login-demo__title">"DEMO ACCOUNTS"</p>
                        <div class="login-demo__chips">
                            {DEMO_ACCOUNTS
                                .iter()
                                .map(|&(user, pass)| {
                                    view! {
                                        <button class="chip chip--info login-demo__chip" type="button" on:click=move |_| fill_demo(user, pass)>
                                            {user}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
