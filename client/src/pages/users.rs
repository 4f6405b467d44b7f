//! ADMIN-only user directory and account creation.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::feedback::{ErrorBanner, Loading};
use crate::components::form_field::{FormField, SelectField, enum_options};
use crate::components::status_chip::StatusChip;
use crate::net::endpoints;
use crate::net::types::{RegisterRequest, UserRole};
use crate::state::mutation::Mutator;
use crate::state::query::{key, use_query};
use crate::state::toast::ToastKind;
use crate::util::format;
use crate::util::nav::avatar_initial;
use crate::util::status_tone::{self, Tone};

pub const USERNAME_MIN_CHARS: usize = 3;
pub const PASSWORD_MIN_CHARS: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: UserRole::Staff,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// `local@domain.tld` with no whitespace anywhere.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return false;
    }
    raw.match_indices('@').any(|(at, _)| {
        let domain = &raw[at + 1..];
        at > 0 && domain.char_indices().any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
    })
}

fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password required")
    } else if password.chars().count() < PASSWORD_MIN_CHARS {
        Some("Min 8 characters")
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) || !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Must include uppercase and number")
    } else {
        None
    }
}

/// # Errors
///
/// Returns per-field messages for a short username, a malformed email, or a
/// weak password.
pub fn validate_user(draft: &UserDraft) -> Result<RegisterRequest, UserErrors> {
    let username = draft.username.trim();
    let email = draft.email.trim();
    let errors = UserErrors {
        username: if username.is_empty() {
            Some("Username required")
        } else if username.chars().count() < USERNAME_MIN_CHARS {
            Some("Min 3 characters")
        } else {
            None
        },
        email: if email.is_empty() {
            Some("Email required")
        } else if is_valid_email(email) {
            None
        } else {
            Some("Invalid email")
        },
        password: password_error(&draft.password),
    };
    if errors != UserErrors::default() {
        return Err(errors);
    }
    let optional = |raw: &str| {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| raw.to_owned())
    };
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: draft.password.clone(),
        first_name: optional(&draft.first_name),
        last_name: optional(&draft.last_name),
        role: draft.role,
    })
}

#[must_use]
pub fn enabled_chip(enabled: bool) -> (&'static str, Tone) {
    if enabled { ("Active", Tone::Success) } else { ("Disabled", Tone::Neutral) }
}

#[must_use]
pub fn users_caption(count: usize) -> String {
    format!("{count} users \u{b7} Admin access only")
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let creating = RwSignal::new(false);
    let users = use_query(|| key(["users"]), |_| endpoints::list_users());
    let rows = Signal::derive(move || users.get().and_then(Result::ok).unwrap_or_default());

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"User Management"</h1>
                    <p class="page__subtitle">{move || users_caption(rows.with(Vec::len))}</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| creating.set(true)>
                    "Create User"
                </button>
            </div>
            <div class="banner banner--warning">
                <strong>"Admin Only: "</strong>
                "All user management actions are logged and audited. Only ADMIN role can access this page and create users."
            </div>
            {move || users.get().and_then(Result::err).map(|e| view! { <ErrorBanner error=e fallback="Failed to load users"/> })}
            <div class="table-card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Username"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                            <th>"Last Login"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|user| {
                                    let name = user.display_name();
                                    let name = if name == user.username { "\u{2014}".to_owned() } else { name };
                                    let (status_label, status_tone) = enabled_chip(user.enabled);
                                    let avatar_class = format!("avatar avatar--small avatar--{}", status_tone::role(user.role).modifier());
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="identity">
                                                    <span class=avatar_class>{avatar_initial(&user.username)}</span>
                                                    <span class="mono">{user.username.clone()}</span>
                                                </div>
                                            </td>
                                            <td>{name}</td>
                                            <td class="text-small text-primary">{user.email}</td>
                                            <td>
                                                <StatusChip label=user.role.as_str() tone=status_tone::role(user.role)/>
                                            </td>
                                            <td>
                                                <StatusChip label=status_label tone=status_tone/>
                                            </td>
                                            <td class="mono text-small text-muted">
                                                {user.last_login.as_deref().map_or_else(|| "Never".to_owned(), format::date_time)}
                                            </td>
                                            <td class="text-small text-muted">{format::date_time_or_dash(user.created_at.as_deref())}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || users.get().is_none()>
                    <Loading/>
                </Show>
            </div>
            <Show when=move || creating.get()>
                <CreateUserDialog on_close=Callback::new(move |()| creating.set(false))/>
            </Show>
        </div>
    }
}

#[component]
fn CreateUserDialog(on_close: Callback<()>) -> impl IntoView {
    let mutator = Mutator::from_context();
    let draft = RwSignal::new(UserDraft::default());
    let errors = RwSignal::new(UserErrors::default());
    let busy = RwSignal::new(false);

    let submit = move |_: leptos::ev::MouseEvent| {
        let request = match validate_user(&draft.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(UserErrors::default());
        mutator.run(
            endpoints::register(&request),
            &["users"],
            (ToastKind::Success, "User created successfully".to_owned()),
            "Failed to create user",
            busy,
            move |_| on_close.run(()),
        );
    };

    let field = move |get: fn(&UserDraft) -> &String| Signal::derive(move || draft.with(|d| get(d).clone()));
    let setter = move |set: fn(&mut UserDraft, String)| Callback::new(move |v: String| draft.update(|d| set(d, v)));

    view! {
        <Dialog title="Create New User" on_close=on_close>
            <div class="form-grid form-grid--two">
                <FormField
                    label="Username *"
                    value=field(|d| &d.username)
                    on_input=setter(|d, v| d.username = v)
                    error=Signal::derive(move || errors.get().username)
                />
                <SelectField
                    label="Role"
                    options=enum_options(UserRole::ALL)
                    value=Signal::derive(move || draft.with(|d| d.role.to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(role) = UserRole::parse(&v) {
                            draft.update(|d| d.role = role);
                        }
                    })
                />
                <div class="form-grid__full">
                    <FormField
                        label="Email *"
                        input_type="email"
                        value=field(|d| &d.email)
                        on_input=setter(|d, v| d.email = v)
                        error=Signal::derive(move || errors.get().email)
                    />
                </div>
                <FormField label="First Name" value=field(|d| &d.first_name) on_input=setter(|d, v| d.first_name = v)/>
                <FormField label="Last Name" value=field(|d| &d.last_name) on_input=setter(|d, v| d.last_name = v)/>
                <div class="form-grid__full">
                    <FormField
                        label="Password *"
                        input_type="password"
                        placeholder="Min 8 chars, 1 uppercase, 1 number"
                        value=field(|d| &d.password)
                        on_input=setter(|d, v| d.password = v)
                        error=Signal::derive(move || errors.get().password)
                    />
                </div>
            </div>
            <div class="dialog__actions">
                <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" disabled=move || busy.get() on:click=submit>
                    "Create User"
                </button>
            </div>
        </Dialog>
    }
}
