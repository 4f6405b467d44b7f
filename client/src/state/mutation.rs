//! Fire-and-report helper for write requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every create/update/action button follows the same flow: mark busy, send
//! once, invalidate the affected query roots on success, and surface the
//! server message (or a per-action fallback) as an error toast on failure.
//! [`Mutator`] is captured at component creation so event handlers need no
//! context lookups.

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::net::endpoints::ApiCall;
use crate::state::query::QueryCache;
use crate::state::toast::{self, ToastKind, ToastState};

#[derive(Clone, Copy)]
pub struct Mutator {
    pub cache: RwSignal<QueryCache>,
    pub toasts: RwSignal<ToastState>,
}

impl Mutator {
    #[must_use]
    pub fn from_context() -> Self {
        Self { cache: expect_context::<RwSignal<QueryCache>>(), toasts: expect_context::<RwSignal<ToastState>>() }
    }

    pub fn notify(self, kind: ToastKind, message: impl Into<String>) {
        toast::notify(self.toasts, kind, message);
    }

    /// Send `call`. On success invalidate `roots`, toast `success`, and hand
    /// the payload to `after`; on failure toast the error.
    pub fn run<T, A>(
        self,
        call: ApiCall<T>,
        roots: &'static [&'static str],
        success: (ToastKind, String),
        fallback: &'static str,
        busy: RwSignal<bool>,
        after: A,
    ) where
        T: DeserializeOwned + 'static,
        A: FnOnce(T) + 'static,
    {
        self.run_reporting(call, roots, fallback, busy, move |payload| {
            after(payload);
            success
        });
    }

    /// Like [`Mutator::run`], but the success toast is built from the
    /// response payload.
    pub fn run_reporting<T, A>(
        self,
        call: ApiCall<T>,
        roots: &'static [&'static str],
        fallback: &'static str,
        busy: RwSignal<bool>,
        after: A,
    ) where
        T: DeserializeOwned + 'static,
        A: FnOnce(T) -> (ToastKind, String) + 'static,
    {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::mutate(call).await {
                Ok(payload) => {
                    leptos::logging::log!("mutation ok, invalidating {roots:?}");
                    crate::state::query::invalidate(self.cache, roots);
                    let (kind, message) = after(payload);
                    self.notify(kind, message);
                }
                Err(e) => {
                    leptos::logging::warn!("mutation failed: {e}");
                    self.notify(ToastKind::Error, e.user_message(fallback));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (call, roots, fallback, after);
            busy.set(false);
        }
    }
}
