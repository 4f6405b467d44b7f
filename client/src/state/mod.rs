//! Reactive application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `ui` are the two global slices (session identity, theme and
//! chrome). `toast` holds the notification queue and `query` the shared
//! response cache; `mutation` wraps write requests around both. Page-local
//! view state stays inside each page.

pub mod auth;
pub mod mutation;
pub mod query;
pub mod toast;
pub mod ui;
