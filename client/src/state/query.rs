//! Key-based response cache shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages read through [`use_query`], which keys each request by a list of
//! segments (`["inventory", "all", "0"]`). Mutations call
//! [`QueryCache::invalidate`] with a root segment; that bumps the root's epoch,
//! which every dependent resource tracks, and marks matching entries stale so
//! the re-run goes to the network.
//!
//! DESIGN
//! ======
//! Entries are stored as `serde_json::Value` so one cache can hold every
//! payload type. Fresh entries (younger than [`STALE_TIME_MS`], not
//! invalidated) short-circuit the request. Entries live no longer than the
//! views reading them: a view evicts its key when it is disposed, `store`
//! drops anything past stale time, and invalidation removes the root's
//! entries outright.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::api::{self, ApiError};
use crate::net::endpoints::ApiCall;

pub const STALE_TIME_MS: f64 = 30_000.0;

/// Segments identifying one cached response.
pub type QueryKey = Vec<String>;

/// Build a [`QueryKey`] from anything string-like.
#[must_use]
pub fn key<I, S>(segments: I) -> QueryKey
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    segments.into_iter().map(|s| s.to_string()).collect()
}

#[derive(Clone, Debug, PartialEq)]
struct CacheEntry {
    value: serde_json::Value,
    fetched_at_ms: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    epochs: HashMap<String, u64>,
}

impl QueryCache {
    /// Invalidation counter for the key's root segment.
    #[must_use]
    pub fn epoch(&self, key: &[String]) -> u64 {
        key.first().and_then(|root| self.epochs.get(root)).copied().unwrap_or(0)
    }

    /// Cached value for `key` if it is neither invalidated nor past stale time.
    #[must_use]
    pub fn fresh(&self, key: &[String], now_ms: f64) -> Option<&serde_json::Value> {
        self.entries
            .get(key)
            .filter(|e| now_ms - e.fetched_at_ms < STALE_TIME_MS)
            .map(|e| &e.value)
    }

    /// Record a response and drop every entry already past stale time.
    pub fn store(&mut self, key: QueryKey, value: serde_json::Value, now_ms: f64) {
        self.entries.retain(|_, e| now_ms - e.fetched_at_ms < STALE_TIME_MS);
        self.entries.insert(key, CacheEntry { value, fetched_at_ms: now_ms });
    }

    /// Remove every entry under `root` and bump its epoch. Returns the number
    /// of entries removed.
    pub fn invalidate(&mut self, root: &str) -> usize {
        *self.epochs.entry(root.to_owned()).or_default() += 1;
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.first().is_some_and(|r| r == root));
        before - self.entries.len()
    }

    /// Forget one key, e.g. when the view reading it goes away.
    pub fn evict(&mut self, key: &[String]) {
        self.entries.remove(key);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Invalidate each root on the shared cache.
pub fn invalidate(cache: RwSignal<QueryCache>, roots: &[&str]) {
    cache.update(|c| {
        for root in roots {
            c.invalidate(root);
        }
    });
}

/// Cached, re-fetching read of `request(key)`.
///
/// The resource re-runs when `query_key` changes or when its root segment is
/// invalidated. Transient failures are retried once by [`api::fetch`].
pub fn use_query<T, K, R>(query_key: K, request: R) -> LocalResource<Result<T, ApiError>>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
    K: Fn() -> QueryKey + 'static,
    R: Fn(&[String]) -> ApiCall<T> + 'static,
{
    let cache = expect_context::<RwSignal<QueryCache>>();
    let current = Arc::new(Mutex::new(None::<QueryKey>));

    let on_dispose = Arc::clone(&current);
    on_cleanup(move || {
        if let Some(key) = on_dispose.lock().ok().and_then(|mut k| k.take()) {
            cache.try_update_untracked(|c| c.evict(&key));
        }
    });

    LocalResource::new(move || {
        let key = query_key();
        if let Ok(mut slot) = current.lock() {
            if let Some(previous) = slot.replace(key.clone()).filter(|p| *p != key) {
                cache.try_update_untracked(|c| c.evict(&previous));
            }
        }
        let _epoch = cache.with(|c| c.epoch(&key));
        let cached = cache.with_untracked(|c| c.fresh(&key, now_ms()).cloned());
        let call = request(&key);
        async move {
            if let Some(hit) = cached.and_then(|v| serde_json::from_value::<T>(v).ok()) {
                return Ok(hit);
            }
            let result = api::fetch(call).await;
            if let Ok(payload) = &result {
                if let Ok(value) = serde_json::to_value(payload) {
                    cache.try_update_untracked(|c| c.store(key, value, now_ms()));
                }
            }
            result
        }
    })
}
