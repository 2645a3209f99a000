//! Query cache shared by every page that reads server data.
//!
//! DESIGN
//! ======
//! `QueryCache` is plain data so staleness, invalidation, and retry rules are
//! testable without a reactive runtime. `QueryClient` wraps it in a signal and
//! is provided once by `App`. Views subscribe to a key's epoch; invalidation
//! bumps the epoch, which re-runs every resource reading that key. Fetch
//! bookkeeping writes are untracked so a completed fetch never re-triggers
//! the resource that issued it. A fetch that started before an invalidation
//! of its key returns its data but leaves the cache stale.
//!
//! Cached data unused for `cache_time_ms` is evicted whenever the cache is
//! written. Entries themselves stay so epochs never go backwards.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;
use std::future::Future;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::clock;

/// Identifier for one cached server read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(pub &'static str);

impl QueryKey {
    pub const WEBSITES: QueryKey = QueryKey("websites");
}

pub const DEFAULT_STALE_TIME_MS: f64 = 5.0 * 60.0 * 1000.0;
pub const DEFAULT_CACHE_TIME_MS: f64 = 10.0 * 60.0 * 1000.0;
pub const DEFAULT_RETRY: u32 = 2;
const MAX_RETRY_DELAY_MS: u32 = 30_000;

/// Fixed cache behaviour. Not user-configurable at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryConfig {
    pub stale_time_ms: f64,
    /// Data not written for this long is evicted.
    pub cache_time_ms: f64,
    pub retry: u32,
    pub refetch_on_window_focus: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time_ms: DEFAULT_STALE_TIME_MS,
            cache_time_ms: DEFAULT_CACHE_TIME_MS,
            retry: DEFAULT_RETRY,
            refetch_on_window_focus: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryEntry {
    pub data: Option<serde_json::Value>,
    pub updated_at: Option<f64>,
    pub invalidated: bool,
    pub epoch: u64,
    pub failure_count: u32,
}

#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    config: QueryConfig,
    entries: HashMap<QueryKey, QueryEntry>,
}

impl QueryCache {
    #[must_use]
    pub fn new(config: QueryConfig) -> Self {
        Self { config, entries: HashMap::new() }
    }

    #[must_use]
    pub fn config(&self) -> QueryConfig {
        self.config
    }

    #[must_use]
    pub fn entry(&self, key: QueryKey) -> Option<&QueryEntry> {
        self.entries.get(&key)
    }

    /// Current invalidation epoch for `key` (0 if never invalidated).
    #[must_use]
    pub fn epoch(&self, key: QueryKey) -> u64 {
        self.entries.get(&key).map_or(0, |e| e.epoch)
    }

    /// Whether a read of `key` at `now_ms` must go to the network.
    #[must_use]
    pub fn is_stale(&self, key: QueryKey, now_ms: f64) -> bool {
        let Some(entry) = self.entries.get(&key) else {
            return true;
        };
        match (entry.invalidated, entry.updated_at, &entry.data) {
            (false, Some(updated_at), Some(_)) => now_ms - updated_at >= self.config.stale_time_ms,
            _ => true,
        }
    }

    /// Cached data for `key` if it is still fresh at `now_ms`.
    #[must_use]
    pub fn fresh_data(&self, key: QueryKey, now_ms: f64) -> Option<&serde_json::Value> {
        if self.is_stale(key, now_ms) {
            return None;
        }
        self.entries.get(&key).and_then(|e| e.data.as_ref())
    }

    pub fn record_success(&mut self, key: QueryKey, data: serde_json::Value, now_ms: f64) {
        self.evict_expired(now_ms);
        let entry = self.entries.entry(key).or_default();
        entry.data = Some(data);
        entry.updated_at = Some(now_ms);
        entry.invalidated = false;
        entry.failure_count = 0;
    }

    /// Record a fetch that started at `started_epoch`. Skipped, returning
    /// `false`, when `key` was invalidated while the fetch was in flight.
    pub fn record_success_since(
        &mut self,
        key: QueryKey,
        started_epoch: u64,
        data: serde_json::Value,
        now_ms: f64,
    ) -> bool {
        if self.epoch(key) != started_epoch {
            return false;
        }
        self.record_success(key, data, now_ms);
        true
    }

    pub fn record_failure(&mut self, key: QueryKey) {
        self.entries.entry(key).or_default().failure_count += 1;
    }

    /// Mark `key` stale and bump its epoch. Returns the new epoch.
    pub fn invalidate(&mut self, key: QueryKey, now_ms: f64) -> u64 {
        self.evict_expired(now_ms);
        let entry = self.entries.entry(key).or_default();
        entry.invalidated = true;
        entry.epoch += 1;
        entry.epoch
    }

    fn evict_expired(&mut self, now_ms: f64) {
        let cache_time_ms = self.config.cache_time_ms;
        for entry in self.entries.values_mut() {
            if entry.updated_at.is_some_and(|at| now_ms - at >= cache_time_ms) {
                entry.data = None;
                entry.updated_at = None;
            }
        }
    }
}

/// Exponential backoff before retry number `attempt` (1-based), capped at 30 s.
#[must_use]
pub fn retry_delay_ms(attempt: u32) -> u32 {
    1_000u32
        .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
        .min(MAX_RETRY_DELAY_MS)
}

/// Run `fetch` until it succeeds or `retry` retries are exhausted.
///
/// # Errors
///
/// Returns the last error once every attempt has failed.
pub async fn fetch_with_retry<T, F, Fut>(retry: u32, mut fetch: F) -> Result<T, String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    let mut failures = 0u32;
    loop {
        match fetch().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                failures += 1;
                if failures > retry {
                    return Err(err);
                }
                #[cfg(feature = "hydrate")]
                {
                    log::debug!("query attempt {failures} failed, retrying: {err}");
                    gloo_timers::future::TimeoutFuture::new(retry_delay_ms(failures)).await;
                }
            }
        }
    }
}

/// Reactive handle to the shared cache, provided via context.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: RwSignal<QueryCache>,
}

impl QueryClient {
    #[must_use]
    pub fn new(config: QueryConfig) -> Self {
        Self { cache: RwSignal::new(QueryCache::new(config)) }
    }

    #[must_use]
    pub fn config(&self) -> QueryConfig {
        self.cache.with_untracked(QueryCache::config)
    }

    /// Tracked read: resources calling this re-run when `key` is invalidated.
    #[must_use]
    pub fn epoch(&self, key: QueryKey) -> u64 {
        self.cache.with(|c| c.epoch(key))
    }

    pub fn invalidate(&self, key: QueryKey) {
        let now = clock::now_ms();
        self.cache.update(|c| {
            c.invalidate(key, now);
        });
    }

    /// Serve `key` from cache when fresh, otherwise fetch with retry and store.
    ///
    /// # Errors
    ///
    /// Returns the fetch error after retries are exhausted.
    pub async fn fetch_query<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, String>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, String>>,
    {
        let now = clock::now_ms();
        let cached = self
            .cache
            .try_with_untracked(|c| c.fresh_data(key, now).cloned())
            .flatten();
        if let Some(value) = cached {
            if let Ok(data) = serde_json::from_value::<T>(value) {
                return Ok(data);
            }
        }

        let (retry, started_epoch) = self
            .cache
            .try_with_untracked(|c| (c.config().retry, c.epoch(key)))
            .unwrap_or((DEFAULT_RETRY, 0));
        match fetch_with_retry(retry, fetch).await {
            Ok(data) => {
                if let Ok(value) = serde_json::to_value(&data) {
                    let now = clock::now_ms();
                    let recorded = self
                        .cache
                        .try_update_untracked(|c| c.record_success_since(key, started_epoch, value, now));
                    #[cfg(feature = "hydrate")]
                    if recorded == Some(false) {
                        log::debug!("not caching {} fetched before invalidation", key.0);
                    }
                    #[cfg(not(feature = "hydrate"))]
                    let _ = recorded;
                }
                Ok(data)
            }
            Err(err) => {
                let _ = self.cache.try_update_untracked(|c| c.record_failure(key));
                Err(err)
            }
        }
    }
}
