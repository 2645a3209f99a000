use std::cell::Cell;

use super::*;

const MINUTE_MS: f64 = 60.0 * 1000.0;

fn cache() -> QueryCache {
    QueryCache::new(QueryConfig::default())
}

// =============================================================
// Config
// =============================================================

#[test]
fn default_config_is_five_minutes_stale_two_retries() {
    let cfg = QueryConfig::default();
    assert!((cfg.stale_time_ms - 5.0 * MINUTE_MS).abs() < f64::EPSILON);
    assert!((cfg.cache_time_ms - 10.0 * MINUTE_MS).abs() < f64::EPSILON);
    assert_eq!(cfg.retry, 2);
    assert!(!cfg.refetch_on_window_focus);
}

// =============================================================
// Staleness
// =============================================================

#[test]
fn unknown_key_is_stale() {
    assert!(cache().is_stale(QueryKey::WEBSITES, 0.0));
}

#[test]
fn fresh_until_stale_time_elapses() {
    let mut c = cache();
    c.record_success(QueryKey::WEBSITES, serde_json::json!([]), 1_000.0);
    assert!(!c.is_stale(QueryKey::WEBSITES, 1_000.0 + 4.0 * MINUTE_MS));
    assert!(c.is_stale(QueryKey::WEBSITES, 1_000.0 + 5.0 * MINUTE_MS));
}

#[test]
fn fresh_data_hidden_once_stale() {
    let mut c = cache();
    c.record_success(QueryKey::WEBSITES, serde_json::json!([1]), 0.0);
    assert_eq!(c.fresh_data(QueryKey::WEBSITES, 10.0), Some(&serde_json::json!([1])));
    assert_eq!(c.fresh_data(QueryKey::WEBSITES, 6.0 * MINUTE_MS), None);
}

// =============================================================
// Invalidation
// =============================================================

#[test]
fn invalidate_marks_stale_and_bumps_epoch() {
    let mut c = cache();
    c.record_success(QueryKey::WEBSITES, serde_json::json!([]), 0.0);
    assert_eq!(c.epoch(QueryKey::WEBSITES), 0);

    assert_eq!(c.invalidate(QueryKey::WEBSITES, 0.0), 1);
    assert!(c.is_stale(QueryKey::WEBSITES, 0.0));
    assert_eq!(c.epoch(QueryKey::WEBSITES), 1);
}

#[test]
fn invalidate_unknown_key_creates_entry() {
    let mut c = cache();
    c.invalidate(QueryKey("other"), 0.0);
    assert_eq!(c.epoch(QueryKey("other")), 1);
    assert_eq!(c.epoch(QueryKey::WEBSITES), 0);
}

#[test]
fn success_after_invalidate_is_fresh_again() {
    let mut c = cache();
    c.invalidate(QueryKey::WEBSITES, 0.0);
    c.record_success(QueryKey::WEBSITES, serde_json::json!([]), 100.0);
    assert!(!c.is_stale(QueryKey::WEBSITES, 200.0));
    assert_eq!(c.epoch(QueryKey::WEBSITES), 1);
}

#[test]
fn failures_counted_and_reset_on_success() {
    let mut c = cache();
    c.record_failure(QueryKey::WEBSITES);
    c.record_failure(QueryKey::WEBSITES);
    assert_eq!(c.entry(QueryKey::WEBSITES).map(|e| e.failure_count), Some(2));
    c.record_success(QueryKey::WEBSITES, serde_json::json!([]), 0.0);
    assert_eq!(c.entry(QueryKey::WEBSITES).map(|e| e.failure_count), Some(0));
}

#[test]
fn fetch_started_before_invalidate_is_not_recorded() {
    let mut c = cache();
    let started = c.epoch(QueryKey::WEBSITES);
    c.invalidate(QueryKey::WEBSITES, 0.0);

    assert!(!c.record_success_since(QueryKey::WEBSITES, started, serde_json::json!(["old"]), 10.0));
    assert!(c.is_stale(QueryKey::WEBSITES, 10.0));
    assert_eq!(c.fresh_data(QueryKey::WEBSITES, 10.0), None);

    let started = c.epoch(QueryKey::WEBSITES);
    assert!(c.record_success_since(QueryKey::WEBSITES, started, serde_json::json!(["new"]), 20.0));
    assert_eq!(c.fresh_data(QueryKey::WEBSITES, 20.0), Some(&serde_json::json!(["new"])));
}

// =============================================================
// Cache time
// =============================================================

#[test]
fn unused_data_evicted_after_cache_time() {
    let mut c = cache();
    let other = QueryKey("other");
    c.record_success(other, serde_json::json!([1]), 0.0);
    c.invalidate(other, 0.0);

    c.record_success(QueryKey::WEBSITES, serde_json::json!([]), 9.0 * MINUTE_MS);
    assert!(c.entry(other).is_some_and(|e| e.data.is_some()));

    c.record_success(QueryKey::WEBSITES, serde_json::json!([]), 10.0 * MINUTE_MS);
    let evicted = c.entry(other).cloned().unwrap_or_default();
    assert_eq!(evicted.data, None);
    assert_eq!(evicted.updated_at, None);
    assert_eq!(evicted.epoch, 1);
    assert!(c.entry(QueryKey::WEBSITES).is_some_and(|e| e.data.is_some()));
}

#[test]
fn invalidate_also_evicts_expired_data() {
    let mut c = cache();
    c.record_success(QueryKey("other"), serde_json::json!([1]), 0.0);
    c.invalidate(QueryKey::WEBSITES, 11.0 * MINUTE_MS);
    assert_eq!(c.entry(QueryKey("other")).and_then(|e| e.data.clone()), None);
}

// =============================================================
// Retry
// =============================================================

#[test]
fn retry_delay_doubles_and_caps() {
    assert_eq!(retry_delay_ms(1), 1_000);
    assert_eq!(retry_delay_ms(2), 2_000);
    assert_eq!(retry_delay_ms(3), 4_000);
    assert_eq!(retry_delay_ms(10), 30_000);
    assert_eq!(retry_delay_ms(40), 30_000);
}

#[test]
fn fetch_with_retry_retries_once_then_succeeds() {
    let calls = Cell::new(0);
    let result = futures::executor::block_on(fetch_with_retry(1, || {
        calls.set(calls.get() + 1);
        let attempt = calls.get();
        async move { if attempt == 1 { Err("boom".to_owned()) } else { Ok(attempt) } }
    }));
    assert_eq!(result, Ok(2));
    assert_eq!(calls.get(), 2);
}

#[test]
fn fetch_with_retry_gives_up_after_retry_count() {
    let calls = Cell::new(0);
    let result: Result<(), String> = futures::executor::block_on(fetch_with_retry(1, || {
        calls.set(calls.get() + 1);
        let attempt = calls.get();
        async move { Err(format!("fail {attempt}")) }
    }));
    assert_eq!(result, Err("fail 2".to_owned()));
    assert_eq!(calls.get(), 2);
}

#[test]
fn fetch_with_retry_zero_retry_single_attempt() {
    let calls = Cell::new(0);
    let result: Result<(), String> = futures::executor::block_on(fetch_with_retry(0, || {
        calls.set(calls.get() + 1);
        async { Err("nope".to_owned()) }
    }));
    assert!(result.is_err());
    assert_eq!(calls.get(), 1);
}

// =============================================================
// QueryClient
// =============================================================

#[test]
fn client_serves_fresh_data_and_refetches_after_invalidate() {
    let owner = Owner::new();
    owner.with(|| {
        let client = QueryClient::new(QueryConfig::default());
        let calls = Cell::new(0);
        let fetch = || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move { Ok::<Vec<u32>, String>(vec![n]) }
        };

        let first = futures::executor::block_on(client.fetch_query(QueryKey::WEBSITES, fetch));
        assert_eq!(first, Ok(vec![1]));

        let cached = futures::executor::block_on(client.fetch_query(QueryKey::WEBSITES, fetch));
        assert_eq!(cached, Ok(vec![1]));
        assert_eq!(calls.get(), 1);

        client.invalidate(QueryKey::WEBSITES);
        assert_eq!(client.epoch(QueryKey::WEBSITES), 1);

        let refetched = futures::executor::block_on(client.fetch_query(QueryKey::WEBSITES, fetch));
        assert_eq!(refetched, Ok(vec![2]));
        assert_eq!(calls.get(), 2);
    });
}

#[test]
fn client_does_not_cache_fetch_overtaken_by_invalidate() {
    let owner = Owner::new();
    owner.with(|| {
        let client = QueryClient::new(QueryConfig::default());
        let calls = Cell::new(0);
        let fetch = || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            if n == 1 {
                client.invalidate(QueryKey::WEBSITES);
            }
            async move { Ok::<Vec<u32>, String>(vec![n]) }
        };

        let first = futures::executor::block_on(client.fetch_query(QueryKey::WEBSITES, fetch));
        assert_eq!(first, Ok(vec![1]));

        let second = futures::executor::block_on(client.fetch_query(QueryKey::WEBSITES, fetch));
        assert_eq!(second, Ok(vec![2]));
        assert_eq!(calls.get(), 2);

        let cached = futures::executor::block_on(client.fetch_query(QueryKey::WEBSITES, fetch));
        assert_eq!(cached, Ok(vec![2]));
        assert_eq!(calls.get(), 2);
    });
}
