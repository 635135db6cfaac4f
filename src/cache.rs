// ABOUTME: Keyed TTL cache with get-or-compute semantics.
// ABOUTME: Backs route fetches so repeated requests inside the expiry window reuse one response.

use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct Entry {
    value: Option<String>,
    expires_at: Instant,
}

/// Process-wide keyed store with per-call TTL.
///
/// Each key holds one computed value until it expires. Expired entries are
/// dropped on access; there is no background sweeper.
#[derive(Debug, Default)]
pub struct TtlCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key`, or runs `compute` to fill it.
    ///
    /// A `Some` result is stored under `ttl`. A `None` result is stored only
    /// when `cache_errors` is true, so failed computes are retried on the
    /// next call otherwise. The lock is not held across the compute await.
    pub async fn try_get<F, Fut>(
        &self,
        key: &str,
        compute: F,
        ttl: Duration,
        cache_errors: bool,
    ) -> Option<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<String>>,
    {
        {
            let mut entries = self.entries.lock().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return entry.value.clone();
                }
                Some(_) => {
                    entries.remove(key);
                }
                None => {}
            }
        }

        let value = compute().await;

        if value.is_some() || cache_errors {
            let mut entries = self.entries.lock().await;
            entries.insert(
                key.to_string(),
                Entry {
                    value: value.clone(),
                    expires_at: Instant::now() + ttl,
                },
            );
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn second_call_within_ttl_reuses_value() {
        let cache = TtlCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let got = cache
                .try_get(
                    "k",
                    || async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Some("v".to_string())
                    },
                    Duration::from_secs(60),
                    false,
                )
                .await;
            assert_eq!(got.as_deref(), Some("v"));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_entry_is_recomputed() {
        let cache = TtlCache::new();
        let calls = AtomicUsize::new(0);

        let compute = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Some("v".to_string())
        };

        cache
            .try_get("k", compute, Duration::from_millis(10), false)
            .await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        cache
            .try_get("k", compute, Duration::from_millis(10), false)
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_compute_is_not_cached_by_default() {
        let cache = TtlCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let got = cache
                .try_get(
                    "k",
                    || async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        None
                    },
                    Duration::from_secs(60),
                    false,
                )
                .await;
            assert_eq!(got, None);
        }

        // cache_errors=false means the miss is retried every call
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_compute_is_cached_when_requested() {
        let cache = TtlCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let got = cache
                .try_get(
                    "k",
                    || async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        None
                    },
                    Duration::from_secs(60),
                    true,
                )
                .await;
            assert_eq!(got, None);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let cache = TtlCache::new();

        let a = cache
            .try_get(
                "a",
                || async { Some("one".to_string()) },
                Duration::from_secs(60),
                false,
            )
            .await;
        let b = cache
            .try_get(
                "b",
                || async { Some("two".to_string()) },
                Duration::from_secs(60),
                false,
            )
            .await;

        assert_eq!(a.as_deref(), Some("one"));
        assert_eq!(b.as_deref(), Some("two"));
    }
}
