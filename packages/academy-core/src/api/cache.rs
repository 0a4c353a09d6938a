use moka::future::Cache;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::error::ApiError;

/// Response bodies of public GETs, keyed by path.
///
/// Concurrent misses for the same path share one request. Failures are
/// never cached. A zero TTL turns memoization off.
///
/// Keys carry the cache epoch at the time the fetch started. A fetch still
/// in flight when [`invalidate_all`](Self::invalidate_all) runs lands under
/// the old epoch, which no later read asks for.
#[derive(Clone)]
pub struct PublicCache {
    inner: Option<Cache<String, String>>,
    epoch: Arc<AtomicU64>,
}

impl PublicCache {
    pub fn new(ttl: Duration) -> Self {
        let inner = (!ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(256)
                .time_to_live(ttl)
                .build()
        });
        Self {
            inner,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn disabled() -> Self {
        Self {
            inner: None,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn get_or_fetch<F>(&self, path: &str, fetch: F) -> Result<String, ApiError>
    where
        F: Future<Output = Result<String, ApiError>>,
    {
        let Some(cache) = &self.inner else {
            return fetch.await;
        };

        let key = format!("{}:{}", self.epoch.load(Ordering::Acquire), path);
        if let Some(body) = cache.get(&key).await {
            debug!(path, "public cache hit");
            return Ok(body);
        }

        cache
            .try_get_with(key, fetch)
            .await
            .map_err(|err: Arc<ApiError>| (*err).clone())
    }

    /// Drop everything. Called after any admin mutation so the public pages
    /// show the change on the next load.
    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.inner {
            self.epoch.fetch_add(1, Ordering::AcqRel);
            cache.invalidate_all();
        }
    }
}
