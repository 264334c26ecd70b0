//! Cache wrapper for catalog fetches.
//!
//! The cache is an explicit collaborator: callers inject the store and the
//! expiry policy. The store is consulted lazily on the first fetch, and a
//! snapshot is invalidated by TTL expiry or a forced refresh.

use chrono::{DateTime, Utc};

use crate::domain::{
    AppError, CachePolicy, CachedCatalog, ComponentDescriptor, ensure_unique_ids,
};
use crate::ports::{CatalogCacheStore, CatalogProvider};

pub struct CachingCatalogProvider<P: CatalogProvider, S: CatalogCacheStore> {
    inner: P,
    store: S,
    policy: CachePolicy,
    clock: fn() -> DateTime<Utc>,
}

impl<P: CatalogProvider, S: CatalogCacheStore> CachingCatalogProvider<P, S> {
    pub fn new(inner: P, store: S, policy: CachePolicy) -> Self {
        Self { inner, store, policy, clock: Utc::now }
    }

    /// Replace the wall clock used for freshness checks.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn cached_if_fresh(&self, now: DateTime<Utc>) -> Option<Vec<ComponentDescriptor>> {
        match self.store.load() {
            Ok(Some(cached)) if ensure_unique_ids(&cached.components).is_err() => {
                tracing::warn!("ignoring cached catalog with duplicate component ids");
                None
            }
            Ok(Some(cached)) if cached.is_fresh(now, self.policy.ttl) => {
                tracing::debug!(fetched_at = %cached.fetched_at, "serving catalog from cache");
                Some(cached.components)
            }
            Ok(Some(cached)) => {
                tracing::debug!(fetched_at = %cached.fetched_at, "cached catalog expired");
                None
            }
            Ok(None) => {
                tracing::debug!("no cached catalog");
                None
            }
            Err(err) => {
                tracing::warn!("ignoring unreadable catalog cache: {err}");
                None
            }
        }
    }
}

impl<P: CatalogProvider, S: CatalogCacheStore> CatalogProvider for CachingCatalogProvider<P, S> {
    fn fetch_catalog(&self) -> Result<Vec<ComponentDescriptor>, AppError> {
        let now = (self.clock)();

        if self.policy.force_refresh {
            tracing::info!("forced catalog refresh");
            self.store.invalidate()?;
        } else if let Some(components) = self.cached_if_fresh(now) {
            return Ok(components);
        }

        let components = self.inner.fetch_catalog()?;
        // Malformed catalogs are never cached.
        ensure_unique_ids(&components)?;

        let snapshot = CachedCatalog { fetched_at: now, components };
        if let Err(err) = self.store.save(&snapshot) {
            tracing::warn!("failed to persist catalog cache: {err}");
        }

        Ok(snapshot.components)
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}
