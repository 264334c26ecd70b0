//! Cached catalog snapshot and its expiry policy.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ComponentDescriptor;

/// A catalog snapshot persisted between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedCatalog {
    pub fetched_at: DateTime<Utc>,
    pub components: Vec<ComponentDescriptor>,
}

impl CachedCatalog {
    /// A snapshot is fresh while younger than `ttl`. Timestamps in the future count as stale.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let Ok(age) = (now - self.fetched_at).to_std() else {
            return false;
        };
        age < ttl
    }
}

/// When a cached catalog may be served instead of fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub ttl: Duration,
    /// Bypass (and overwrite) a fresh snapshot.
    pub force_refresh: bool,
}

impl CachePolicy {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, force_refresh: false }
    }

    pub fn with_force_refresh(mut self, force_refresh: bool) -> Self {
        self.force_refresh = force_refresh;
        self
    }
}
