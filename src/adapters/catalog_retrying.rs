//! Retry wrapper for catalog fetches.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::domain::{AppError, CatalogSettings, ComponentDescriptor};
use crate::ports::CatalogProvider;

const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// How many times, and how far apart, a catalog fetch is attempted.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn from_settings(settings: &CatalogSettings) -> Self {
        let base_delay = Duration::from_millis(settings.retry_delay_ms.max(1));
        Self {
            max_attempts: settings.max_retries.max(1),
            base_delay,
            max_delay: MAX_BACKOFF.max(base_delay),
        }
    }

    /// Delay before the attempt following `failed_attempt` (1-based).
    ///
    /// A server-provided `Retry-After` wins over exponential backoff; both are capped.
    fn delay_after(&self, failed_attempt: u32, error: &AppError) -> Duration {
        if let AppError::CatalogUnavailable { retry_after: Some(requested), .. } = error {
            return (*requested).min(self.max_delay);
        }

        let doublings = failed_attempt.saturating_sub(1).min(6);
        let backoff = self.base_delay.saturating_mul(1 << doublings).min(self.max_delay);
        (backoff + jitter(backoff / 4)).min(self.max_delay)
    }
}

/// Decorator retrying transient catalog failures.
///
/// Only errors flagged transient by the transport are retried; decode and
/// validation failures surface on the first attempt.
pub struct RetryingCatalogProvider {
    inner: Box<dyn CatalogProvider>,
    policy: RetryPolicy,
}

impl RetryingCatalogProvider {
    pub fn new(inner: Box<dyn CatalogProvider>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl CatalogProvider for RetryingCatalogProvider {
    fn fetch_catalog(&self) -> Result<Vec<ComponentDescriptor>, AppError> {
        let mut attempt = 1;
        loop {
            let error = match self.inner.fetch_catalog() {
                Ok(catalog) => return Ok(catalog),
                Err(error) => error,
            };

            if !error.is_transient() || attempt >= self.policy.max_attempts {
                return Err(error);
            }

            let delay = self.policy.delay_after(attempt, &error);
            tracing::warn!(
                attempt,
                max_attempts = self.policy.max_attempts,
                delay_ms = delay.as_millis() as u64,
                "catalog fetch failed, retrying: {error}"
            );
            thread::sleep(delay);
            attempt += 1;
        }
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

/// Pseudo-random duration in `[0, cap)` taken from the clock's sub-second part.
fn jitter(cap: Duration) -> Duration {
    let cap_nanos = cap.as_nanos() as u64;
    if cap_nanos == 0 {
        return Duration::ZERO;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|since| u64::from(since.subsec_nanos()))
        .unwrap_or(0);
    Duration::from_nanos(nanos % cap_nanos)
}
