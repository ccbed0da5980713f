use crate::ports::outbound::{ExchangeRateSource, ProgressReporter};
use crate::shared::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Static fallback applied when no rate was ever fetched successfully
pub const FALLBACK_USD_TO_EUR: Decimal = dec!(0.92);

/// Freshness window for a cached rate (24 hours)
const DEFAULT_MAX_AGE: Duration = Duration::from_secs(86_400);

/// An immutable (rate, timestamp) pair, replaced atomically as a whole so
/// concurrent readers never observe a rate with a foreign timestamp.
#[derive(Debug, Clone, Copy)]
struct CachedRate {
    rate: Decimal,
    fetched_at: Instant,
}

/// CachingExchangeRateSource wraps an ExchangeRateSource and adds a
/// process-wide freshness-windowed cache with a static fallback.
///
/// This adapter implements the decorator pattern: the domain layer only
/// cares about obtaining a rate, and whether it comes from cache, network
/// or fallback is transparent.
///
/// # Failure policy
/// - cached rate younger than the freshness window: served as is
/// - stale or absent: one refetch attempt through the inner source
/// - refetch fails with a cached rate present: the stale rate is served
/// - refetch fails with no cached rate: the static fallback (0.92) is
///   served and a warning goes to the reporter once per process
///
/// Two workers racing past a stale cache may both refetch; the duplicate
/// request is wasteful but harmless, and last-writer-wins on the atomic
/// pair keeps the cache consistent.
pub struct CachingExchangeRateSource<S: ExchangeRateSource> {
    inner: S,
    reporter: Arc<dyn ProgressReporter + Send + Sync>,
    cache: RwLock<Option<CachedRate>>,
    max_age: Duration,
    fallback_warned: AtomicBool,
}

impl<S: ExchangeRateSource> CachingExchangeRateSource<S> {
    /// Creates a caching source with the 24-hour freshness window.
    /// The reporter receives the one-time fallback warning.
    pub fn new(inner: S, reporter: Arc<dyn ProgressReporter + Send + Sync>) -> Self {
        Self::with_max_age(inner, reporter, DEFAULT_MAX_AGE)
    }

    /// Creates a caching source with a custom freshness window.
    /// A zero window forces a refetch attempt on every call.
    pub fn with_max_age(
        inner: S,
        reporter: Arc<dyn ProgressReporter + Send + Sync>,
        max_age: Duration,
    ) -> Self {
        Self {
            inner,
            reporter,
            cache: RwLock::new(None),
            max_age,
            fallback_warned: AtomicBool::new(false),
        }
    }

    fn fresh_rate(&self) -> Option<Decimal> {
        let guard = self.cache.read().unwrap_or_else(|e| e.into_inner());
        guard
            .filter(|cached| cached.fetched_at.elapsed() < self.max_age)
            .map(|cached| cached.rate)
    }

    fn any_cached_rate(&self) -> Option<Decimal> {
        let guard = self.cache.read().unwrap_or_else(|e| e.into_inner());
        guard.map(|cached| cached.rate)
    }

    fn store(&self, rate: Decimal) {
        let mut guard = self.cache.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(CachedRate {
            rate,
            fetched_at: Instant::now(),
        });
    }
}

#[async_trait]
impl<S: ExchangeRateSource> ExchangeRateSource for CachingExchangeRateSource<S> {
    async fn usd_to_eur(&self) -> Result<Decimal> {
        if let Some(rate) = self.fresh_rate() {
            return Ok(rate);
        }

        // The lock is never held across the await: duplicate fetches are
        // preferable to blocking every worker behind one request.
        match self.inner.usd_to_eur().await {
            Ok(rate) => {
                self.store(rate);
                Ok(rate)
            }
            Err(e) => {
                if let Some(stale) = self.any_cached_rate() {
                    return Ok(stale);
                }
                if !self.fallback_warned.swap(true, Ordering::SeqCst) {
                    self.reporter.report_error(&format!(
                        "Could not fetch the USD/EUR exchange rate ({}), using fallback rate {}",
                        e, FALLBACK_USD_TO_EUR
                    ));
                }
                Ok(FALLBACK_USD_TO_EUR)
            }
        }
    }
}
