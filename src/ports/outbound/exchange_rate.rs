use crate::shared::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// ExchangeRateSource port for the USD -> EUR conversion rate.
///
/// The raw network adapter may fail; the caching decorator layered on top
/// of it absorbs failures (stale-or-fallback) so vendor adapters can call
/// it on every resolution without risking a blocked or failed refresh.
///
/// # Errors
/// Implementations return an error when the rate cannot be obtained at
/// all. The caching decorator only surfaces this if it has neither a
/// cached nor a fallback value, which by construction never happens.
#[async_trait]
pub trait ExchangeRateSource: Send + Sync {
    async fn usd_to_eur(&self) -> Result<Decimal>;
}
