/// Network adapters for vendor and exchange-rate access
mod caching_exchange_rate;
mod exchange_rate_client;
mod jlcpcb_client;
mod mouser_client;

pub use caching_exchange_rate::{CachingExchangeRateSource, FALLBACK_USD_TO_EUR};
pub use exchange_rate_client::OpenErApiClient;
pub use jlcpcb_client::JlcpcbClient;
pub use mouser_client::MouserClient;
