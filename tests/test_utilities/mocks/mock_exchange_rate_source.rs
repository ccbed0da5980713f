use async_trait::async_trait;
use bomsource::prelude::*;
use rust_decimal::Decimal;

/// Mock ExchangeRateSource returning a fixed USD to EUR rate
pub struct MockExchangeRateSource {
    rate: Decimal,
    should_fail: bool,
}

impl MockExchangeRateSource {
    pub fn new(rate: Decimal) -> Self {
        Self {
            rate,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            rate: Decimal::ZERO,
            should_fail: true,
        }
    }
}

#[async_trait]
impl ExchangeRateSource for MockExchangeRateSource {
    async fn usd_to_eur(&self) -> Result<Decimal> {
        if self.should_fail {
            anyhow::bail!("Mock exchange rate failure");
        }
        Ok(self.rate)
    }
}
