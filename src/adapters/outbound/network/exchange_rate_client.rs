use crate::ports::outbound::ExchangeRateSource;
use crate::shared::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const LATEST_USD_RATES_URL: &str = "https://open.er-api.com/v6/latest/USD";

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, Decimal>,
}

/// OpenErApiClient adapter for fetching the current USD -> EUR rate.
///
/// This adapter implements the ExchangeRateSource port against the free
/// open.er-api.com latest-rates endpoint. It is the raw source: errors
/// propagate, and the caching decorator layered above decides between
/// stale value and static fallback.
pub struct OpenErApiClient {
    client: reqwest::Client,
    url: String,
}

impl OpenErApiClient {
    /// Creates a new exchange-rate client with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .user_agent(format!("bomsource/{}", version))
            .build()?;

        Ok(Self {
            client,
            url: LATEST_USD_RATES_URL.to_string(),
        })
    }
}

#[async_trait]
impl ExchangeRateSource for OpenErApiClient {
    async fn usd_to_eur(&self) -> Result<Decimal> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Exchange rate API returned status code {}",
                response.status()
            );
        }

        let body: LatestRatesResponse = response.json().await?;
        body.rates
            .get("EUR")
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Exchange rate response has no EUR rate"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_client_creation() {
        assert!(OpenErApiClient::new().is_ok());
    }

    #[test]
    fn test_rates_response_parsing() {
        let json = r#"{"result":"success","base_code":"USD","rates":{"USD":1,"EUR":0.9234,"GBP":0.79}}"#;
        let parsed: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.rates.get("EUR").copied(), Some(dec!(0.9234)));
    }

    #[test]
    fn test_rates_response_missing_eur() {
        let json = r#"{"rates":{"GBP":0.79}}"#;
        let parsed: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.rates.get("EUR").is_none());
    }
}
