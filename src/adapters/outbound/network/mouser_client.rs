use crate::ports::outbound::VendorSource;
use crate::shared::Result;
use crate::sourcing::domain::{Currency, PriceTier, VendorResult};
use crate::sourcing::services::{PriceNormalizer, TierResolver};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const SEARCH_URL: &str = "https://api.mouser.com/api/v1/search/keyword";

/// How many candidate parts to request per keyword search
const SEARCH_RECORDS: u32 = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResponse {
    #[serde(default)]
    errors: Vec<serde_json::Value>,
    search_results: Option<SearchResults>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResults {
    #[serde(default)]
    parts: Vec<MouserPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MouserPart {
    mouser_part_number: Option<String>,
    /// Free-form availability text such as "1,500 In Stock"
    availability: Option<serde_json::Value>,
    factory_stock: Option<serde_json::Value>,
    #[serde(default)]
    price_breaks: Vec<MouserPriceBreak>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MouserPriceBreak {
    quantity: Option<u32>,
    /// Currency-formatted string such as "0,384 €"
    price: Option<String>,
}

/// MouserClient adapter for the Mouser keyword-search pricing API.
///
/// This adapter implements the VendorSource port against the structured
/// distributor API. Prices in the search response are already quoted in
/// the reference currency, so the adapter declares EUR and applies no
/// conversion.
///
/// # Failure contract
/// A missing API key short-circuits to the unavailable sentinel without
/// any network traffic; so does every transport error, non-2xx status,
/// API-reported error and empty result set.
pub struct MouserClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl MouserClient {
    /// Creates a new Mouser client. `api_key` is configuration supplied
    /// externally; None disables the adapter.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(format!("bomsource/{}", version))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: SEARCH_URL.to_string(),
        })
    }

    async fn search(&self, part_number: &str, api_key: &str) -> Result<SearchResponse> {
        let url = format!("{}?apiKey={}", self.base_url, urlencoding::encode(api_key));
        let body = json!({
            "SearchByKeywordRequest": {
                "keyword": part_number,
                "records": SEARCH_RECORDS,
                "startingRecord": 0,
                "searchOptions": "None"
            }
        });

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Mouser API returned status code {}", response.status());
        }

        Ok(response.json().await?)
    }

    /// Extracts (stock, EUR total) from a search response, or None when
    /// the response carries errors or no parts.
    fn quote_from_response(
        response: SearchResponse,
        part_number: &str,
        quantity: u32,
    ) -> Option<VendorResult> {
        if !response.errors.is_empty() {
            return None;
        }

        let parts = response.search_results?.parts;
        if parts.is_empty() {
            return None;
        }

        // Prefer the candidate whose part number contains the query;
        // keyword search can put close-but-wrong matches first.
        let query = part_number.to_lowercase();
        let part = parts
            .iter()
            .find(|p| {
                p.mouser_part_number
                    .as_deref()
                    .map(|pn| pn.to_lowercase().contains(&query))
                    .unwrap_or(false)
            })
            .unwrap_or(&parts[0]);

        let stock = Self::parse_stock(part);

        let tiers: Vec<PriceTier> = part
            .price_breaks
            .iter()
            .map(|pb| {
                PriceTier::new(
                    pb.quantity.unwrap_or(1),
                    PriceNormalizer::normalize(pb.price.as_deref().unwrap_or_default()),
                )
            })
            .collect();

        let quote = TierResolver::resolve(&tiers, quantity);
        Some(VendorResult::new(stock, quote.total_price))
    }

    /// Stock from the availability field. Factory stock is consulted only
    /// when availability is missing, null, or the literal placeholder
    /// "None"; other digit-free text like "Out of Stock" means zero.
    /// Only the digit characters count; unit text like "In Stock" is noise.
    fn parse_stock(part: &MouserPart) -> i64 {
        let availability = match &part.availability {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => {
                let text = stringify_field(value);
                if text.trim() == "None" {
                    None
                } else {
                    Some(text)
                }
            }
        };

        match availability {
            Some(text) => PriceNormalizer::extract_digits(&text).unwrap_or(0),
            None => part
                .factory_stock
                .as_ref()
                .map(stringify_field)
                .and_then(|text| PriceNormalizer::extract_digits(&text))
                .unwrap_or(0),
        }
    }
}

/// Availability fields arrive as strings or bare numbers depending on
/// the part; flatten either to text for digit extraction.
fn stringify_field(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl VendorSource for MouserClient {
    fn vendor_name(&self) -> &'static str {
        "Mouser"
    }

    fn quote_currency(&self) -> Currency {
        Currency::Eur
    }

    async fn fetch(&self, part_number: &str, quantity: u32) -> VendorResult {
        let Some(api_key) = self.api_key.clone() else {
            return VendorResult::unavailable();
        };
        if part_number.trim().is_empty() {
            return VendorResult::unavailable();
        }

        match self.search(part_number, &api_key).await {
            Ok(response) => Self::quote_from_response(response, part_number, quantity)
                .unwrap_or_else(VendorResult::unavailable),
            Err(_) => VendorResult::unavailable(),
        }
    }
}
