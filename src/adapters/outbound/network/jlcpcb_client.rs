use crate::adapters::outbound::network::FALLBACK_USD_TO_EUR;
use crate::ports::outbound::{ExchangeRateSource, VendorSource};
use crate::shared::Result;
use crate::sourcing::domain::{Currency, PriceTier, VendorResult};
use crate::sourcing::services::{PriceNormalizer, TierResolver};
use async_trait::async_trait;
use regex::Regex;
use rust_decimal::Decimal;
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Duration;

const PART_DETAIL_URL: &str = "https://jlcpcb.com/partdetail";

/// A plain browser user agent gets past the basic bot checks on the
/// product pages; anything beyond that is an accepted external risk.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// JlcpcbClient adapter scraping the JLCPCB part-detail page.
///
/// This adapter implements the VendorSource port against an undocumented
/// HTML page: stock and price tiers are located heuristically and every
/// missing element or malformed number degrades its field to the
/// zero/unknown default. The page quotes USD, so the adapter declares USD
/// and converts its totals to EUR through the exchange-rate source.
pub struct JlcpcbClient {
    client: reqwest::Client,
    rates: Arc<dyn ExchangeRateSource>,
    base_url: String,
    /// "100+" style tier minimums, thousands separators allowed
    tier_quantity: Regex,
    /// "$0.057" style unit prices
    tier_price: Regex,
}

impl JlcpcbClient {
    pub fn new(rates: Arc<dyn ExchangeRateSource>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(BROWSER_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            rates,
            base_url: PART_DETAIL_URL.to_string(),
            tier_quantity: Regex::new(r"(\d{1,3}(?:,\d{3})*)\+")?,
            tier_price: Regex::new(r"\$(\d+\.\d+)")?,
        })
    }

    async fn get_page(&self, part_code: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, urlencoding::encode(part_code));
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("JLCPCB returned status code {}", response.status());
        }

        Ok(response.text().await?)
    }

    /// Extracts (stock, USD total) from the product page markup.
    /// Parsing is best effort: unknown layout yields stock 0 and price 0.
    fn parse_product_page(&self, html: &str, quantity: u32) -> (i64, Decimal) {
        let document = Html::parse_document(html);

        let stock = Self::parse_stock(&document);
        let tiers = self.parse_tiers(&document);
        let quote = TierResolver::resolve(&tiers, quantity);

        (stock, quote.total_price)
    }

    /// The stock figure lives in a bold headline element; when the class
    /// names shift, fall back to any element labelled with "stock".
    fn parse_stock(document: &Html) -> i64 {
        let headline = Selector::parse("div.text-16.font-bold").expect("static selector");
        if let Some(element) = document.select(&headline).next() {
            let text = element.text().collect::<String>();
            if let Some(stock) = Self::stock_from_text(&text) {
                return stock;
            }
        }

        let any_div = Selector::parse("div").expect("static selector");
        document
            .select(&any_div)
            .map(|element| element.text().collect::<String>())
            .filter(|text| text.to_lowercase().contains("stock") && text.len() < 64)
            .find_map(|text| Self::stock_from_text(&text))
            .unwrap_or(0)
    }

    fn stock_from_text(text: &str) -> Option<i64> {
        // "Stock: 12,000" keeps only what follows the label
        let figure = match text.split_once(':') {
            Some((_, rest)) => rest,
            None => text,
        };
        PriceNormalizer::extract_digits(figure)
    }

    /// Price tiers are "(quantity)+ ... $price" fragments inside the cost
    /// container; the whole document works as the fallback haystack.
    fn parse_tiers(&self, document: &Html) -> Vec<PriceTier> {
        let cost_container =
            Selector::parse(r#"div[class*="py-10"][class*="px-30"]"#).expect("static selector");

        let haystack = document
            .select(&cost_container)
            .next()
            .map(|element| element.text().collect::<String>())
            .unwrap_or_else(|| document.root_element().text().collect::<String>());

        let quantities: Vec<u32> = self
            .tier_quantity
            .captures_iter(&haystack)
            .filter_map(|cap| cap[1].replace(',', "").parse().ok())
            .collect();
        let prices: Vec<Decimal> = self
            .tier_price
            .captures_iter(&haystack)
            .map(|cap| PriceNormalizer::normalize(&cap[1]))
            .collect();

        quantities
            .into_iter()
            .zip(prices)
            .map(|(min_quantity, unit_price)| PriceTier::new(min_quantity, unit_price))
            .collect()
    }

    /// Converts a USD total to EUR. The rate source is consulted even for
    /// a zero total so a caching decorator warms its cache (and surfaces
    /// its fallback warning) on the first fetch of a batch.
    async fn to_eur(&self, usd_total: Decimal) -> Decimal {
        // The caching decorator absorbs fetch failures; the fallback
        // here only covers a bare client wired without it.
        let rate = self.rates.usd_to_eur().await.unwrap_or(FALLBACK_USD_TO_EUR);
        usd_total * rate
    }
}

#[async_trait]
impl VendorSource for JlcpcbClient {
    fn vendor_name(&self) -> &'static str {
        "JLCPCB"
    }

    fn quote_currency(&self) -> Currency {
        Currency::Usd
    }

    async fn fetch(&self, part_number: &str, quantity: u32) -> VendorResult {
        if part_number.trim().is_empty() {
            return VendorResult::unavailable();
        }

        let html = match self.get_page(part_number).await {
            Ok(html) => html,
            Err(_) => return VendorResult::unavailable(),
        };

        let (stock, usd_total) = self.parse_product_page(&html, quantity);
        VendorResult::new(stock, self.to_eur(usd_total).await)
    }
}
