use crate::sourcing::domain::{Currency, VendorResult};
use async_trait::async_trait;

/// VendorSource port for resolving price and availability at one vendor.
///
/// This port abstracts a remote sourcing data source (a pricing API, a
/// scraped product page). Implementations must be `Send + Sync` so refresh
/// workers can share them across tasks.
///
/// # Failure contract
/// `fetch` is infallible by design: every failure mode - network error,
/// non-2xx status, API-reported error, unparseable payload, missing part
/// number - degrades to `VendorResult::unavailable()`. A refresh batch can
/// therefore never be aborted by one misbehaving vendor.
#[async_trait]
pub trait VendorSource: Send + Sync {
    /// Human-readable vendor name for progress output
    fn vendor_name(&self) -> &'static str;

    /// Currency this vendor quotes in. Adapters declaring a non-reference
    /// currency convert their totals to EUR before returning them.
    fn quote_currency(&self) -> Currency;

    /// Resolves stock and total price (EUR) for a part at a quantity.
    ///
    /// # Arguments
    /// * `part_number` - the vendor-specific part identifier
    /// * `quantity` - the required total quantity (positive)
    async fn fetch(&self, part_number: &str, quantity: u32) -> VendorResult;
}
