use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel stock value marking "unknown / fetch failed".
///
/// Distinct from a genuine zero-stock part: a vendor that reports 0 units
/// was reached successfully, a vendor with UNKNOWN_STOCK was not.
pub const UNKNOWN_STOCK: i64 = -1;

/// Currency a vendor quotes its prices in.
///
/// The reference currency of the application is EUR; a vendor declaring
/// `Usd` has its totals converted through the exchange-rate source before
/// they enter a `VendorResult`. Making the conversion a declared property
/// of each vendor keeps the arithmetic explicit instead of an implicit
/// per-adapter omission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Reference currency - no conversion applied
    Eur,
    /// Converted to EUR via the exchange-rate source
    Usd,
}

/// A volume-discount step: minimum order quantity and the unit price
/// that applies from that quantity upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTier {
    pub min_quantity: u32,
    /// Unit price in the vendor's native currency
    pub unit_price: Decimal,
}

impl PriceTier {
    pub fn new(min_quantity: u32, unit_price: Decimal) -> Self {
        Self {
            min_quantity,
            unit_price,
        }
    }
}

/// Unit and total price selected from a tier schedule for a requested quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierQuote {
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

impl TierQuote {
    pub fn zero() -> Self {
        Self {
            unit_price: Decimal::ZERO,
            total_price: Decimal::ZERO,
        }
    }
}

/// Last-known stock and total price for one component at one vendor.
///
/// Produced exactly once per (component, vendor, refresh). The total is
/// always in the reference currency (EUR). `stock` is UNKNOWN_STOCK when
/// the fetch failed; callers must never treat the sentinel as real stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorResult {
    pub stock: i64,
    /// Total price for the requested quantity, in EUR
    pub total_price: Decimal,
}

impl VendorResult {
    pub fn new(stock: i64, total_price: Decimal) -> Self {
        Self { stock, total_price }
    }

    /// The uniform "fetch failed / vendor skipped" result
    pub fn unavailable() -> Self {
        Self {
            stock: UNKNOWN_STOCK,
            total_price: Decimal::ZERO,
        }
    }

    /// Whether the last fetch produced a real stock figure
    pub fn is_known(&self) -> bool {
        self.stock >= 0
    }

    /// Whether this vendor can cover the component's target quantity.
    /// The UNKNOWN_STOCK sentinel is never sufficient.
    pub fn has_sufficient_stock(&self, target_qty: u32) -> bool {
        self.stock >= i64::from(target_qty)
    }
}

impl Default for VendorResult {
    fn default() -> Self {
        Self::unavailable()
    }
}
