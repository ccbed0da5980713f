use crate::sourcing::domain::{PriceTier, TierQuote};
use rust_decimal::Decimal;

/// TierResolver selects the applicable unit price from a volume-discount
/// schedule and computes the total for a requested quantity.
///
/// Pure and network-free: vendor adapters feed it tiers parsed from their
/// respective responses.
pub struct TierResolver;

impl TierResolver {
    /// Resolves the unit and total price for the requested quantity.
    ///
    /// Tiers are sorted ascending by minimum quantity (stable, so among
    /// equal minimums the last one listed wins). The walk starts from the
    /// lowest tier's price - the base price when the quantity is below
    /// every minimum - and updates on each tier whose minimum is covered
    /// by the requested quantity, stopping at the first that is not.
    ///
    /// An empty schedule resolves to zero; stock may still be known in
    /// that case, so the caller reports price 0 rather than failing.
    pub fn resolve(tiers: &[PriceTier], quantity: u32) -> TierQuote {
        if tiers.is_empty() {
            return TierQuote::zero();
        }

        let mut sorted = tiers.to_vec();
        sorted.sort_by_key(|tier| tier.min_quantity);

        let mut unit_price = sorted[0].unit_price;
        for tier in &sorted {
            if tier.min_quantity <= quantity {
                unit_price = tier.unit_price;
            } else {
                break;
            }
        }

        TierQuote {
            unit_price,
            total_price: unit_price * Decimal::from(quantity),
        }
    }
}
