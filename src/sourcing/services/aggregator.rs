use crate::sourcing::domain::ComponentRecord;
use rust_decimal::Decimal;

/// Project-wide sourcing totals, derived from the current component
/// snapshot and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateTotals {
    /// Sum of Mouser prices over components Mouser can fully stock
    pub mouser_total: Decimal,
    /// Sum of JLCPCB prices over components JLCPCB can fully stock
    pub jlcpcb_total: Decimal,
    /// Sum of the cheaper sufficient-stock vendor per component
    pub hybrid_total: Decimal,
}

/// Aggregator combines per-component vendor results into per-vendor and
/// hybrid best-price totals.
pub struct Aggregator;

impl Aggregator {
    /// Computes totals over the current component snapshot.
    ///
    /// A vendor participates for a component only when its last-known
    /// stock covers the target quantity; the UNKNOWN_STOCK sentinel never
    /// does. A component no sufficient-stock vendor can cover contributes
    /// zero everywhere. Pure and safe to recompute after every delivered
    /// refresh result.
    pub fn compute_totals(components: &[ComponentRecord]) -> AggregateTotals {
        let mut totals = AggregateTotals::default();

        for component in components {
            let mouser_ok = component.mouser.has_sufficient_stock(component.target_qty);
            let jlcpcb_ok = component.jlcpcb.has_sufficient_stock(component.target_qty);

            if mouser_ok {
                totals.mouser_total += component.mouser.total_price;
            }
            if jlcpcb_ok {
                totals.jlcpcb_total += component.jlcpcb.total_price;
            }

            totals.hybrid_total += match (mouser_ok, jlcpcb_ok) {
                (true, true) => component
                    .mouser
                    .total_price
                    .min(component.jlcpcb.total_price),
                (true, false) => component.mouser.total_price,
                (false, true) => component.jlcpcb.total_price,
                (false, false) => Decimal::ZERO,
            };
        }

        totals
    }
}
