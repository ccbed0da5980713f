/// Domain services for price resolution and aggregation
mod aggregator;
mod price_normalizer;
mod tier_resolver;

pub use aggregator::{AggregateTotals, Aggregator};
pub use price_normalizer::PriceNormalizer;
pub use tier_resolver::TierResolver;
