/// Domain models for BOM sourcing
mod component;
mod price;

pub use component::{ComponentRecord, PartQuery, Project};
pub use price::{Currency, PriceTier, TierQuote, VendorResult, UNKNOWN_STOCK};
