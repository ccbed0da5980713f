//! bomsource - BOM sourcing price tracker
//!
//! This library resolves component prices and availability across two
//! sourcing vendors (the Mouser pricing API and the JLCPCB product
//! pages) and aggregates the results into per-vendor and hybrid
//! best-price totals, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sourcing`): Pure domain models and services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bomsource::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<()> {
//! // Create adapters
//! let reporter = Arc::new(StderrProgressReporter::new());
//! let rates: Arc<dyn ExchangeRateSource> = Arc::new(CachingExchangeRateSource::new(
//!     OpenErApiClient::new()?,
//!     Arc::clone(&reporter),
//! ));
//! let mouser = Arc::new(MouserClient::new(Some("api-key".to_string()))?);
//! let jlcpcb = Arc::new(JlcpcbClient::new(rates)?);
//!
//! // Create use case and refresh a project
//! let store = JsonProjectStore::new("bom.json");
//! let mut project = store.load()?;
//! let use_case = RefreshPricesUseCase::new(mouser, jlcpcb, reporter);
//! let report = use_case.execute(project.components.clone()).await?;
//!
//! project.components = report.components;
//! store.save(&project)?;
//! println!("Hybrid total: {:.2} EUR", report.totals.hybrid_total);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod sourcing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::JsonProjectStore;
    pub use crate::adapters::outbound::network::{
        CachingExchangeRateSource, JlcpcbClient, MouserClient, OpenErApiClient,
        FALLBACK_USD_TO_EUR,
    };
    pub use crate::application::dto::{RefreshOutcome, RefreshReport};
    pub use crate::application::use_cases::RefreshPricesUseCase;
    pub use crate::ports::outbound::{
        ExchangeRateSource, ProgressReporter, ProjectStore, VendorSource,
    };
    pub use crate::shared::Result;
    pub use crate::sourcing::domain::{
        ComponentRecord, Currency, PartQuery, PriceTier, Project, TierQuote, VendorResult,
        UNKNOWN_STOCK,
    };
    pub use crate::sourcing::services::{
        AggregateTotals, Aggregator, PriceNormalizer, TierResolver,
    };
}
