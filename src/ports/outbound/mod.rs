/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (vendor APIs, exchange-rate
/// service, project storage, console).
pub mod exchange_rate;
pub mod progress_reporter;
pub mod project_store;
pub mod vendor_source;

pub use exchange_rate::ExchangeRateSource;
pub use progress_reporter::ProgressReporter;
pub use project_store::ProjectStore;
pub use vendor_source::VendorSource;
