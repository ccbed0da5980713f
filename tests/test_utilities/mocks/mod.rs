/// Mock implementations for testing
mod mock_exchange_rate_source;
mod mock_progress_reporter;
mod mock_vendor_source;

pub use mock_exchange_rate_source::MockExchangeRateSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_vendor_source::MockVendorSource;
