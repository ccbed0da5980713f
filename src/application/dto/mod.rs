/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod refresh_outcome;
mod refresh_report;

pub use refresh_outcome::RefreshOutcome;
pub use refresh_report::RefreshReport;
