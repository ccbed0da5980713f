use crate::sourcing::domain::VendorResult;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One delivered refresh result, keyed by component identity.
///
/// Workers produce exactly one outcome per component and deliver it over
/// the results channel; delivery order is unrelated to submission order,
/// so the coordinator routes each outcome by `component_id` alone.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub component_id: Uuid,
    pub mouser: VendorResult,
    pub jlcpcb: VendorResult,
    pub refreshed_at: DateTime<Utc>,
}
