use crate::sourcing::domain::ComponentRecord;
use crate::sourcing::services::AggregateTotals;

/// Final state of a refresh batch: every component with its applied
/// vendor results, plus the totals recomputed from that snapshot.
#[derive(Debug, Clone)]
pub struct RefreshReport {
    pub components: Vec<ComponentRecord>,
    pub totals: AggregateTotals,
}
