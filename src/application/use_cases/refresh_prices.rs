use crate::application::dto::{RefreshOutcome, RefreshReport};
use crate::ports::outbound::{ProgressReporter, VendorSource};
use crate::shared::Result;
use crate::sourcing::domain::{ComponentRecord, Currency, PartQuery, VendorResult};
use crate::sourcing::services::Aggregator;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::mpsc;

/// RefreshPricesUseCase - concurrent price/availability refresh
///
/// Runs one resolution job per component against both vendor sources and
/// applies the delivered results as they complete. The state machine per
/// component is Pending (job spawned) -> Running (vendor fetches in
/// flight) -> Delivered (outcome applied); there is no retry state, a
/// failed vendor fetch delivers the unavailable sentinel as data.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
///
/// # Concurrency
/// Workers only perform vendor fetches; every `ComponentRecord` mutation
/// happens in the coordinator loop after an outcome is received, so no
/// per-record locking is needed. Totals are recomputed idempotently from
/// the full snapshot after each delivery.
pub struct RefreshPricesUseCase<PR> {
    mouser: Arc<dyn VendorSource>,
    jlcpcb: Arc<dyn VendorSource>,
    progress_reporter: PR,
}

impl<PR: ProgressReporter> RefreshPricesUseCase<PR> {
    /// Creates a new RefreshPricesUseCase with injected vendor sources
    pub fn new(
        mouser: Arc<dyn VendorSource>,
        jlcpcb: Arc<dyn VendorSource>,
        progress_reporter: PR,
    ) -> Self {
        Self {
            mouser,
            jlcpcb,
            progress_reporter,
        }
    }

    /// Refreshes every component of the batch and returns the final
    /// snapshot with recomputed totals.
    ///
    /// Jobs complete in arbitrary order; each outcome is routed to its
    /// own component by id. Every job delivers exactly once, so the batch
    /// always terminates within the vendor adapters' timeouts.
    pub async fn execute(&self, components: Vec<ComponentRecord>) -> Result<RefreshReport> {
        let total = components.len();
        if total == 0 {
            self.progress_reporter
                .report("ℹ️  No components to refresh");
            return Ok(RefreshReport {
                totals: Aggregator::compute_totals(&components),
                components,
            });
        }

        self.progress_reporter.report(&format!(
            "🔄 Refreshing {} component(s) via {} and {}...",
            total,
            self.mouser.vendor_name(),
            self.jlcpcb.vendor_name()
        ));
        for source in [&self.mouser, &self.jlcpcb] {
            if source.quote_currency() == Currency::Usd {
                self.progress_reporter.report(&format!(
                    "💱 {} quotes USD, totals are converted to EUR",
                    source.vendor_name()
                ));
            }
        }

        // Channel sized to the batch: workers never block on delivery
        let (tx, mut rx) = mpsc::channel::<RefreshOutcome>(total);

        for component in &components {
            let tx = tx.clone();
            let mouser = Arc::clone(&self.mouser);
            let jlcpcb = Arc::clone(&self.jlcpcb);
            let component_id = component.id;
            let mouser_query = component.mouser_query();
            let jlcpcb_query = component.jlcpcb_query();

            tokio::spawn(async move {
                // The two vendors are independent, fetch them in parallel
                let (mouser_result, jlcpcb_result) = tokio::join!(
                    resolve_query(mouser, mouser_query),
                    resolve_query(jlcpcb, jlcpcb_query),
                );

                // Receiver outliving the batch is guaranteed by the
                // coordinator loop below; a dropped receiver only means
                // the caller gave up on the whole refresh.
                let _ = tx
                    .send(RefreshOutcome {
                        component_id,
                        mouser: mouser_result,
                        jlcpcb: jlcpcb_result,
                        refreshed_at: Utc::now(),
                    })
                    .await;
            });
        }
        drop(tx);

        let mut components = components;
        let mut totals = Aggregator::compute_totals(&components);
        let mut delivered = 0usize;

        while let Some(outcome) = rx.recv().await {
            if let Some(component) = components
                .iter_mut()
                .find(|c| c.id == outcome.component_id)
            {
                component.apply_refresh(outcome.mouser, outcome.jlcpcb, outcome.refreshed_at);
            }

            delivered += 1;
            totals = Aggregator::compute_totals(&components);
            self.progress_reporter.report_progress(
                delivered,
                total,
                Some("Fetching vendor prices..."),
            );
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Refresh complete: {} of {} component(s) updated",
            delivered, total
        ));

        Ok(RefreshReport { components, totals })
    }
}

/// Runs one vendor query, skipping the network entirely when the
/// component has no part number for this vendor.
async fn resolve_query(source: Arc<dyn VendorSource>, query: PartQuery) -> VendorResult {
    if !query.is_actionable() {
        return VendorResult::unavailable();
    }
    source
        .fetch(query.part_number.as_deref().unwrap_or_default(), query.quantity)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock vendor source serving canned results keyed by part number
    struct MockVendorSource {
        name: &'static str,
        results: HashMap<String, VendorResult>,
        call_count: AtomicUsize,
    }

    impl MockVendorSource {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                results: HashMap::new(),
                call_count: AtomicUsize::new(0),
            }
        }

        fn with_result(mut self, part_number: &str, result: VendorResult) -> Self {
            self.results.insert(part_number.to_string(), result);
            self
        }
    }

    #[async_trait]
    impl VendorSource for MockVendorSource {
        fn vendor_name(&self) -> &'static str {
            self.name
        }

        fn quote_currency(&self) -> Currency {
            Currency::Eur
        }

        async fn fetch(&self, part_number: &str, _quantity: u32) -> VendorResult {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.results
                .get(part_number)
                .copied()
                .unwrap_or_else(VendorResult::unavailable)
        }
    }

    /// Reporter that swallows everything (stderr stays quiet in tests)
    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn component(mouser_pn: Option<&str>, jlcpcb_pn: Option<&str>, qty: u32) -> ComponentRecord {
        ComponentRecord::new(
            mouser_pn.map(String::from),
            jlcpcb_pn.map(String::from),
            String::new(),
            String::new(),
            qty,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_refresh_applies_results_by_component_identity() {
        let mouser = Arc::new(
            MockVendorSource::new("Mouser")
                .with_result("M1", VendorResult::new(100, dec!(4.00)))
                .with_result("M2", VendorResult::new(5, dec!(9.00))),
        );
        let jlcpcb = Arc::new(
            MockVendorSource::new("JLCPCB")
                .with_result("C1", VendorResult::new(50, dec!(3.00))),
        );

        let batch = vec![
            component(Some("M1"), Some("C1"), 10),
            component(Some("M2"), None, 10),
        ];
        let ids: Vec<_> = batch.iter().map(|c| c.id).collect();

        let use_case = RefreshPricesUseCase::new(mouser, jlcpcb, SilentReporter);
        let report = use_case.execute(batch).await.unwrap();

        let first = report.components.iter().find(|c| c.id == ids[0]).unwrap();
        assert_eq!(first.mouser, VendorResult::new(100, dec!(4.00)));
        assert_eq!(first.jlcpcb, VendorResult::new(50, dec!(3.00)));
        assert!(first.refreshed_at.is_some());

        let second = report.components.iter().find(|c| c.id == ids[1]).unwrap();
        assert_eq!(second.mouser, VendorResult::new(5, dec!(9.00)));
        // No JLCPCB part number: vendor skipped, sentinel applied
        assert_eq!(second.jlcpcb, VendorResult::unavailable());
    }

    #[tokio::test]
    async fn test_refresh_skips_vendors_without_part_numbers() {
        let mouser = Arc::new(MockVendorSource::new("Mouser"));
        let jlcpcb = Arc::new(MockVendorSource::new("JLCPCB"));
        let mouser_calls = Arc::clone(&mouser);
        let jlcpcb_calls = Arc::clone(&jlcpcb);

        let batch = vec![component(None, Some("C1"), 10)];
        let use_case = RefreshPricesUseCase::new(mouser, jlcpcb, SilentReporter);
        use_case.execute(batch).await.unwrap();

        assert_eq!(mouser_calls.call_count.load(Ordering::SeqCst), 0);
        assert_eq!(jlcpcb_calls.call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_totals_reflect_final_snapshot() {
        let mouser = Arc::new(
            MockVendorSource::new("Mouser")
                .with_result("M1", VendorResult::new(100, dec!(4.00))),
        );
        let jlcpcb = Arc::new(
            MockVendorSource::new("JLCPCB")
                .with_result("C1", VendorResult::new(50, dec!(3.00))),
        );

        let batch = vec![component(Some("M1"), Some("C1"), 10)];
        let use_case = RefreshPricesUseCase::new(mouser, jlcpcb, SilentReporter);
        let report = use_case.execute(batch).await.unwrap();

        assert_eq!(report.totals.mouser_total, dec!(4.00));
        assert_eq!(report.totals.jlcpcb_total, dec!(3.00));
        assert_eq!(report.totals.hybrid_total, dec!(3.00));
    }

    #[tokio::test]
    async fn test_refresh_empty_batch() {
        let use_case = RefreshPricesUseCase::new(
            Arc::new(MockVendorSource::new("Mouser")),
            Arc::new(MockVendorSource::new("JLCPCB")),
            SilentReporter,
        );
        let report = use_case.execute(vec![]).await.unwrap();
        assert!(report.components.is_empty());
    }
}
