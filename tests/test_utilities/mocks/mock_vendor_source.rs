use async_trait::async_trait;
use bomsource::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock VendorSource that serves canned quotes keyed by part number
pub struct MockVendorSource {
    name: &'static str,
    currency: Currency,
    quotes: HashMap<String, VendorResult>,
    call_count: AtomicUsize,
}

impl MockVendorSource {
    pub fn new(name: &'static str, currency: Currency) -> Self {
        Self {
            name,
            currency,
            quotes: HashMap::new(),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn with_quote(mut self, part_number: &str, result: VendorResult) -> Self {
        self.quotes.insert(part_number.to_string(), result);
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VendorSource for MockVendorSource {
    fn vendor_name(&self) -> &'static str {
        self.name
    }

    fn quote_currency(&self) -> Currency {
        self.currency
    }

    async fn fetch(&self, part_number: &str, _quantity: u32) -> VendorResult {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.quotes
            .get(part_number)
            .copied()
            .unwrap_or_else(VendorResult::unavailable)
    }
}
