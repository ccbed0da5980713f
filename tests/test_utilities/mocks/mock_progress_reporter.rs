use bomsource::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter capturing everything it is told
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(message.to_string());
    }

    fn report_progress(&self, delivered: usize, total: usize, message: Option<&str>) {
        self.record(match message {
            Some(msg) => format!("Progress: {}/{} - {}", delivered, total, msg),
            None => format!("Progress: {}/{}", delivered, total),
        });
    }

    fn report_error(&self, message: &str) {
        self.record(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.record(format!("Completed: {}", message));
    }
}
