use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// StderrProgressReporter adapter rendering a refresh batch on stderr.
///
/// This adapter implements the ProgressReporter port with an indicatif
/// bar. The bar is created lazily on the first delivered result and torn
/// down on completion, so one reporter instance can serve consecutive
/// batches. All output goes to stderr; stdout carries only command
/// results.
pub struct StderrProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn batch_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        match slot.as_ref() {
            Some(bar) => bar.clone(),
            None => {
                let bar = ProgressBar::new(total as u64);
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} components - {msg}")
                        .expect("static progress template")
                        .progress_chars("=>-"),
                );
                *slot = Some(bar.clone());
                bar
            }
        }
    }

    fn teardown_bar(&self) {
        if let Some(bar) = self.bar.lock().unwrap_or_else(|e| e.into_inner()).take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, delivered: usize, total: usize, message: Option<&str>) {
        let bar = self.batch_bar(total);
        bar.set_position(delivered as u64);
        if let Some(msg) = message {
            bar.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        // The bar would garble interleaved stderr lines
        self.teardown_bar();
        eprintln!("⚠️  {}", message);
    }

    fn report_completion(&self, message: &str) {
        self.teardown_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}
