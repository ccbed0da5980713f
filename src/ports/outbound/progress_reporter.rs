use std::sync::Arc;

/// ProgressReporter port for user feedback during a refresh batch.
///
/// A refresh fires one job per component and results arrive out of
/// order, so the reporter is driven by delivery count, not by component
/// position. Implementations write to stderr (or swallow everything in
/// tests); stdout stays reserved for command output.
pub trait ProgressReporter {
    /// Reports a free-form status message
    fn report(&self, message: &str);

    /// Reports that `delivered` of `total` refresh results have arrived
    fn report_progress(&self, delivered: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem without aborting the batch
    fn report_error(&self, message: &str);

    /// Reports the end of a batch; any progress display is torn down
    /// so a subsequent batch starts clean
    fn report_completion(&self, message: &str);
}

/// One reporter instance is shared between the refresh use case and the
/// network adapters that surface warnings, so the port is usable through
/// an Arc as well.
impl<T: ProgressReporter + ?Sized> ProgressReporter for Arc<T> {
    fn report(&self, message: &str) {
        (**self).report(message);
    }

    fn report_progress(&self, delivered: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(delivered, total, message);
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message);
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message);
    }
}
