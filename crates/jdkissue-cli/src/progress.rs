// Rust guideline compliant 2026-02-09

//! Progress reporting for the release-note formatter.

/// Progress reporter that writes periodic `label: current / total` lines
/// to stderr.
pub struct ProgressReporter {
    label: String,
    interval: usize,
    enabled: bool,
}

impl ProgressReporter {
    /// Creates a new progress reporter.
    ///
    /// # Arguments
    ///
    /// * `label` - Label to include in progress messages
    /// * `interval` - Report every N items (minimum 1)
    /// * `enabled` - Whether anything is printed at all
    pub fn new(label: &str, interval: usize, enabled: bool) -> Self {
        Self {
            label: label.to_string(),
            interval: interval.max(1),
            enabled,
        }
    }

    /// Returns true if `current` falls on a reporting boundary.
    ///
    /// The last item is always reported.
    pub fn should_report(&self, current: usize, total: usize) -> bool {
        self.enabled && (current % self.interval == 0 || current == total)
    }

    /// Reports progress at the configured interval.
    ///
    /// # Arguments
    ///
    /// * `current` - Items processed so far (1-based)
    /// * `total` - Items in the run
    pub fn report(&self, current: usize, total: usize) {
        if self.should_report(current, total) {
            eprintln!("{}: {} / {}", self.label, current, total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_on_interval_and_last_item() {
        let reporter = ProgressReporter::new("Formatting", 10, true);
        assert!(!reporter.should_report(3, 25));
        assert!(reporter.should_report(10, 25));
        assert!(reporter.should_report(25, 25));
    }

    #[test]
    fn test_disabled_reporter_is_silent() {
        let reporter = ProgressReporter::new("Formatting", 0, false);
        assert!(!reporter.should_report(1, 1));
    }
}
