use crate::domain::credentials::{NoopObserver, ScanObserver, TracingObserver, ValidationResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialCommandService {
    trace_scans: bool,
}

impl CredentialCommandService {
    #[must_use]
    pub const fn new(trace_scans: bool) -> Self {
        Self { trace_scans }
    }

    #[must_use]
    pub const fn traces_scans(&self) -> bool {
        self.trace_scans
    }

    /// A fresh observer per call; nothing is shared between requests.
    pub(super) fn observer(&self) -> Box<dyn ScanObserver> {
        if self.trace_scans {
            Box::new(TracingObserver)
        } else {
            Box::new(NoopObserver)
        }
    }
}

pub(super) fn log_outcome(subject: &'static str, result: &ValidationResult) {
    match result.error_index() {
        None => tracing::debug!(subject, "credential accepted"),
        Some(error_index) => tracing::info!(subject, error_index, "credential rejected"),
    }
}
