// src/domain/credentials/observer.rs
use super::identifier::IdentifierStep;
use super::password::PasswordStep;

/// Hook for step-by-step introspection of a scan.
///
/// Both methods default to doing nothing, so an observer only overrides the
/// scan it cares about. Observers live for one call and are never shared
/// between calls by the validators themselves.
pub trait ScanObserver {
    fn identifier_step(&mut self, _step: &IdentifierStep) {}

    fn password_step(&mut self, _step: &PasswordStep) {}
}

/// Observer used by the plain entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Emits every step as a `TRACE` level event.
///
/// Password steps carry the flag snapshot and the character class but never
/// the character itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn identifier_step(&mut self, step: &IdentifierStep) {
        tracing::trace!(
            position = step.position,
            character = %step.character,
            class = ?step.class,
            from = ?step.from,
            to = ?step.to,
            length = step.length,
            "identifier transition"
        );
    }

    fn password_step(&mut self, step: &PasswordStep) {
        tracing::trace!(
            position = step.position,
            class = ?step.class,
            flags = ?step.flags,
            "password character classified"
        );
    }
}

/// Collects steps in order; mostly useful in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub identifier_steps: Vec<IdentifierStep>,
    pub password_steps: Vec<PasswordStep>,
}

impl ScanObserver for RecordingObserver {
    fn identifier_step(&mut self, step: &IdentifierStep) {
        self.identifier_steps.push(*step);
    }

    fn password_step(&mut self, step: &PasswordStep) {
        self.password_steps.push(*step);
    }
}
