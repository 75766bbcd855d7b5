// src/domain/credentials/result.rs
use std::fmt;

/// Outcome of a single identifier or password check.
///
/// The message is empty exactly when the input was accepted, and the error
/// index is present exactly when it was rejected. Both fields are private so
/// that pairing cannot be broken from outside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ValidationResult {
    message: String,
    error_index: Option<usize>,
}

impl ValidationResult {
    /// Sentinel reported in place of an index for accepted input.
    pub const NO_ERROR: i64 = -1;

    #[must_use]
    pub const fn accepted() -> Self {
        Self {
            message: String::new(),
            error_index: None,
        }
    }

    /// Builds a rejection. An empty message would be indistinguishable from
    /// acceptance, so the reason must render to at least one character.
    #[must_use]
    pub fn rejected(reason: impl fmt::Display, error_index: usize) -> Self {
        let message = reason.to_string();
        debug_assert!(!message.is_empty(), "rejection without a message");
        Self {
            message,
            error_index: Some(error_index),
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error_index.is_none()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn error_index(&self) -> Option<usize> {
        self.error_index
    }

    /// Index as a signed offset, using [`Self::NO_ERROR`] for accepted input.
    #[must_use]
    pub fn error_index_or_sentinel(&self) -> i64 {
        self.error_index
            .and_then(|idx| i64::try_from(idx).ok())
            .unwrap_or(Self::NO_ERROR)
    }

    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_index {
            None => f.write_str("accepted"),
            Some(idx) => write!(f, "rejected at {idx}: {}", self.message),
        }
    }
}
