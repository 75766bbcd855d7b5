// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures that are not validation verdicts.
///
/// A rejected identifier or password is a [`ValidationResult`] and never an
/// error; this type only covers misuse of the domain API.
///
/// [`ValidationResult`]: crate::domain::credentials::ValidationResult
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("precondition violated: {0} input is absent")]
    MissingInput(&'static str),
}
