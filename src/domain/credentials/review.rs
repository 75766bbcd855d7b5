// src/domain/credentials/review.rs
use super::identifier::validate_identifier_with;
use super::observer::{NoopObserver, ScanObserver};
use super::password::evaluate_password_with;
use super::result::ValidationResult;

/// Both verdicts for an account-setup submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialReview {
    pub identifier: ValidationResult,
    pub password: ValidationResult,
}

impl CredentialReview {
    /// The reason to show the user, if any. An identifier problem hides a
    /// password problem.
    #[must_use]
    pub fn rejection(&self) -> Option<&str> {
        [&self.identifier, &self.password]
            .into_iter()
            .find(|result| !result.is_valid())
            .map(ValidationResult::message)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.identifier.is_valid() && self.password.is_valid()
    }
}

#[must_use]
pub fn review_credentials(identifier: &str, password: &str) -> CredentialReview {
    review_credentials_with(identifier, password, &mut NoopObserver)
}

pub fn review_credentials_with<O: ScanObserver + ?Sized>(
    identifier: &str,
    password: &str,
    observer: &mut O,
) -> CredentialReview {
    CredentialReview {
        identifier: validate_identifier_with(identifier, &mut *observer),
        password: evaluate_password_with(password, observer),
    }
}
