// src/domain/credentials/mod.rs
pub mod identifier;
pub mod observer;
pub mod password;
pub mod result;
pub mod review;

pub use identifier::{
    CharClass, IdentifierRejection, IdentifierState, IdentifierStep, MAX_IDENTIFIER_LENGTH,
    MIN_IDENTIFIER_LENGTH, validate_identifier, validate_identifier_with,
};
pub use observer::{NoopObserver, RecordingObserver, ScanObserver, TracingObserver};
pub use password::{
    MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PasswordClass, PasswordFlags, PasswordRejection,
    PasswordRequirement, PasswordStep, SPECIAL_CHARACTERS, evaluate_password,
    evaluate_password_with,
};
pub use result::ValidationResult;
pub use review::{CredentialReview, review_credentials, review_credentials_with};
