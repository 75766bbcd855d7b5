mod review;
mod service;
mod validate;

pub use review::ReviewCredentialsCommand;
pub use service::CredentialCommandService;
pub use validate::{EvaluatePasswordCommand, ValidateIdentifierCommand};
