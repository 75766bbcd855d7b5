use super::{
    CredentialCommandService,
    service::log_outcome,
};
use crate::{
    application::{
        dto::ValidationResultDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::credentials::{evaluate_password_with, validate_identifier_with},
};

/// `text` is the raw form value. `None` means the caller never supplied the
/// field, which is a misuse rather than a rejection.
pub struct ValidateIdentifierCommand {
    pub text: Option<String>,
}

pub struct EvaluatePasswordCommand {
    pub text: Option<String>,
}

impl CredentialCommandService {
    /// # Errors
    ///
    /// Returns [`ApplicationError::Domain`] when the identifier is absent.
    pub fn validate_identifier(
        &self,
        command: ValidateIdentifierCommand,
    ) -> ApplicationResult<ValidationResultDto> {
        let text = command
            .text
            .ok_or_else(|| ApplicationError::missing_input("identifier"))?;

        let mut observer = self.observer();
        let result = validate_identifier_with(&text, observer.as_mut());
        log_outcome("identifier", &result);

        Ok(result.into())
    }

    /// # Errors
    ///
    /// Returns [`ApplicationError::Domain`] when the password is absent.
    pub fn evaluate_password(
        &self,
        command: EvaluatePasswordCommand,
    ) -> ApplicationResult<ValidationResultDto> {
        let text = command
            .text
            .ok_or_else(|| ApplicationError::missing_input("password"))?;

        let mut observer = self.observer();
        let result = evaluate_password_with(&text, observer.as_mut());
        log_outcome("password", &result);

        Ok(result.into())
    }
}
