use super::{CredentialCommandService, service::log_outcome};
use crate::{
    application::{
        dto::CredentialReviewDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::credentials::review_credentials_with,
};

pub struct ReviewCredentialsCommand {
    pub identifier: Option<String>,
    pub password: Option<String>,
}

impl CredentialCommandService {
    /// Runs both checks for an account-setup submission.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Domain`] when either field is absent.
    pub fn review(&self, command: ReviewCredentialsCommand) -> ApplicationResult<CredentialReviewDto> {
        let identifier = command
            .identifier
            .ok_or_else(|| ApplicationError::missing_input("identifier"))?;
        let password = command
            .password
            .ok_or_else(|| ApplicationError::missing_input("password"))?;

        let mut observer = self.observer();
        let review = review_credentials_with(&identifier, &password, observer.as_mut());
        log_outcome("identifier", &review.identifier);
        log_outcome("password", &review.password);

        Ok(review.into())
    }
}
