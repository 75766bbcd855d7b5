// src/application/dto/credentials.rs
use crate::domain::credentials::{CredentialReview, ValidationResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationResultDto {
    pub valid: bool,
    /// Empty when `valid` is true; otherwise shown to the user verbatim.
    pub message: String,
    /// Character offset of the failure, `-1` when valid.
    pub error_index: i64,
}

impl From<ValidationResult> for ValidationResultDto {
    fn from(result: ValidationResult) -> Self {
        let error_index = result.error_index_or_sentinel();
        Self {
            valid: result.is_valid(),
            message: result.into_message(),
            error_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CredentialReviewDto {
    pub identifier: ValidationResultDto,
    pub password: ValidationResultDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
}

impl From<CredentialReview> for CredentialReviewDto {
    fn from(review: CredentialReview) -> Self {
        let rejection = review.rejection().map(str::to_owned);
        Self {
            identifier: review.identifier.into(),
            password: review.password.into(),
            rejection,
        }
    }
}
