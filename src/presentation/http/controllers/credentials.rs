// src/presentation/http/controllers/credentials.rs
use crate::application::{
    commands::credentials::{
        EvaluatePasswordCommand, ReviewCredentialsCommand, ValidateIdentifierCommand,
    },
    dto::{CredentialReviewDto, ValidationResultDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CredentialTextRequest {
    /// Raw, untrimmed form value.
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewCredentialsRequest {
    pub identifier: Option<String>,
    pub password: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/credentials/identifier",
    request_body = CredentialTextRequest,
    responses(
        (status = 200, description = "Verdict for the identifier; rejections are not errors.", body = ValidationResultDto),
        (status = 400, description = "The `text` field was absent.", body = ErrorResponse)
    ),
    tag = "Credentials"
)]
pub async fn validate_identifier(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CredentialTextRequest>,
) -> HttpResult<Json<ValidationResultDto>> {
    let command = ValidateIdentifierCommand { text: payload.text };

    state
        .services
        .credential_commands
        .validate_identifier(command)
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/credentials/password",
    request_body = CredentialTextRequest,
    responses(
        (status = 200, description = "Verdict for the password; rejections are not errors.", body = ValidationResultDto),
        (status = 400, description = "The `text` field was absent.", body = ErrorResponse)
    ),
    tag = "Credentials"
)]
pub async fn evaluate_password(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CredentialTextRequest>,
) -> HttpResult<Json<ValidationResultDto>> {
    let command = EvaluatePasswordCommand { text: payload.text };

    state
        .services
        .credential_commands
        .evaluate_password(command)
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/credentials/review",
    request_body = ReviewCredentialsRequest,
    responses(
        (status = 200, description = "Both verdicts plus the reason to display, if any.", body = CredentialReviewDto),
        (status = 400, description = "A field was absent.", body = ErrorResponse)
    ),
    tag = "Credentials"
)]
pub async fn review_credentials(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ReviewCredentialsRequest>,
) -> HttpResult<Json<CredentialReviewDto>> {
    let command = ReviewCredentialsCommand {
        identifier: payload.identifier,
        password: payload.password,
    };

    state
        .services
        .credential_commands
        .review(command)
        .into_http()
        .map(Json)
}
