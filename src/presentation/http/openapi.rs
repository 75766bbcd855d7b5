// src/presentation/http/openapi.rs
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::credentials::validate_identifier,
        crate::presentation::http::controllers::credentials::evaluate_password,
        crate::presentation::http::controllers::credentials::review_credentials,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::credentials::CredentialTextRequest,
            crate::presentation::http::controllers::credentials::ReviewCredentialsRequest,
            crate::application::dto::ValidationResultDto,
            crate::application::dto::CredentialReviewDto
        )
    ),
    tags(
        (name = "Credentials", description = "Account identifier and password checks"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
