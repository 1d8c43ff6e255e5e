use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use licitasis_core::AppError;
use serde::Serialize;
use tracing::error;

/// Login entry point used when no identity is attached to the request.
pub const LOGIN_PATH: &str = "/login";
/// Page shown when a capability check fails.
pub const ACCESS_DENIED_PATH: &str = "/access-denied";

/// API error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    message: String,
}

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::Unauthorized(_) => return Redirect::to(LOGIN_PATH).into_response(),
            AppError::Forbidden(_) => return Redirect::to(ACCESS_DENIED_PATH).into_response(),
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AppError::RequestRejected(_) => StatusCode::FORBIDDEN,
            AppError::Internal(message) => {
                error!(%message, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let payload = Json(ErrorResponse {
            message: self.0.to_string(),
        });

        (status, payload).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;
