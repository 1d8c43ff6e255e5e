use axum::http::StatusCode;
use axum::{Extension, Json};
use licitasis_core::{AppError, UserIdentity};
use tower_sessions::Session;
use tracing::info;

use crate::dto::MeResponse;
use crate::error::ApiResult;

use super::SESSION_USER_KEY;

pub async fn logout_handler(session: Session) -> ApiResult<StatusCode> {
    let user_id = session
        .get::<UserIdentity>(SESSION_USER_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read session identity: {error}")))?
        .map(|identity| identity.id());

    session
        .delete()
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete session: {error}")))?;

    info!(?user_id, "session closed");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn me_handler(Extension(user): Extension<UserIdentity>) -> Json<MeResponse> {
    Json(MeResponse::from(&user))
}
