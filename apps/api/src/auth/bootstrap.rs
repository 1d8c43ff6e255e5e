use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use licitasis_core::{AppError, PermissionLevel, UserIdentity};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::info;

use crate::error::ApiResult;
use crate::state::AppState;

use super::SESSION_USER_KEY;

#[derive(Debug, Deserialize)]
pub struct BootstrapRequest {
    pub token: String,
    pub user_id: i64,
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub permission_level: String,
}

pub async fn bootstrap_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BootstrapRequest>,
) -> ApiResult<StatusCode> {
    if payload.token != state.bootstrap_token {
        return Err(
            AppError::InvalidCredentials("invalid bootstrap token".to_owned()).into(),
        );
    }

    if payload.display_name.trim().is_empty() {
        return Err(AppError::Validation("display_name must not be empty".to_owned()).into());
    }

    let identity = UserIdentity::new(
        payload.user_id,
        payload.display_name,
        payload.email,
        PermissionLevel::from_storage(payload.permission_level.as_str()),
    );

    session
        .cycle_id()
        .await
        .map_err(|error| AppError::Internal(format!("failed to cycle session id: {error}")))?;

    session
        .insert(SESSION_USER_KEY, &identity)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to persist session identity: {error}"))
        })?;

    info!(
        user_id = identity.id(),
        permission_level = %identity.permission_level(),
        "session identity bootstrapped"
    );

    Ok(StatusCode::NO_CONTENT)
}
