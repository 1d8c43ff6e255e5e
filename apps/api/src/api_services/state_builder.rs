use std::sync::Arc;

use licitasis_application::{AccessControlService, GrantBootstrapService};
use licitasis_core::AppError;
use licitasis_infrastructure::{PostgresAuditRepository, PostgresGrantRepository};
use sqlx::PgPool;
use tracing::info;

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub async fn build_app_state(pool: PgPool, config: &ApiConfig) -> Result<AppState, AppError> {
    let grant_repository = Arc::new(PostgresGrantRepository::new(pool.clone()));
    let audit_repository = Arc::new(PostgresAuditRepository::new(pool));

    if config.seed_default_grants {
        let inserted = GrantBootstrapService::new(grant_repository.clone())
            .initialize_default_grants()
            .await?;
        info!(inserted, "default grant seeding finished");
    }

    Ok(AppState {
        access_control_service: AccessControlService::new(
            grant_repository.clone(),
            audit_repository,
        ),
        grant_store: grant_repository,
        frontend_url: config.frontend_url.clone(),
        bootstrap_token: config.bootstrap_token.clone(),
    })
}
