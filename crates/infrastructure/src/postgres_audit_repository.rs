use async_trait::async_trait;
use sqlx::PgPool;

use licitasis_application::{AuditEvent, AuditRepository};
use licitasis_core::{AppError, AppResult};

/// PostgreSQL-backed append-only audit repository.
#[derive(Clone)]
pub struct PostgresAuditRepository {
    pool: PgPool,
}

impl PostgresAuditRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditRepository for PostgresAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO audit_log (
                user_id,
                user_name,
                action,
                table_name,
                details
            )
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(event.user_id)
        .bind(event.user_name)
        .bind(event.action.as_str())
        .bind(event.resource)
        .bind(event.detail)
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to append audit event: {error}")))?;

        Ok(())
    }
}
