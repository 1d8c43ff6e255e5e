use async_trait::async_trait;

use licitasis_application::{GrantRepository, GrantSeedRepository};
use licitasis_core::{AppError, AppResult, PermissionLevel};
use licitasis_domain::{PageGrant, Resource};

use sqlx::{FromRow, PgPool};
use tracing::warn;


/// PostgreSQL-backed repository for page grant rows.
#[derive(Clone)]
pub struct PostgresGrantRepository {
    pool: PgPool,
}

impl PostgresGrantRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GrantRow {
    permission_level: String,
    page_name: String,
    can_view: bool,
    can_edit: bool,
    can_create: bool,
    can_delete: bool,
}

impl GrantRow {
    /// Decodes the row, or `None` when the page is outside the resource catalog.
    fn into_grant(self) -> Option<PageGrant> {
        let resource = match Resource::from_transport(self.page_name.as_str()) {
            Ok(resource) => resource,
            Err(_) => {
                warn!(
                    permission_level = %self.permission_level,
                    page_name = %self.page_name,
                    "ignoring grant row for unknown page"
                );
                return None;
            }
        };

        Some(PageGrant::new(
            PermissionLevel::from_storage(self.permission_level.as_str()),
            resource,
            self.can_view,
            self.can_edit,
            self.can_create,
            self.can_delete,
        ))
    }
}

#[async_trait]
impl GrantRepository for PostgresGrantRepository {
    async fn find_grant(
        &self,
        permission_level: &PermissionLevel,
        resource: Resource,
    ) -> AppResult<Option<PageGrant>> {
        let row = sqlx::query_as::<_, GrantRow>(
            r#"
            SELECT permission_level, page_name, can_view, can_edit, can_create, can_delete
            FROM page_permissions
            WHERE permission_level = $1
                AND page_name = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(permission_level.as_str())
        .bind(resource.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to load grant for level '{permission_level}' on '{}': {error}",
                resource.as_str()
            ))
        })?;

        Ok(row.and_then(GrantRow::into_grant))
    }

    async fn list_grants_for_level(
        &self,
        permission_level: &PermissionLevel,
    ) -> AppResult<Vec<PageGrant>> {
        let rows = sqlx::query_as::<_, GrantRow>(
            r#"
            SELECT permission_level, page_name, can_view, can_edit, can_create, can_delete
            FROM page_permissions
            WHERE permission_level = $1
            ORDER BY id
            "#,
        )
        .bind(permission_level.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to list grants for level '{permission_level}': {error}"
            ))
        })?;

        Ok(rows.into_iter().filter_map(GrantRow::into_grant).collect())
    }
}

#[async_trait]
impl GrantSeedRepository for PostgresGrantRepository {
    async fn count_grants(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM page_permissions")
            .fetch_one(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to count grants: {error}")))
    }

    async fn insert_grants(&self, grants: &[PageGrant]) -> AppResult<u64> {
        let mut transaction = self.pool.begin().await.map_err(|error| {
            AppError::Internal(format!("failed to start grant seed transaction: {error}"))
        })?;

        let mut inserted = 0;
        for grant in grants {
            let result = sqlx::query(
                r#"
                INSERT INTO page_permissions (
                    permission_level,
                    page_name,
                    can_view,
                    can_edit,
                    can_create,
                    can_delete
                )
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (permission_level, page_name) DO NOTHING
                "#,
            )
            .bind(grant.permission_level().as_str())
            .bind(grant.resource().as_str())
            .bind(grant.can_view())
            .bind(grant.can_edit())
            .bind(grant.can_create())
            .bind(grant.can_delete())
            .execute(&mut *transaction)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to insert grant for level '{}' on '{}': {error}",
                    grant.permission_level(),
                    grant.resource().as_str()
                ))
            })?;

            inserted += result.rows_affected();
        }

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit grant seed transaction: {error}"))
        })?;

        Ok(inserted)
    }
}
