use async_trait::async_trait;
use licitasis_core::{AppResult, PermissionLevel};
use licitasis_domain::{AuditAction, PageGrant, Resource};

/// Repository port for read-only grant lookups.
#[async_trait]
pub trait GrantRepository: Send + Sync {
    /// Finds the grant row for a permission level and resource.
    async fn find_grant(
        &self,
        permission_level: &PermissionLevel,
        resource: Resource,
    ) -> AppResult<Option<PageGrant>>;

    /// Lists every catalog grant row stored for a permission level.
    async fn list_grants_for_level(
        &self,
        permission_level: &PermissionLevel,
    ) -> AppResult<Vec<PageGrant>>;
}

/// Repository port used to write the default grant matrix.
#[async_trait]
pub trait GrantSeedRepository: Send + Sync {
    /// Counts stored grant rows across all levels.
    async fn count_grants(&self) -> AppResult<i64>;

    /// Inserts grant rows and returns how many were written.
    async fn insert_grants(&self, grants: &[PageGrant]) -> AppResult<u64>;
}

/// Repository port for append-only audit events.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Appends a single audit event.
    async fn append_event(&self, event: AuditEvent) -> AppResult<()>;
}

/// Audit event emitted by access control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// User that triggered the event.
    pub user_id: i64,
    /// User display name at the time of the event.
    pub user_name: String,
    /// Stable action identifier.
    pub action: AuditAction,
    /// Resource page name the event refers to.
    pub resource: String,
    /// Optional human-readable detail payload.
    pub detail: Option<String>,
}
