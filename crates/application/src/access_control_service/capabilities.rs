use std::future::Future;
use std::str::FromStr;

use licitasis_domain::AuditAction;
use tracing::warn;

use crate::AuditEvent;

use super::*;

impl AccessControlService {
    /// Returns whether the identity holds `action` on `resource`.
    ///
    /// Administrators are allowed without touching the grant store. A missing
    /// grant row is a deny, not an error.
    pub async fn has_capability(
        &self,
        identity: &UserIdentity,
        resource: Resource,
        action: CapabilityAction,
    ) -> AppResult<bool> {
        let permission_level = identity.permission_level();
        if permission_level.is_administrator() {
            return Ok(true);
        }

        let grant = self
            .grant_repository
            .find_grant(permission_level, resource)
            .await?;

        Ok(grant.map(|grant| grant.allows(action)).unwrap_or(false))
    }

    /// String-typed variant of [`Self::has_capability`] for transport callers.
    ///
    /// Unknown resource or action names deny without reading the store.
    pub async fn has_capability_by_name(
        &self,
        identity: &UserIdentity,
        resource_name: &str,
        action_name: &str,
    ) -> AppResult<bool> {
        let (Ok(resource), Ok(action)) = (
            Resource::from_str(resource_name),
            CapabilityAction::from_str(action_name),
        ) else {
            return Ok(false);
        };

        self.has_capability(identity, resource, action).await
    }

    /// Ensures the identity holds `action` on `resource`.
    ///
    /// Denials are audited before the error is returned.
    pub async fn require_capability(
        &self,
        identity: &UserIdentity,
        resource: Resource,
        action: CapabilityAction,
    ) -> AppResult<()> {
        if self.has_capability(identity, resource, action).await? {
            return Ok(());
        }

        warn!(
            user_id = identity.id(),
            permission_level = %identity.permission_level(),
            resource = resource.as_str(),
            action = action.as_str(),
            "access denied"
        );

        self.audit_repository
            .append_event(AuditEvent {
                user_id: identity.id(),
                user_name: identity.display_name().to_owned(),
                action: AuditAction::AccessDenied,
                resource: resource.as_str().to_owned(),
                detail: Some(format!(
                    "permission level '{}' is missing '{}' on '{}'",
                    identity.permission_level(),
                    action.as_str(),
                    resource.as_str()
                )),
            })
            .await?;

        Err(AppError::Forbidden(format!(
            "user '{}' is missing '{}' access on '{}'",
            identity.id(),
            action.as_str(),
            resource.as_str()
        )))
    }

    /// Runs `operation` only after the capability check passes.
    pub async fn run_guarded<T, F, Fut>(
        &self,
        identity: &UserIdentity,
        resource: Resource,
        action: CapabilityAction,
        operation: F,
    ) -> AppResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        self.require_capability(identity, resource, action).await?;
        operation().await
    }

    /// Returns all four capability flags for one resource with a single
    /// store read.
    pub async fn page_capabilities(
        &self,
        identity: &UserIdentity,
        resource: Resource,
    ) -> AppResult<PageCapabilities> {
        if identity.permission_level().is_administrator() {
            return Ok(PageCapabilities {
                resource,
                can_view: true,
                can_edit: true,
                can_create: true,
                can_delete: true,
            });
        }

        let grant = self
            .grant_repository
            .find_grant(identity.permission_level(), resource)
            .await?;

        Ok(grant
            .map(|grant| PageCapabilities {
                resource,
                can_view: grant.can_view(),
                can_edit: grant.can_edit(),
                can_create: grant.can_create(),
                can_delete: grant.can_delete(),
            })
            .unwrap_or(PageCapabilities {
                resource,
                can_view: false,
                can_edit: false,
                can_create: false,
                can_delete: false,
            }))
    }
}
