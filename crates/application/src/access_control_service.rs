use std::sync::Arc;

use licitasis_core::{AppError, AppResult, UserIdentity};
use licitasis_domain::{CapabilityAction, Resource};

use crate::{AuditRepository, GrantRepository};

mod capabilities;
mod navigation;
mod presentation;


pub use presentation::AccessDeniedView;

/// Effective capabilities of one identity on one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCapabilities {
    /// Resource the capabilities apply to.
    pub resource: Resource,
    /// Whether pages and lists may be viewed.
    pub can_view: bool,
    /// Whether records may be edited.
    pub can_edit: bool,
    /// Whether records may be created.
    pub can_create: bool,
    /// Whether records may be deleted.
    pub can_delete: bool,
}

impl PageCapabilities {
    /// Returns the flag matching `action`.
    #[must_use]
    pub fn allows(&self, action: CapabilityAction) -> bool {
        match action {
            CapabilityAction::View => self.can_view,
            CapabilityAction::Edit => self.can_edit,
            CapabilityAction::Create => self.can_create,
            CapabilityAction::Delete => self.can_delete,
        }
    }
}

/// Application service deciding who may do what, and what they may see.
#[derive(Clone)]
pub struct AccessControlService {
    grant_repository: Arc<dyn GrantRepository>,
    audit_repository: Arc<dyn AuditRepository>,
}

impl AccessControlService {
    /// Creates a new service from its repository ports.
    #[must_use]
    pub fn new(
        grant_repository: Arc<dyn GrantRepository>,
        audit_repository: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            grant_repository,
            audit_repository,
        }
    }

    /// Passes the identity through, or fails when no session identity exists.
    pub fn check_authenticated(identity: Option<UserIdentity>) -> AppResult<UserIdentity> {
        identity.ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))
    }
}
