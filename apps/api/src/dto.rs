use licitasis_application::{AccessControlService, AccessDeniedView, PageCapabilities};
use licitasis_core::UserIdentity;
use licitasis_domain::{CapabilityAction, Resource};
use serde::Serialize;

/// Health response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub grant_store: &'static str,
}

/// Signed-in identity with its friendly level name.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: i64,
    pub display_name: String,
    pub email: Option<String>,
    pub permission_level: String,
    pub permission_display_name: String,
}

impl From<&UserIdentity> for MeResponse {
    fn from(value: &UserIdentity) -> Self {
        Self {
            id: value.id(),
            display_name: value.display_name().to_owned(),
            email: value.email().map(ToOwned::to_owned),
            permission_level: value.permission_level().as_str().to_owned(),
            permission_display_name: value.permission_level().display_name().to_owned(),
        }
    }
}

/// Resources the identity may view, by page name.
#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub resources: Vec<&'static str>,
}

impl From<Vec<Resource>> for ResourcesResponse {
    fn from(value: Vec<Resource>) -> Self {
        Self {
            resources: value.iter().map(Resource::as_str).collect(),
        }
    }
}

/// Answer to a single capability question.
#[derive(Debug, Serialize)]
pub struct CapabilityResponse {
    pub resource: String,
    pub action: String,
    pub allowed: bool,
}

/// Capability flags and button classes for one resource page.
#[derive(Debug, Serialize)]
pub struct PageCapabilitiesResponse {
    pub resource: &'static str,
    pub can_view: bool,
    pub can_edit: bool,
    pub can_create: bool,
    pub can_delete: bool,
    pub edit_button_class: String,
    pub create_button_class: String,
    pub delete_button_class: String,
}

impl From<PageCapabilities> for PageCapabilitiesResponse {
    fn from(value: PageCapabilities) -> Self {
        Self {
            resource: value.resource.as_str(),
            can_view: value.can_view,
            can_edit: value.can_edit,
            can_create: value.can_create,
            can_delete: value.can_delete,
            edit_button_class: AccessControlService::button_class(
                "btn btn-warning",
                value.allows(CapabilityAction::Edit),
            ),
            create_button_class: AccessControlService::button_class(
                "btn btn-primary",
                value.allows(CapabilityAction::Create),
            ),
            delete_button_class: AccessControlService::button_class(
                "btn btn-danger",
                value.allows(CapabilityAction::Delete),
            ),
        }
    }
}

/// Data for the access-denied page.
#[derive(Debug, Serialize)]
pub struct AccessDeniedResponse {
    pub user_name: String,
    pub permission_level: String,
    pub permission_display_name: String,
    pub description: String,
}

impl From<AccessDeniedView> for AccessDeniedResponse {
    fn from(value: AccessDeniedView) -> Self {
        Self {
            user_name: value.user_name,
            permission_level: value.permission_level,
            permission_display_name: value.permission_display_name,
            description: value.description,
        }
    }
}
