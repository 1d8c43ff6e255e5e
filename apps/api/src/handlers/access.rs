use axum::extract::{Path, State};
use axum::{Extension, Json};
use licitasis_application::AccessControlService;
use licitasis_core::UserIdentity;
use licitasis_domain::{CapabilityAction, NavigationEntry, Resource};

use crate::dto::{
    AccessDeniedResponse, CapabilityResponse, PageCapabilitiesResponse, ResourcesResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn navigation_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<Vec<NavigationEntry>>> {
    let entries = state
        .access_control_service
        .render_navigation(&user)
        .await?;

    Ok(Json(entries))
}

pub async fn resources_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<ResourcesResponse>> {
    let resources = state
        .access_control_service
        .accessible_resources(&user)
        .await?;

    Ok(Json(ResourcesResponse::from(resources)))
}

pub async fn capability_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path((resource, action)): Path<(String, String)>,
) -> ApiResult<Json<CapabilityResponse>> {
    let allowed = state
        .access_control_service
        .has_capability_by_name(&user, resource.as_str(), action.as_str())
        .await?;

    Ok(Json(CapabilityResponse {
        resource,
        action,
        allowed,
    }))
}

pub async fn page_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(resource): Path<String>,
) -> ApiResult<Json<PageCapabilitiesResponse>> {
    let resource = Resource::from_transport(resource.as_str())?;
    let service = &state.access_control_service;

    let capabilities = service
        .run_guarded(&user, resource, CapabilityAction::View, || {
            service.page_capabilities(&user, resource)
        })
        .await?;

    Ok(Json(PageCapabilitiesResponse::from(capabilities)))
}

pub async fn access_denied_handler(
    Extension(user): Extension<UserIdentity>,
) -> Json<AccessDeniedResponse> {
    Json(AccessDeniedResponse::from(
        AccessControlService::access_denied_view(&user),
    ))
}
