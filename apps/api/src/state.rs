use std::sync::Arc;

use licitasis_application::{AccessControlService, GrantSeedRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub access_control_service: AccessControlService,
    pub grant_store: Arc<dyn GrantSeedRepository>,
    pub frontend_url: String,
    pub bootstrap_token: String,
}
