mod cors;

#[cfg(test)]
mod tests;

use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use licitasis_core::AppError;
use tower_http::trace::TraceLayer;
use tower_sessions::{SessionManagerLayer, SessionStore};

use crate::state::AppState;
use crate::{auth, handlers, middleware};

use self::cors::build_cors_layer;

pub fn build_router<Store>(
    app_state: AppState,
    frontend_url: &str,
    session_layer: SessionManagerLayer<Store>,
) -> Result<Router, AppError>
where
    Store: SessionStore + Clone,
{
    let protected_routes = Router::new()
        .route("/api/me", get(auth::me_handler))
        .route(
            "/api/navigation",
            get(handlers::access::navigation_handler),
        )
        .route("/api/resources", get(handlers::access::resources_handler))
        .route(
            "/api/capabilities/{resource}/{action}",
            get(handlers::access::capability_handler),
        )
        .route("/api/pages/{resource}", get(handlers::access::page_handler))
        .route(
            "/access-denied",
            get(handlers::access::access_denied_handler),
        )
        .route_layer(from_fn(middleware::require_auth));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/auth/bootstrap", post(auth::bootstrap_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .merge(protected_routes)
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_same_origin_for_mutations,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(frontend_url)?)
        .layer(session_layer)
        .with_state(app_state))
}
