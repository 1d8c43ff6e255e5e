use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, ORIGIN, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use licitasis_application::AccessControlService;
use licitasis_domain::default_page_grants;
use licitasis_infrastructure::{InMemoryAuditRepository, InMemoryGrantRepository};
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::state::AppState;

use super::build_router;

const FRONTEND_URL: &str = "http://localhost:3000";
const BOOTSTRAP_TOKEN: &str = "bootstrap-token-for-tests";

struct TestApp {
    router: Router,
    audit_repository: Arc<InMemoryAuditRepository>,
}

fn test_app() -> TestApp {
    let grant_repository = Arc::new(InMemoryGrantRepository::with_grants(default_page_grants()));
    let audit_repository = Arc::new(InMemoryAuditRepository::new());

    let state = AppState {
        access_control_service: AccessControlService::new(
            grant_repository.clone(),
            audit_repository.clone(),
        ),
        grant_store: grant_repository,
        frontend_url: FRONTEND_URL.to_owned(),
        bootstrap_token: BOOTSTRAP_TOKEN.to_owned(),
    };
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    let router = match build_router(state, FRONTEND_URL, session_layer) {
        Ok(router) => router,
        Err(error) => panic!("failed to build router: {error}"),
    };

    TestApp {
        router,
        audit_repository,
    }
}

async fn send(app: &TestApp, request: Request<Body>) -> Response {
    match app.router.clone().oneshot(request).await {
        Ok(response) => response,
        Err(error) => match error {},
    }
}

fn build_request(method: Method, uri: &str, cookie: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(ORIGIN, FRONTEND_URL)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    match builder.body(body) {
        Ok(request) => request,
        Err(error) => panic!("failed to build request: {error}"),
    }
}

async fn sign_in(app: &TestApp, permission_level: &str) -> String {
    let payload = json!({
        "token": BOOTSTRAP_TOKEN,
        "user_id": 7,
        "display_name": "Maria",
        "email": "maria@example.com",
        "permission_level": permission_level,
    });
    let response = send(
        app,
        build_request(
            Method::POST,
            "/auth/bootstrap",
            None,
            Body::from(payload.to_string()),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    match response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
    {
        Some(cookie) => cookie.to_owned(),
        None => panic!("bootstrap response did not set a session cookie"),
    }
}

async fn get(app: &TestApp, uri: &str, cookie: Option<&str>) -> Response {
    send(app, build_request(Method::GET, uri, cookie, Body::empty())).await
}

async fn json_body(response: Response) -> Value {
    let bytes = match axum::body::to_bytes(response.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => panic!("failed to read response body: {error}"),
    };

    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

fn logical_names(entries: &Value) -> Vec<String> {
    entries
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("logical_name").and_then(Value::as_str))
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn health_reports_grant_store_status() {
    let app = test_app();

    let response = get(&app, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.get("status").and_then(Value::as_str), Some("ok"));
}

#[tokio::test]
async fn protected_routes_redirect_to_login_without_session() {
    let app = test_app();

    for uri in ["/api/me", "/api/navigation", "/api/pages/clientes", "/access-denied"] {
        let response = get(&app, uri, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/login"));
    }
}

#[tokio::test]
async fn bootstrap_rejects_wrong_token() {
    let app = test_app();
    let payload = json!({
        "token": "wrong",
        "user_id": 1,
        "display_name": "Intruso",
        "permission_level": "Administrador",
    });

    let response = send(
        &app,
        build_request(
            Method::POST,
            "/auth/bootstrap",
            None,
            Body::from(payload.to_string()),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(location(&response).is_none());
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn me_returns_friendly_level_name() {
    let app = test_app();
    let cookie = sign_in(&app, "Usuario_Nivel_2").await;

    let response = get(&app, "/api/me", Some(cookie.as_str())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body.get("permission_display_name").and_then(Value::as_str),
        Some("Usuário Nível 2")
    );
}

#[tokio::test]
async fn investor_navigation_shows_finance_then_logout() {
    let app = test_app();
    let cookie = sign_in(&app, "Investidor").await;

    let response = get(&app, "/api/navigation", Some(cookie.as_str())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(logical_names(&body), vec!["financeiro", "logout"]);
}

#[tokio::test]
async fn administrator_navigation_includes_admin_only_sections() {
    let app = test_app();
    let cookie = sign_in(&app, "Administrador").await;

    let response = get(&app, "/api/navigation", Some(cookie.as_str())).await;

    let names = logical_names(&json_body(response).await);
    assert!(names.iter().any(|name| name == "usuarios"));
    assert!(names.iter().any(|name| name == "funcionarios"));
    assert_eq!(names.last().map(String::as_str), Some("logout"));
}

#[tokio::test]
async fn resources_follow_view_grants() {
    let app = test_app();
    let cookie = sign_in(&app, "Usuario_Nivel_1").await;

    let response = get(&app, "/api/resources", Some(cookie.as_str())).await;

    let body = json_body(response).await;
    assert_eq!(
        body.get("resources"),
        Some(&json!([
            "clientes",
            "produtos",
            "empenhos",
            "fornecedores",
            "vendas",
            "compras"
        ]))
    );
}

#[tokio::test]
async fn capability_queries_deny_unknown_names() {
    let app = test_app();
    let cookie = sign_in(&app, "Usuario_Nivel_2").await;

    let granted = get(&app, "/api/capabilities/produtos/delete", Some(cookie.as_str())).await;
    let unknown_resource = get(&app, "/api/capabilities/relatorios/view", Some(cookie.as_str())).await;
    let unknown_action = get(&app, "/api/capabilities/produtos/export", Some(cookie.as_str())).await;

    assert_eq!(
        json_body(granted).await.get("allowed"),
        Some(&Value::Bool(true))
    );
    assert_eq!(
        json_body(unknown_resource).await.get("allowed"),
        Some(&Value::Bool(false))
    );
    assert_eq!(
        json_body(unknown_action).await.get("allowed"),
        Some(&Value::Bool(false))
    );
}

#[tokio::test]
async fn viewable_page_returns_capabilities_and_button_classes() {
    let app = test_app();
    let cookie = sign_in(&app, "Usuario_Nivel_1").await;

    let response = get(&app, "/api/pages/clientes", Some(cookie.as_str())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.get("can_view"), Some(&Value::Bool(true)));
    assert_eq!(
        body.get("edit_button_class").and_then(Value::as_str),
        Some("btn btn-warning disabled")
    );
    assert!(app.audit_repository.events().await.is_empty());
}

#[tokio::test]
async fn denied_page_redirects_and_records_audit_event() {
    let app = test_app();
    let cookie = sign_in(&app, "Investidor").await;

    let response = get(&app, "/api/pages/clientes", Some(cookie.as_str())).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/access-denied"));

    let events = app.audit_repository.events().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events.first().map(|event| event.resource.as_str()), Some("clientes"));
}

#[tokio::test]
async fn unknown_page_resource_is_a_bad_request() {
    let app = test_app();
    let cookie = sign_in(&app, "Administrador").await;

    let response = get(&app, "/api/pages/relatorios", Some(cookie.as_str())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn access_denied_view_describes_level() {
    let app = test_app();
    let cookie = sign_in(&app, "Nivel_Temporario").await;

    let response = get(&app, "/access-denied", Some(cookie.as_str())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body.get("permission_display_name").and_then(Value::as_str),
        Some("Nivel_Temporario")
    );
    assert_eq!(
        body.get("description").and_then(Value::as_str),
        Some("Nível de permissão não reconhecido.")
    );
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = test_app();
    let cookie = sign_in(&app, "Usuario_Nivel_1").await;

    let logout = send(
        &app,
        build_request(
            Method::POST,
            "/auth/logout",
            Some(cookie.as_str()),
            Body::empty(),
        ),
    )
    .await;
    assert_eq!(logout.status(), StatusCode::NO_CONTENT);

    let response = get(&app, "/api/me", Some(cookie.as_str())).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn mutations_from_foreign_origins_are_blocked() {
    let app = test_app();
    let request = match Request::builder()
        .method(Method::POST)
        .uri("/auth/logout")
        .header(ORIGIN, "https://evil.example")
        .body(Body::empty())
    {
        Ok(request) => request,
        Err(error) => panic!("failed to build request: {error}"),
    };

    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(location(&response).is_none());
}
