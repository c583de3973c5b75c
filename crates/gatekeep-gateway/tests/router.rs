//! End-to-end: config -> AppState -> router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use gatekeep_core::{AuthzRequest, CasbinEnforcer, Enforcer, GatekeepError};
use gatekeep_gateway::authz::Authorizer;
use gatekeep_gateway::config::GatekeepConfig;
use gatekeep_gateway::obs::GatewayMetrics;
use gatekeep_gateway::{app_state::AppState, config, router};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn config_with(extra: &str) -> GatekeepConfig {
    let yaml = format!(
        "version: 1\nauthz:\n  model: \"{}\"\n  policy: \"{}\"\n{extra}",
        fixture("authz_model.conf"),
        fixture("authz_policy.csv")
    );
    config::load_from_str(&yaml).expect("config must parse")
}

async fn app() -> Router {
    let state = AppState::new(config_with("")).await.expect("state must build");
    router::build_router(state)
}

async fn send(app: &Router, user: Option<&str>, method: &str, uri: &str) -> (StatusCode, String) {
    send_as(app, "X-User", user, method, uri).await
}

async fn send_as(
    app: &Router,
    header: &str,
    user: Option<&str>,
    method: &str,
    uri: &str,
) -> (StatusCode, String) {
    let mut b = Request::builder().method(method).uri(uri);
    if let Some(u) = user {
        b = b.header(header, u);
    }
    let resp = app.clone().oneshot(b.body(Body::empty()).unwrap()).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn permission_table() {
    let app = app().await;
    let cases = [
        (Some("alice"), "GET", "/", StatusCode::OK),
        (Some("alice"), "GET", "/data1", StatusCode::OK),
        (Some("alice"), "GET", "/data2", StatusCode::FORBIDDEN),
        (Some("alice"), "POST", "/", StatusCode::FORBIDDEN),
        (Some("bob"), "GET", "/", StatusCode::FORBIDDEN),
        (Some("bob"), "GET", "/data1", StatusCode::FORBIDDEN),
        (Some("bob"), "POST", "/data2", StatusCode::OK),
        (Some("bob"), "GET", "/data2", StatusCode::FORBIDDEN),
        (None, "GET", "/", StatusCode::FORBIDDEN),
        (Some("anonymous"), "GET", "/", StatusCode::FORBIDDEN),
        (Some("alice"), "GET", "/nonexistent", StatusCode::FORBIDDEN),
        (Some("bob"), "GET", "/api/users", StatusCode::FORBIDDEN),
    ];
    for (user, method, uri, expected) in cases {
        let (status, _) = send(&app, user, method, uri).await;
        assert_eq!(status, expected, "{user:?} {method} {uri}");
    }
}

#[tokio::test]
async fn allowed_requests_reach_handlers() {
    let app = app().await;

    let (status, body) = send(&app, Some("alice"), "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Welcome to the home page! User: alice");

    let (_, body) = send(&app, Some("bob"), "POST", "/data2").await;
    assert_eq!(body, "Data2 page - User: bob, Method: POST");

    let (status, body) = send(&app, Some("alice"), "GET", "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["user"], "alice");
}

#[tokio::test]
async fn engine_error_is_distinct_from_deny() {
    let casbin = CasbinEnforcer::from_files(fixture("authz_model.conf"), fixture("authz_policy.csv"))
        .await
        .expect("fixtures must load");
    let engine = move |req: &AuthzRequest| -> gatekeep_core::Result<bool> {
        if req.subject() == "mallory" {
            return Err(GatekeepError::Evaluation("matcher fault".into()));
        }
        casbin.enforce(req)
    };
    let metrics = Arc::new(GatewayMetrics::default());
    let authorizer = Authorizer::builder(Arc::new(engine))
        .metrics(Arc::clone(&metrics))
        .build();
    let state = AppState::with_authorizer(config_with(""), authorizer, metrics).unwrap();
    let app = router::build_router(state);

    let (status, body) = send(&app, Some("mallory"), "GET", "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Authorization error");

    let (status, body) = send(&app, Some("bob"), "GET", "/").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, "Forbidden");
}

#[tokio::test]
async fn ops_routes_bypass_authz() {
    let app = app().await;
    let (status, body) = send(&app, None, "GET", "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    send(&app, Some("alice"), "GET", "/").await;
    send(&app, Some("bob"), "GET", "/").await;

    let (status, body) = send(&app, None, "GET", "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("gatekeep_authz_decisions_total{decision=\"allowed\"} 1"));
    assert!(body.contains("gatekeep_authz_decisions_total{decision=\"denied\"} 1"));
}

#[tokio::test]
async fn renamed_subject_header_reaches_handlers() {
    let cfg = config_with("  subject_header: \"X-Principal\"\n");
    let app = router::build_router(AppState::new(cfg).await.unwrap());

    let (status, body) = send_as(&app, "X-Principal", Some("alice"), "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Welcome to the home page! User: alice");

    // The default header is no longer consulted.
    let (status, _) = send_as(&app, "X-User", Some("alice"), "GET", "/").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn state_fails_on_missing_policy() {
    let yaml = format!(
        "version: 1\nauthz:\n  model: \"{}\"\n  policy: \"{}\"\n",
        fixture("authz_model.conf"),
        fixture("no_such_policy.csv")
    );
    let cfg = config::load_from_str(&yaml).unwrap();
    assert!(AppState::new(cfg).await.is_err());
}
