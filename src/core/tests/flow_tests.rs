//! End-to-end flow tests against a mock identity/authorization provider.
//!
//! The password grant and the UMA grant share the token endpoint path, so
//! the mocks discriminate on the form-encoded grant type in the body.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use authpulse_core::authz::{AuthzChecker, ClientDescriptor};
use authpulse_core::config::IdentityConfig;
use authpulse_core::error::CheckError;
use authpulse_core::runner::BulkRunner;

const TOKEN_PATH: &str = "/realms/acme/protocol/openid-connect/token";
const INTROSPECT_PATH: &str = "/realms/acme/protocol/openid-connect/token/introspect";

// ============================================================================
// Test Utilities
// ============================================================================

fn checker(base_url: &str) -> AuthzChecker {
    let identity = IdentityConfig {
        server_url: base_url.to_string(),
        realm: "acme".to_string(),
        client_id: "workbench".to_string(),
        client_secret: "test-secret".to_string(),
        timeout: Duration::from_secs(5),
    };
    let descriptor = ClientDescriptor::from_json(&format!(
        r#"{{
            "auth-server-url": "{}",
            "realm": "acme",
            "resource": "workbench",
            "credentials": {{ "secret": "test-secret" }}
        }}"#,
        base_url
    ))
    .unwrap();
    AuthzChecker::new(identity, descriptor).unwrap()
}

fn token_body(token: &str) -> serde_json::Value {
    json!({ "access_token": token, "expires_in": 300, "token_type": "Bearer" })
}

async fn mount_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("user-token")))
        .mount(server)
        .await;
}

async fn mount_authorize_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("uma-ticket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("rpt-token")))
        .mount(server)
        .await;
}

async fn mount_introspect(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(INTROSPECT_PATH))
        .and(body_string_contains("requesting_party_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// Flow Tests
// ============================================================================

#[tokio::test]
async fn resolves_projects_granted_the_view_scope() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_authorize_ok(&server).await;
    mount_introspect(
        &server,
        json!({
            "active": true,
            "permissions": [
                { "rsname": "P1", "scopes": ["projects:view", "projects:read"] },
                { "rsname": "P2", "scopes": ["projects:view"] },
                { "rsname": "P3", "scopes": ["projects:read"] }
            ]
        }),
    )
    .await;

    let projects = checker(&server.uri())
        .visible_projects("alice", "correct-horse")
        .await
        .unwrap();

    // Provider order is preserved; P3 lacks the view scope.
    assert_eq!(projects, vec!["P1".to_string(), "P2".to_string()]);
}

#[tokio::test]
async fn empty_grant_is_a_successful_empty_list() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_authorize_ok(&server).await;
    mount_introspect(
        &server,
        json!({
            "active": true,
            "permissions": [
                { "rsname": "P1", "scopes": ["projects:read"] }
            ]
        }),
    )
    .await;

    let projects = checker(&server.uri())
        .visible_projects("alice", "correct-horse")
        .await
        .unwrap();

    assert!(projects.is_empty());
}

#[tokio::test]
async fn invalid_credentials_stop_before_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=password"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid_grant" })),
        )
        .mount(&server)
        .await;
    // Neither downstream endpoint may be touched.
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("uma-ticket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("rpt-token")))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(INTROSPECT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "active": true })))
        .expect(0)
        .mount(&server)
        .await;

    let error = checker(&server.uri())
        .visible_projects("alice", "wrong-password")
        .await
        .unwrap_err();

    assert!(matches!(error, CheckError::Authentication(_)));
    assert!(error.to_string().contains("401"));
}

#[tokio::test]
async fn denied_authorization_stops_before_introspection() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("uma-ticket"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "error": "access_denied" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(INTROSPECT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "active": true })))
        .expect(0)
        .mount(&server)
        .await;

    let error = checker(&server.uri())
        .visible_projects("alice", "correct-horse")
        .await
        .unwrap_err();

    assert!(matches!(error, CheckError::Authorization(_)));
}

#[tokio::test]
async fn inactive_ticket_is_an_introspection_error() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_authorize_ok(&server).await;
    mount_introspect(&server, json!({ "active": false })).await;

    let error = checker(&server.uri())
        .visible_projects("alice", "correct-horse")
        .await
        .unwrap_err();

    assert!(matches!(error, CheckError::Introspection(_)));
}

// ============================================================================
// Driver Tests
// ============================================================================

#[tokio::test]
async fn driver_runs_every_iteration_in_order_despite_failures() {
    let server = MockServer::start().await;
    // The first login succeeds; every later one is rejected.
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("user-token")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=password"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid_grant" })),
        )
        .mount(&server)
        .await;
    mount_authorize_ok(&server).await;
    mount_introspect(
        &server,
        json!({
            "active": true,
            "permissions": [{ "rsname": "P1", "scopes": ["projects:view"] }]
        }),
    )
    .await;

    let checker = checker(&server.uri());
    let runner = BulkRunner::new(&checker, Duration::from_secs(5));
    let report = runner.run(3, "alice", "correct-horse").await;

    assert_eq!(report.outcomes.len(), 3);
    let indices: Vec<u32> = report.outcomes.iter().map(|o| o.index).collect();
    assert_eq!(indices, vec![1, 2, 3]);

    assert!(report.outcomes[0].is_success());
    assert_eq!(
        report.outcomes[0].projects.as_deref(),
        Some(&["P1".to_string()][..])
    );
    assert!(!report.outcomes[1].is_success());
    assert!(!report.outcomes[2].is_success());
    assert_eq!(report.successes(), 1);
    assert_eq!(report.failures(), 2);
}

#[tokio::test]
async fn driver_records_one_outcome_per_iteration_on_total_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let checker = checker(&server.uri());
    let runner = BulkRunner::new(&checker, Duration::from_secs(5));
    let report = runner.run(2, "alice", "correct-horse").await;

    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.failures(), 2);
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.error.as_deref().is_some_and(|e| e.contains("authentication"))));
}
