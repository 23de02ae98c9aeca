use std::sync::Arc;

use assert_matches::assert_matches;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use auth_cell::router::auth_routes;
use auth_cell::{LoginRequest, LoginService};
use shared_api_client::ClinicApiClient;
use shared_models::auth::Role;
use shared_models::error::ClinicError;
use shared_utils::test_utils::{MockClinicResponses, TestConfig};

fn service_for(server: &MockServer) -> LoginService {
    let config = TestConfig::with_url(server.uri()).to_app_config();
    LoginService::with_client(Arc::new(ClinicApiClient::new(&config)))
}

fn login_request(expected_role: Option<Role>) -> LoginRequest {
    LoginRequest {
        email: "pat@clinic.test".to_string(),
        password: "hunter2".to_string(),
        expected_role,
    }
}

#[tokio::test]
async fn login_posts_password_grant_and_builds_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("username=pat%40clinic.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::login_response("tok-1", "patient")))
        .expect(1)
        .mount(&server)
        .await;

    let session = service_for(&server).login(&login_request(Some(Role::Patient))).await.unwrap();

    assert_eq!(session.access_token, "tok-1");
    assert_eq!(session.role, Role::Patient);
}

#[tokio::test]
async fn role_mismatch_fails_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::login_response("tok-1", "doctor")))
        .mount(&server)
        .await;

    let result = service_for(&server).login(&login_request(Some(Role::Staff))).await;
    assert_matches!(result, Err(ClinicError::Authorization(_)));
}

#[tokio::test]
async fn bad_credentials_are_transport_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(MockClinicResponses::error_response("Incorrect username or password")))
        .mount(&server)
        .await;

    let result = service_for(&server).login(&login_request(None)).await;
    assert_matches!(result, Err(ClinicError::Transport { status: Some(401), .. }));
}

#[tokio::test]
async fn blank_credentials_never_reach_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = LoginRequest {
        email: " ".to_string(),
        password: String::new(),
        expected_role: None,
    };
    assert_matches!(service_for(&server).login(&request).await, Err(ClinicError::Validation(_)));
}

#[tokio::test]
async fn session_route_echoes_headers() {
    let app = auth_routes(TestConfig::default().to_arc());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/session")
                .header("authorization", "Bearer t")
                .header("x-clinic-role", "staff")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = auth_routes(TestConfig::default().to_arc());
    let response = app
        .oneshot(Request::builder().uri("/session").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_route_returns_session_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::login_response("tok-9", "staff")))
        .mount(&server)
        .await;

    let app = auth_routes(TestConfig::with_url(server.uri()).to_arc());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "email": "s@clinic.test", "password": "pw" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
