use assert_matches::assert_matches;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_api_client::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::error::ClinicError;

#[derive(Debug, Deserialize, PartialEq)]
struct Item {
    id: i64,
}

fn client_for(server: &MockServer) -> ClinicApiClient {
    ClinicApiClient::new(&AppConfig {
        clinic_api_url: server.uri(),
        ..AppConfig::default()
    })
}

#[tokio::test]
async fn get_sends_bearer_token_and_parses_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }, { "id": 2 }])))
        .expect(1)
        .mount(&server)
        .await;

    let items: Vec<Item> = client_for(&server).get("/items", "secret-token").await.unwrap();
    assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
}

#[tokio::test]
async fn non_success_with_html_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let result: Result<Vec<Item>, _> = client_for(&server).get("/items", "t").await;
    assert_matches!(
        result,
        Err(ClinicError::Transport { status: Some(502), message }) if message.contains("Bad Gateway")
    );
}

#[tokio::test]
async fn non_success_with_json_body_is_still_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!([{ "id": 9 }])))
        .mount(&server)
        .await;

    let result: Result<Vec<Item>, _> = client_for(&server).get("/items", "t").await;
    assert_matches!(result, Err(ClinicError::Transport { status: Some(403), .. }));
}

#[tokio::test]
async fn success_with_non_json_body_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html><p>maintenance</p>"))
        .mount(&server)
        .await;

    let result: Result<Vec<Item>, _> = client_for(&server).get("/items", "t").await;
    assert_matches!(result, Err(ClinicError::MalformedResponse(msg)) if msg.contains("maintenance"));
}

#[tokio::test]
async fn success_with_wrong_shape_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "ok" })))
        .mount(&server)
        .await;

    let result: Result<Vec<Item>, _> = client_for(&server).get("/items", "t").await;
    assert_matches!(result, Err(ClinicError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_backend_is_transport_error_without_status() {
    let client = ClinicApiClient::new(&AppConfig {
        clinic_api_url: "http://127.0.0.1:1".to_string(),
        ..AppConfig::default()
    });

    let result: Result<Vec<Item>, _> = client.get("/items", "t").await;
    assert_matches!(result, Err(ClinicError::Transport { status: None, .. }));
}

#[tokio::test]
async fn post_form_is_url_encoded_without_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=a%40b.c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5 })))
        .expect(1)
        .mount(&server)
        .await;

    let item: Item = client_for(&server)
        .post_form("/auth/login", &[("username", "a@b.c")])
        .await
        .unwrap();
    assert_eq!(item, Item { id: 5 });
}
