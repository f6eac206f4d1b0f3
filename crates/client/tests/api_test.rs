//! Integration tests for the typed clients against a mock gateway backend.

use gateway_client::types::{
    CreateApiKeyRequest, CreateProviderRequest, LoginRequest, RegisterRequest,
};
use gateway_client::{ClientError, TypedClientBuilder};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn public_client(server: &MockServer) -> gateway_client::PublicGatewayClient {
    TypedClientBuilder::new()
        .base_url(server.uri())
        .build_public()
        .expect("client should build")
}

fn auth_client(server: &MockServer, token: &str) -> gateway_client::AuthenticatedGatewayClient {
    TypedClientBuilder::new()
        .base_url(server.uri())
        .build_authenticated(token)
        .expect("client should build")
}

#[tokio::test]
async fn login_returns_token_pair() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .and(body_json(json!({"username": "jo@example.com", "password": "hunter22A"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": "a.b.c", "refresh": "d.e.f"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tokens = public_client(&server)
        .login(&LoginRequest {
            username: "jo@example.com".into(),
            password: "hunter22A".into(),
        })
        .await
        .unwrap();

    assert_eq!(tokens.access, "a.b.c");
    assert_eq!(tokens.refresh, "d.e.f");
}

#[tokio::test]
async fn register_posts_all_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register/"))
        .and(body_json(json!({
            "firstname": "Jo",
            "lastname": "Doe",
            "username": "jo@example.com",
            "email": "jo@example.com",
            "password": "hunter22A"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": "a", "refresh": "r"})),
        )
        .mount(&server)
        .await;

    let tokens = public_client(&server)
        .register(&RegisterRequest {
            firstname: "Jo".into(),
            lastname: "Doe".into(),
            username: "jo@example.com".into(),
            email: "jo@example.com".into(),
            password: "hunter22A".into(),
        })
        .await
        .unwrap();
    assert_eq!(tokens.access, "a");
}

#[tokio::test]
async fn refresh_posts_refresh_token_and_parses_access() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/token/refresh/"))
        .and(body_json(json!({"refresh": "old-refresh"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "fresh"})))
        .mount(&server)
        .await;

    let response = public_client(&server).refresh("old-refresh").await.unwrap();
    assert_eq!(response.access.as_deref(), Some("fresh"));
}

#[tokio::test]
async fn refresh_response_without_access_field_parses_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/token/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "rotated"})))
        .mount(&server)
        .await;

    let response = public_client(&server).refresh("r").await.unwrap();
    assert!(response.access.is_none());
}

#[tokio::test]
async fn google_callback_forwards_code_as_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/google/login/callback/"))
        .and(query_param("code", "4/0Axyz"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": "a", "refresh": "r"})),
        )
        .mount(&server)
        .await;

    let tokens = public_client(&server).google_callback("4/0Axyz").await.unwrap();
    assert_eq!(tokens.refresh, "r");
}

#[tokio::test]
async fn profile_request_carries_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile/"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Jo Doe",
            "firstname": "Jo",
            "lastname": "Doe",
            "email": "jo@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let profile = auth_client(&server, "tok-123").profile().await.unwrap();
    assert_eq!(profile.id, 7);
    assert_eq!(profile.email, "jo@example.com");
}

#[tokio::test]
async fn unauthorized_response_maps_to_auth_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;

    let err = auth_client(&server, "stale").profile().await.unwrap_err();
    assert!(err.is_auth_failure());
    assert!(matches!(err, ClientError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn models_query_forwards_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/provider/ai/models/"))
        .and(query_param("name", "gpt"))
        .and(query_param("provider", "openai"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "models": [{
                "model_name": "gpt-4o",
                "provider": "openai",
                "developer": "OpenAI",
                "active": true
            }],
            "available_providers": ["openai", "anthropic"]
        })))
        .mount(&server)
        .await;

    let response = auth_client(&server, "t")
        .models(Some("gpt"), Some("openai"))
        .await
        .unwrap();
    assert_eq!(response.count, 1);
    assert_eq!(response.models[0].model_name, "gpt-4o");
    assert_eq!(response.available_providers.len(), 2);
}

#[tokio::test]
async fn create_api_key_returns_full_key_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/apikey/"))
        .and(body_json(json!({"name": "ci"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "k1",
            "name": "ci",
            "key": "gw-secret",
            "created_at": "2025-03-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let key = auth_client(&server, "t")
        .create_api_key(&CreateApiKeyRequest { name: "ci".into() })
        .await
        .unwrap();
    assert_eq!(key.key.as_deref(), Some("gw-secret"));
}

#[tokio::test]
async fn list_api_keys_tolerates_missing_key_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/apikey/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "k1", "name": "ci", "created_at": "2025-03-01T00:00:00Z"}
        ])))
        .mount(&server)
        .await;

    let keys = auth_client(&server, "t").api_keys().await.unwrap();
    assert_eq!(keys.len(), 1);
    assert!(keys[0].key.is_none());
}

#[tokio::test]
async fn delete_endpoints_accept_empty_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/provider/p1/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    auth_client(&server, "t").delete_provider("p1").await.unwrap();
}

#[tokio::test]
async fn create_provider_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/provider/"))
        .and(body_json(json!({"provider": "anthropic", "api_key": "sk-ant"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "p1",
            "provider": "anthropic",
            "api_key": "sk-ant",
            "created_at": "2025-03-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let provider = auth_client(&server, "t")
        .create_provider(&CreateProviderRequest {
            provider: "anthropic".into(),
            api_key: "sk-ant".into(),
        })
        .await
        .unwrap();
    assert_eq!(provider.id, "p1");
}

#[tokio::test]
async fn server_errors_surface_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/apps/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = auth_client(&server, "t").apps().await.unwrap_err();
    match err {
        ClientError::ServerError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}
