#![allow(clippy::unwrap_used)]
// Integration tests for the `ApiClient` gateway using wiremock.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meatline_api::resources::customers::CustomerFilter;
use meatline_api::{AccessToken, ApiClient, Error, NoAuth, StaticTokenProvider};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let tokens = StaticTokenProvider::new(AccessToken::bearer("test-token".to_owned()));
    let client = ApiClient::new(&server.uri(), "main", Arc::new(tokens)).unwrap();
    (server, client)
}

fn empty_page() -> serde_json::Value {
    json!({ "count": 0, "data": [] })
}

// ── Header tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_default_headers_and_bearer_auth() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(header("X-Api-Version", "1"))
        .and(header("X-Branch-Id", "main"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&server)
        .await;

    client
        .list_customers(&CustomerFilter::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_no_token_sends_no_authorization_header() {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri(), "main", Arc::new(NoAuth)).unwrap();

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .mount(&server)
        .await;

    client
        .list_customers(&CustomerFilter::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_custom_token_type_prefix() {
    let server = MockServer::start().await;
    let tokens = StaticTokenProvider::new(AccessToken {
        token: "abc123".to_owned().into(),
        token_type: "Token".to_owned(),
    });
    let client = ApiClient::new(&server.uri(), "main", Arc::new(tokens)).unwrap();

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(header("Authorization", "Token abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&server)
        .await;

    client
        .list_customers(&CustomerFilter::default())
        .await
        .unwrap();
}

// ── Error normalization tests ───────────────────────────────────────

#[tokio::test]
async fn test_json_error_body_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not found"
        })))
        .mount(&server)
        .await;

    let result = client.get_customer(42).await;

    match result {
        Err(Error::Api {
            status,
            ref message,
            ref errors,
        }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not found");
            assert!(errors.is_none());
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_status_text() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers/42"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let result = client.get_customer(42).await;

    match result {
        Err(Error::Api {
            status, ref message, ..
        }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_errors_map_passes_through() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation failed",
            "errors": {
                "name": ["must not be blank"],
                "phone": ["invalid format", "too short"]
            }
        })))
        .mount(&server)
        .await;

    let body = meatline_api::resources::customers::CustomerCreateUpdate {
        name: String::new(),
        phone: Some("x".to_owned()),
        address: None,
        behaviors: None,
    };
    let result = client.create_customer(&body).await;

    match result {
        Err(Error::Api {
            status,
            ref message,
            errors: Some(ref errors),
        }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "Validation failed");
            assert_eq!(errors["phone"], vec!["invalid format", "too short"]);
        }
        other => panic!("expected Api error with field map, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_json_error_body_without_message_uses_status_text() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers/7"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "detail": "nope" })))
        .mount(&server)
        .await;

    let result = client.get_customer(7).await;

    match result {
        Err(Error::Api {
            status, ref message, ..
        }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "Forbidden");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_failure_has_no_status() {
    // Point at a closed port: the request fails before any response.
    let tokens = Arc::new(NoAuth);
    let client = ApiClient::new("http://127.0.0.1:9", "main", tokens).unwrap();

    let result = client.get_customer(1).await;

    assert!(
        matches!(result, Err(Error::Transport(_))),
        "expected Transport error, got: {result:?}"
    );
}

// ── Success decode tests ────────────────────────────────────────────

#[tokio::test]
async fn test_success_body_decodes() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "Kasap Ali",
            "phone": "+90 555 111 22 33",
            "address": null,
            "behaviors": ["LOYAL"],
            "debt": 1250.5,
            "created_at": "2024-01-10T08:00:00Z",
            "updated_at": null
        })))
        .mount(&server)
        .await;

    let customer = client.get_customer(1).await.unwrap();

    assert_eq!(customer.id, 1);
    assert_eq!(customer.name, "Kasap Ali");
    assert_eq!(customer.debt, Some(1250.5));
    assert_eq!(customer.behaviors.len(), 1);
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client.get_customer(1).await;

    assert!(
        matches!(result, Err(Error::Decode { .. })),
        "expected Decode error, got: {result:?}"
    );
}

// ── Constructor tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_invalid_branch_header_rejected_at_construction() {
    let result = ApiClient::new("http://localhost", "bad\nbranch", Arc::new(NoAuth));
    assert!(
        matches!(result, Err(Error::InvalidHeader { .. })),
        "expected InvalidHeader, got constructor success or wrong variant"
    );
}

#[tokio::test]
async fn test_invalid_base_url_rejected_at_construction() {
    let result = ApiClient::new("not a url", "main", Arc::new(NoAuth));
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}
