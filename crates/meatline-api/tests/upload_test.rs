#![allow(clippy::unwrap_used)]
// Integration tests for the multipart upload sub-gateway.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meatline_api::{ApiClient, Error, NoAuth, UploadSource};

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri(), "main", Arc::new(NoAuth)).unwrap();
    (server, client)
}

fn png(name: &str) -> UploadSource {
    UploadSource {
        file_name: name.to_owned(),
        bytes: vec![0x89, 0x50, 0x4E, 0x47],
        content_type: Some("image/png".to_owned()),
    }
}

fn descriptor(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "type": "image/png",
        "size": 4,
        "url": format!("https://cdn.example.com/files/{id}"),
        "thumbnail_url": null,
        "created_at": "2024-06-15T10:30:00Z",
        "updated_at": null
    })
}

// ── Single upload ───────────────────────────────────────────────────

#[tokio::test]
async fn test_upload_file_bare_object_response() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/files/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(descriptor(7, "cut.png")))
        .expect(1)
        .mount(&server)
        .await;

    let file = client.upload_file(png("cut.png")).await.unwrap();

    assert_eq!(file.id, 7);
    assert_eq!(file.name.as_deref(), Some("cut.png"));
}

#[tokio::test]
async fn test_upload_file_array_response_takes_first() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/files/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([descriptor(7, "a.png"), descriptor(8, "b.png")])),
        )
        .mount(&server)
        .await;

    let file = client.upload_file(png("a.png")).await.unwrap();

    assert_eq!(file.id, 7);
}

#[tokio::test]
async fn test_upload_request_is_multipart_not_json() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/files/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(descriptor(1, "x.png")))
        .mount(&server)
        .await;

    client.upload_file(png("x.png")).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(
        content_type.starts_with("multipart/form-data"),
        "expected multipart content type, got: {content_type}"
    );
}

// ── Batch upload ────────────────────────────────────────────────────

#[tokio::test]
async fn test_upload_files_empty_batch_skips_network() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/files/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let files = client.upload_files(Vec::new()).await.unwrap();

    assert!(files.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_files_batch_normalizes_to_array() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/files/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([descriptor(1, "a.png"), descriptor(2, "b.png")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let files = client
        .upload_files(vec![png("a.png"), png("b.png")])
        .await
        .unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[1].id, 2);
}

#[tokio::test]
async fn test_upload_files_single_object_response_wraps() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/files/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(descriptor(3, "c.png")))
        .mount(&server)
        .await;

    let files = client.upload_files(vec![png("c.png")]).await.unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].id, 3);
}

// ── Failure shape ───────────────────────────────────────────────────

#[tokio::test]
async fn test_upload_failure_is_flat_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/files/upload"))
        .respond_with(ResponseTemplate::new(413).set_body_json(json!({
            "message": "File too large"
        })))
        .mount(&server)
        .await;

    let result = client.upload_file(png("big.png")).await;

    match result {
        Err(Error::Upload { ref message }) => assert_eq!(message, "File too large"),
        other => panic!("expected Upload error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_failure_without_body_uses_status_text() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/files/upload"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.upload_file(png("x.png")).await;

    match result {
        Err(Error::Upload { ref message }) => assert_eq!(message, "Internal Server Error"),
        other => panic!("expected Upload error, got: {other:?}"),
    }
}
