//! Multipart file-upload sub-gateway.
//!
//! Uploads bypass the JSON verb helpers: the request must not carry
//! `Content-Type: application/json`, and the platform sets the multipart
//! boundary. Version/branch headers and authorization still apply.
//!
//! Batch semantics are all-or-nothing from the caller's view: any non-2xx
//! response fails the whole call, and nothing is reported about files the
//! server may have processed before failing.

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;

/// Endpoint accepting `multipart/form-data` uploads.
pub const UPLOAD_ENDPOINT: &str = "files/upload";
/// Field name shared by every part, single or batch.
pub const UPLOAD_FIELD: &str = "files";

/// One file to send: raw bytes plus naming metadata.
#[derive(Debug, Clone)]
pub struct UploadSource {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// MIME type hint; the server sniffs when absent.
    pub content_type: Option<String>,
}

/// Descriptor returned for a stored file. The `id` is the foreign key other
/// entities reference (e.g. a category's `image_id`).
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The upload endpoint answers with either a bare descriptor or an array.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl ApiClient {
    /// Upload a single file, returning its descriptor.
    ///
    /// The server sometimes wraps the descriptor in a one-element array;
    /// both shapes normalize to the bare descriptor here.
    pub async fn upload_file(&self, source: UploadSource) -> Result<UploadedFile, Error> {
        let form = Form::new().part(UPLOAD_FIELD, make_part(source)?);
        let resp = self.post_multipart(UPLOAD_ENDPOINT, form).await?;

        match handle_upload_response(resp).await? {
            OneOrMany::One(file) => Ok(file),
            OneOrMany::Many(files) => files.into_iter().next().ok_or_else(|| Error::Upload {
                message: "server returned no file descriptor".to_owned(),
            }),
        }
    }

    /// Upload a batch of files in one request.
    ///
    /// An empty batch resolves to an empty list without touching the
    /// network.
    pub async fn upload_files(
        &self,
        sources: Vec<UploadSource>,
    ) -> Result<Vec<UploadedFile>, Error> {
        if sources.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = sources.len(), "uploading file batch");

        let mut form = Form::new();
        for source in sources {
            form = form.part(UPLOAD_FIELD, make_part(source)?);
        }
        let resp = self.post_multipart(UPLOAD_ENDPOINT, form).await?;

        match handle_upload_response(resp).await? {
            OneOrMany::Many(files) => Ok(files),
            OneOrMany::One(file) => Ok(vec![file]),
        }
    }
}

fn make_part(source: UploadSource) -> Result<Part, Error> {
    let part = Part::bytes(source.bytes).file_name(source.file_name);
    match source.content_type {
        Some(mime) => part.mime_str(&mime).map_err(|e| Error::Upload {
            message: format!("invalid content type {mime:?}: {e}"),
        }),
        None => Ok(part),
    }
}

/// Upload failures are flatter than the JSON path's: a bare message, taken
/// from the body's `message` field or the HTTP status text.
async fn handle_upload_response(
    resp: reqwest::Response,
) -> Result<OneOrMany<UploadedFile>, Error> {
    #[derive(Deserialize)]
    struct UploadError {
        message: Option<String>,
    }

    let status = resp.status();
    if status.is_success() {
        let body = resp.text().await?;
        return serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Decode {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        });
    }

    let raw = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<UploadError>(&raw)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map_or_else(|| status.to_string(), str::to_owned)
        });
    Err(Error::Upload { message })
}
