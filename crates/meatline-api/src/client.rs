// Hand-crafted async HTTP client for the Meatline backend REST API.
//
// Single choke point for every JSON call: base URL, version/branch headers,
// per-request authorization, and uniform error normalization. Endpoint
// modules under `resources/` add inherent methods on top of the verb
// helpers here, keeping this module focused on transport mechanics.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::TokenProvider;
use crate::error::Error;

/// Header carrying the fixed API version marker.
pub const API_VERSION_HEADER: &str = "X-Api-Version";
/// Value of the API version marker.
pub const API_VERSION: &str = "1";
/// Header carrying the branch identifier.
pub const BRANCH_HEADER: &str = "X-Branch-Id";

// ── Error response shape from the backend ────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<std::collections::BTreeMap<String, Vec<String>>>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Meatline backend.
///
/// Holds the base URL and an injected [`TokenProvider`]; both are
/// read-only from the client's perspective. The provider is consulted on
/// every request, so token rotation in an external store takes effect
/// without rebuilding the client.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client with default transport settings.
    ///
    /// `branch` lands in the `X-Branch-Id` default header; the API version
    /// marker is fixed. The base URL may or may not carry a trailing slash.
    pub fn new(
        base_url: &str,
        branch: &str,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, Error> {
        Self::build(base_url, branch, None, tokens)
    }

    /// Build a client with a request timeout on the underlying transport.
    ///
    /// The gateway itself enforces no deadline; the timeout lives in the
    /// `reqwest` client and surfaces as [`Error::Transport`].
    pub fn with_timeout(
        base_url: &str,
        branch: &str,
        timeout: Duration,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, Error> {
        Self::build(base_url, branch, Some(timeout), tokens)
    }

    /// Wrap an existing `reqwest::Client` (caller manages default headers).
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            http,
            base_url: ensure_trailing_slash(base_url),
            tokens,
        }
    }

    fn build(
        base_url: &str,
        branch: &str,
        timeout: Option<Duration>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        let branch_value = HeaderValue::from_str(branch).map_err(|e| Error::InvalidHeader {
            message: format!("invalid branch header value: {e}"),
        })?;
        headers.insert(BRANCH_HEADER, branch_value);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let base_url = ensure_trailing_slash(Url::parse(base_url)?);
        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (which may already carry a query string) onto
    /// the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining `customers?page=2` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── Authorization ────────────────────────────────────────────────

    /// Attach the `Authorization` header when a token is available.
    fn authorize(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, Error> {
        let Some(access) = self.tokens.access_token() else {
            return Ok(builder);
        };
        let raw = format!("{} {}", access.token_type, access.token.expose_secret());
        let mut value = HeaderValue::from_str(&raw).map_err(|e| Error::InvalidHeader {
            message: format!("invalid authorization header value: {e}"),
        })?;
        value.set_sensitive(true);
        Ok(builder.header(AUTHORIZATION, value))
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.authorize(self.http.get(url))?.send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.authorize(self.http.post(url).json(body))?.send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn post_unit<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.authorize(self.http.post(url).json(body))?.send().await?;
        handle_empty(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("PUT {url}");

        let resp = self.authorize(self.http.put(url).json(body))?.send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("PATCH {url}");

        let resp = self.authorize(self.http.patch(url).json(body))?.send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.authorize(self.http.delete(url))?.send().await?;
        handle_empty(resp).await
    }

    // ── Multipart access for the upload sub-gateway ──────────────────

    /// Issue an authorized multipart POST. Bypasses the JSON helpers so the
    /// platform can set the multipart boundary; used only by `upload`.
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<reqwest::Response, Error> {
        let url = self.url(path);
        debug!("POST {url} (multipart)");

        Ok(self
            .authorize(self.http.post(url).multipart(form))?
            .send()
            .await?)
    }
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

// ── Response handling ────────────────────────────────────────────────

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    if status.is_success() {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Decode {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
    let raw = resp.text().await.unwrap_or_default();

    if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
        Error::Api {
            status: status.as_u16(),
            message: err.message.unwrap_or_else(|| status_text(status)),
            errors: err.errors,
        }
    } else {
        Error::Api {
            status: status.as_u16(),
            message: status_text(status),
            errors: None,
        }
    }
}

fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.to_string(), str::to_owned)
}
