// Error taxonomy for the Meatline API client.
//
// Every failure surfaces through one enum. The gateway never retries and
// never swallows an error; each variant maps to a distinct failure stage.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors produced by the API client.
#[derive(Debug, Error)]
pub enum Error {
    /// The backend answered with a non-2xx status.
    ///
    /// `message` comes from the response body's `message` field when the
    /// body is JSON, otherwise from the HTTP status text. `errors`, when
    /// present, is the backend's field-to-messages validation map, passed
    /// through for form-level display.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        errors: Option<BTreeMap<String, Vec<String>>>,
    },

    /// The request failed before any response was obtained (DNS,
    /// connection refused, aborted mid-flight). Carries no status.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response body could not be decoded into the expected type.
    #[error("failed to decode response: {message}")]
    Decode { message: String, body: String },

    /// Failure on the multipart upload path. Intentionally flatter than
    /// [`Error::Api`]: the upload endpoint reports a bare message.
    #[error("upload failed: {message}")]
    Upload { message: String },

    /// The configured base URL (or a joined path) is not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A branch or token value cannot be encoded as an HTTP header.
    #[error("invalid header value: {message}")]
    InvalidHeader { message: String },
}
