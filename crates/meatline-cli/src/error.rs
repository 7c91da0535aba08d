//! CLI error types with miette diagnostics.
//!
//! Maps `meatline_api::Error` variants into user-facing errors with
//! actionable help text and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the Meatline backend")]
    #[diagnostic(
        code(meatline::connection_failed),
        help(
            "Check that the base URL is correct and the backend is reachable.\n\
             Override with --base-url or MEATLINE_BASE_URL."
        )
    )]
    ConnectionFailed {
        #[source]
        source: meatline_api::Error,
    },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(meatline::auth_failed),
        help(
            "Verify your access token.\n\
             Set MEATLINE_TOKEN or add `token` to your profile."
        )
    )]
    AuthFailed,

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource} '{identifier}' not found")]
    #[diagnostic(code(meatline::not_found))]
    NotFound { resource: String, identifier: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(meatline::api_error))]
    Api { status: u16, message: String },

    #[error("Upload failed: {message}")]
    #[diagnostic(code(meatline::upload))]
    Upload { message: String },

    #[error("Unexpected response from the backend: {message}")]
    #[diagnostic(code(meatline::decode))]
    Decode { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(meatline::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(meatline::config))]
    Config(#[from] meatline_config::ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── meatline_api::Error → CliError mapping ──────────────────────────

impl From<meatline_api::Error> for CliError {
    fn from(err: meatline_api::Error) -> Self {
        match err {
            meatline_api::Error::Api { status, message, .. } => {
                if status == 401 || status == 403 {
                    Self::AuthFailed
                } else {
                    Self::Api { status, message }
                }
            }

            meatline_api::Error::Upload { message } => Self::Upload { message },

            meatline_api::Error::Transport(e) => Self::ConnectionFailed {
                source: meatline_api::Error::Transport(e),
            },

            meatline_api::Error::Decode { message, .. } => Self::Decode { message },

            meatline_api::Error::InvalidUrl(e) => Self::Validation {
                field: "base_url".into(),
                reason: e.to_string(),
            },

            meatline_api::Error::InvalidHeader { message } => Self::Validation {
                field: "headers".into(),
                reason: message,
            },
        }
    }
}
