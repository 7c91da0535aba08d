//! Token plumbing for the gateway.
//!
//! The client never owns or refreshes credentials. It reads an injected
//! [`TokenProvider`] on every request, so an external store can rotate the
//! token without touching the client, and tests can substitute a fake
//! without process-wide state.

use secrecy::SecretString;

/// Default token-type prefix for the `Authorization` header.
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// An access token plus the scheme it is sent under.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: SecretString,
    /// Scheme prefix, e.g. `Bearer`.
    pub token_type: String,
}

impl AccessToken {
    /// A `Bearer`-scheme token.
    pub fn bearer(token: impl Into<SecretString>) -> Self {
        Self {
            token: token.into(),
            token_type: DEFAULT_TOKEN_TYPE.to_owned(),
        }
    }
}

/// Source of the access token attached to outgoing requests.
///
/// Consulted once per request; returning `None` sends the request without
/// an `Authorization` header.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self) -> Option<AccessToken>;
}

/// A fixed token, resolved once (from config or environment).
pub struct StaticTokenProvider {
    token: AccessToken,
}

impl StaticTokenProvider {
    pub fn new(token: AccessToken) -> Self {
        Self { token }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn access_token(&self) -> Option<AccessToken> {
        Some(self.token.clone())
    }
}

/// No authentication: every request goes out bare.
pub struct NoAuth;

impl TokenProvider for NoAuth {
    fn access_token(&self) -> Option<AccessToken> {
        None
    }
}
