use actix_web::http::header::HeaderMap;
use banking_api_structs::API_KEY_HEADER;
use std::fmt::Debug;
use thiserror::Error;

/// The principal attached to a request that presented the configured secret.
/// There is only one kind of client, so it carries no per-user identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    name: &'static str,
}

impl ApiClient {
    pub const NAME: &'static str = "ApiClient";

    fn new() -> Self {
        Self { name: Self::NAME }
    }

    pub fn name(&self) -> &str {
        self.name
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing credential")]
    MissingCredential,
    #[error("invalid credential")]
    InvalidCredential,
}

/// Validates the `x-api-key` header against the secret the server was
/// configured with at startup.
#[derive(Clone)]
pub struct ApiKeyAuth {
    secret: Option<String>,
}

impl ApiKeyAuth {
    /// A blank secret counts as no secret at all, which rejects every request
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|secret| !secret.trim().is_empty()),
        }
    }

    pub fn authenticate(&self, headers: &HeaderMap) -> Result<ApiClient, AuthError> {
        let mut provided = headers.get_all(API_KEY_HEADER);
        let api_key = provided.next().ok_or(AuthError::MissingCredential)?;
        if provided.next().is_some() {
            return Err(AuthError::InvalidCredential);
        }

        let secret = self
            .secret
            .as_deref()
            .ok_or(AuthError::InvalidCredential)?;
        let api_key = api_key
            .to_str()
            .map_err(|_| AuthError::InvalidCredential)?;

        if api_key == secret {
            Ok(ApiClient::new())
        } else {
            Err(AuthError::InvalidCredential)
        }
    }
}

impl Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
