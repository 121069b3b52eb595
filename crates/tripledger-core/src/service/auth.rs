//! Authentication client for the remote user endpoints.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::BackendConfig;
use crate::error::{Error, Result};
use crate::session::AuthUser;

/// Path of the login endpoint.
const LOGIN_PATH: &str = "/api/v1/users/login";

/// Path of the registration endpoint.
const REGISTER_PATH: &str = "/api/v1/users/register";

/// Credentials submitted to login or register.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Email address.
    pub email: String,
    /// Plaintext password; hashing happens server-side.
    pub password: String,
}

/// Error body the backend may return on auth failure.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the backend user endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    config: BackendConfig,
    http_client: reqwest::Client,
}

impl AuthClient {
    /// Create a client against the given backend.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Log in and return the user object to mirror into the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] carrying the backend `message` (or a generic
    /// fallback) when rejected; propagates transport failures.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthUser> {
        self.post_credentials(LOGIN_PATH, credentials, "Login failed")
            .await
    }

    /// Register a new user and return the user object to mirror into the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] carrying the backend `message` (or a generic
    /// fallback) when rejected; propagates transport failures.
    pub async fn register(&self, credentials: &Credentials) -> Result<AuthUser> {
        self.post_credentials(REGISTER_PATH, credentials, "Registration failed")
            .await
    }

    async fn post_credentials(
        &self,
        path: &str,
        credentials: &Credentials,
        fallback: &str,
    ) -> Result<AuthUser> {
        debug!("posting credentials for {} to {path}", credentials.email);

        let response = self
            .http_client
            .post(self.config.endpoint(path))
            .json(credentials)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| fallback.to_string());
            return Err(Error::Auth(message));
        }

        response.json().await.map_err(Into::into)
    }
}
