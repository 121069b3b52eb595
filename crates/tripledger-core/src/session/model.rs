//! Session model types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Authenticated user data returned by the backend on login or register.
///
/// The backend response is mirrored verbatim: anything beyond `email` lands
/// in `extra`, so nothing the server sent is lost across restarts. No local
/// expiry or validation is applied; the mirror trusts the login-time
/// response for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Email address used to sign in.
    pub email: String,
    /// Remaining fields from the backend response (id, token, name, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthUser {
    /// Create a user with only an email.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra backend field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The backend-assigned user id, if present.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.extra.get("id")
    }
}
