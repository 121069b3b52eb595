//! Session state mirrored to disk.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::model::AuthUser;
use crate::Result;

/// File name of the mirrored session inside the data directory.
pub const SESSION_FILE: &str = "auth_user.json";

/// In-memory session state with a persistent mirror.
///
/// The persisted copy is read once when the mirror is opened; afterwards the
/// in-memory value is authoritative and every change is written through.
/// There is no global session state; callers hold and pass the mirror
/// explicitly.
pub struct SessionMirror {
    path: PathBuf,
    current: Option<AuthUser>,
}

impl SessionMirror {
    /// Open the mirror, restoring any previously persisted session.
    ///
    /// A missing or unreadable mirror file means logged out; unreadable
    /// content is logged and ignored.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!("ignoring unreadable session file {}: {err}", path.display());
                    None
                }
            },
            Err(_) => None,
        };
        Self { path, current }
    }

    /// Open the mirror inside the default data directory, creating the
    /// directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open_default() -> Result<Self> {
        let dir = crate::config::data_dir();
        fs::create_dir_all(&dir)?;
        Ok(Self::open(dir.join(SESSION_FILE)))
    }

    /// Set the current user and mirror it to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror file cannot be written.
    pub fn login(&mut self, user: AuthUser) -> Result<()> {
        let json = serde_json::to_string(&user)?;
        fs::write(&self.path, json)?;
        debug!("session mirrored for {}", user.email);
        self.current = Some(user);
        Ok(())
    }

    /// Clear the current user and its persisted mirror.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror file exists but cannot be removed.
    pub fn logout(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.current = None;
        Ok(())
    }

    /// The currently authenticated user, if any.
    #[must_use]
    pub fn current(&self) -> Option<&AuthUser> {
        self.current.as_ref()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn user() -> AuthUser {
        AuthUser::new("user@example.com").with_field("id", json!(42))
    }

    #[test]
    fn starts_logged_out_without_mirror_file() {
        let dir = TempDir::new().unwrap();
        let mirror = SessionMirror::open(dir.path().join(SESSION_FILE));
        assert!(!mirror.is_logged_in());
        assert!(mirror.current().is_none());
    }

    #[test]
    fn login_sets_memory_and_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SESSION_FILE);
        let mut mirror = SessionMirror::open(&path);

        mirror.login(user()).unwrap();
        assert!(mirror.is_logged_in());
        assert!(path.exists());
    }

    #[test]
    fn session_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SESSION_FILE);
        SessionMirror::open(&path).login(user()).unwrap();

        let restored = SessionMirror::open(&path);
        assert_eq!(restored.current(), Some(&user()));
    }

    #[test]
    fn logout_clears_memory_and_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SESSION_FILE);
        let mut mirror = SessionMirror::open(&path);
        mirror.login(user()).unwrap();

        mirror.logout().unwrap();
        assert!(!mirror.is_logged_in());
        assert!(!path.exists());
    }

    #[test]
    fn logout_while_logged_out_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut mirror = SessionMirror::open(dir.path().join(SESSION_FILE));
        mirror.logout().unwrap();
        assert!(!mirror.is_logged_in());
    }

    #[test]
    fn corrupt_mirror_file_means_logged_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SESSION_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let mirror = SessionMirror::open(&path);
        assert!(!mirror.is_logged_in());
    }
}
