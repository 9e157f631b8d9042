//! Authenticated session lookup
//!
//! The queue only ever asks "who is signed in, if anyone". Sign-in and
//! sign-out are handled by the `login`/`logout` commands, which maintain
//! `.snackq/session.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SnackError};
use crate::paths::{format_relative_path, session_path};

const UID_LEN: usize = 20;

/// A signed-in operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: String,
}

impl User {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
        }
    }
}

/// Random operator uid, assigned at sign-in.
fn generate_uid() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(UID_LEN)
        .map(char::from)
        .collect()
}

/// Source of the current authenticated user.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;
}

/// A fixed session, useful for injection in tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<User>,
}

impl StaticSession {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}

/// Session persisted in a YAML file under the snackq root.
///
/// The file is re-read on every lookup so a `logout` from another terminal
/// is observed the next time the queue asks.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl Default for FileSession {
    fn default() -> Self {
        Self::new(session_path())
    }
}

impl FileSession {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored user, distinguishing a missing file from a broken one.
    pub fn load(&self) -> Result<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| {
            SnackError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read session at {}: {}",
                    format_relative_path(&self.path),
                    e
                ),
            ))
        })?;
        let user: User = serde_yaml_ng::from_str(&content)?;
        Ok(Some(user))
    }

    /// Sign in as `email`, replacing any existing session.
    pub fn sign_in(&self, email: &str) -> Result<User> {
        let email = email.trim();
        if !is_plausible_email(email) {
            return Err(SnackError::InvalidEmail(email.to_string()));
        }

        let user = User::new(generate_uid(), email);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_yaml_ng::to_string(&user)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        tracing::info!(email = %user.email, "signed in");
        Ok(user)
    }

    /// Remove the stored session. Returns whether a session existed.
    pub fn sign_out(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        tracing::info!("signed out");
        Ok(true)
    }
}

impl SessionProvider for FileSession {
    fn current_user(&self) -> Option<User> {
        match self.load() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file: {e}");
                None
            }
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_static_session() {
        let user = User::new("u1", "ops@example.com");
        assert_eq!(
            StaticSession::signed_in(user.clone()).current_user(),
            Some(user)
        );
        assert_eq!(StaticSession::signed_out().current_user(), None);
    }

    #[test]
    fn test_file_session_round_trip() {
        let dir = TempDir::new().unwrap();
        let session = FileSession::new(dir.path().join("session.yaml"));
        assert_eq!(session.current_user(), None);

        let user = session.sign_in("ops@example.com").unwrap();
        assert_eq!(session.current_user(), Some(user.clone()));
        assert_eq!(user.email, "ops@example.com");
        assert_eq!(user.uid.len(), UID_LEN);
        assert!(user.uid.chars().all(|c| c.is_ascii_alphanumeric()));

        // Signing in again starts a new session
        let again = session.sign_in("ops@example.com").unwrap();
        assert_ne!(again.uid, user.uid);

        assert!(session.sign_out().unwrap());
        assert_eq!(session.current_user(), None);
        assert!(!session.sign_out().unwrap());
    }

    #[test]
    fn test_file_session_rejects_bad_email() {
        let dir = TempDir::new().unwrap();
        let session = FileSession::new(dir.path().join("session.yaml"));
        assert!(matches!(
            session.sign_in("not-an-email"),
            Err(SnackError::InvalidEmail(_))
        ));
        assert!(session.sign_in("a@b@c").is_err());
        assert!(session.sign_in("@example.com").is_err());
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_corrupt_session_counts_as_signed_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.yaml");
        fs::write(&path, "{{ not yaml").unwrap();
        let session = FileSession::new(path);
        assert!(session.load().is_err());
        assert_eq!(session.current_user(), None);
    }
}
