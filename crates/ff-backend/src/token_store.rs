//! Session token persistence.
//!
//! Keeps the backend session token between invocations so the startup
//! session lookup can find an existing login.
//!
//! Lookup order: OS keyring → `FLAVORFIND_SESSION__TOKEN` env → file
//! (`~/.flavorfind/session`, mode 0600).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BackendError;

const KEYRING_USER: &str = "session-token";
const TOKEN_ENV: &str = "FLAVORFIND_SESSION__TOKEN";
const SESSION_FILE_NAME: &str = "session";

/// Where a loaded token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        })
    }
}

/// Keyring-first token store with env and file fallbacks.
#[derive(Debug, Clone)]
pub struct TokenStore {
    service: String,
    use_keyring: bool,
    file_path: Option<PathBuf>,
}

impl TokenStore {
    /// Store under the given keyring service, with `~/.flavorfind/session`
    /// as the file fallback.
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            use_keyring: true,
            file_path: dirs::home_dir().map(|h| h.join(".flavorfind").join(SESSION_FILE_NAME)),
        }
    }

    /// File-backed store that never touches the OS keyring.
    #[must_use]
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            service: String::new(),
            use_keyring: false,
            file_path: Some(path.into()),
        }
    }

    /// Persist a token. Falls back to the file when the keyring is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::TokenStore`] if neither keyring nor file
    /// storage succeeds.
    pub fn store(&self, token: &str) -> Result<(), BackendError> {
        if let Some(entry) = self.entry() {
            match entry.set_password(token) {
                Ok(()) => return Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                }
            }
        }
        self.store_file(token)
    }

    /// Load a token, if any tier has one.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        self.load_with_source().map(|(token, _)| token)
    }

    /// Which tier the current token comes from.
    #[must_use]
    pub fn detect_source(&self) -> Option<TokenSource> {
        self.load_with_source().map(|(_, source)| source)
    }

    /// Remove the token from keyring and file.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::TokenStore`] if the session file exists but
    /// cannot be removed.
    pub fn delete(&self) -> Result<(), BackendError> {
        if let Some(entry) = self.entry() {
            // Absent credentials are fine.
            let _ = entry.delete_credential();
        }

        if let Some(path) = &self.file_path
            && path.exists()
        {
            fs::remove_file(path).map_err(|e| {
                BackendError::TokenStore(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    fn load_with_source(&self) -> Option<(String, TokenSource)> {
        if let Some(entry) = self.entry()
            && let Ok(token) = entry.get_password()
            && !token.is_empty()
        {
            return Some((token, TokenSource::Keyring));
        }

        if let Ok(token) = std::env::var(TOKEN_ENV)
            && !token.is_empty()
        {
            return Some((token, TokenSource::Env));
        }

        self.file_path
            .as_deref()
            .and_then(load_file)
            .map(|token| (token, TokenSource::File))
    }

    fn entry(&self) -> Option<keyring::Entry> {
        if !self.use_keyring {
            return None;
        }
        match keyring::Entry::new(&self.service, KEYRING_USER) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    fn store_file(&self, token: &str) -> Result<(), BackendError> {
        let path = self.file_path.as_deref().ok_or_else(|| {
            BackendError::TokenStore("home directory not found; cannot store session".into())
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BackendError::TokenStore(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        fs::write(path, token)
            .map_err(|e| BackendError::TokenStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                BackendError::TokenStore(format!("chmod {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }
}

fn load_file(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_points_under_home() {
        let store = TokenStore::new("flavorfind-test");
        if let Some(path) = store.file_path {
            assert!(path.ends_with(".flavorfind/session"));
        }
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("nested").join("session");
        let store = TokenStore::file_only(&path);

        store.store("tok_abc123").expect("store");
        assert_eq!(store.load().as_deref(), Some("tok_abc123"));
        assert_eq!(store.detect_source(), Some(TokenSource::File));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        store.delete().expect("delete");
        assert!(!path.exists());
        assert!(store.load().is_none());
    }

    #[test]
    fn whitespace_only_file_is_ignored() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session");
        fs::write(&path, "   \n  ").expect("write");
        assert!(load_file(&path).is_none());
    }

    #[test]
    fn delete_without_file_is_ok() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = TokenStore::file_only(tmp.path().join("missing"));
        assert!(store.delete().is_ok());
    }
}
