use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Session file name in the data directory
const SESSION_FILE: &str = "session.json";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session token must not be empty")]
    EmptyToken,

    #[error("Session storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt session file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Whether the store currently holds a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

/// A session that passed validation: the token is never empty, and the
/// tenant id can only exist alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    token: String,
    tenant_id: Option<String>,
}

impl SessionData {
    pub fn new(token: &str, tenant_id: Option<&str>) -> Result<Self, SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self {
            token: token.to_string(),
            tenant_id: tenant_id.filter(|t| !t.is_empty()).map(str::to_string),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }
}

/// On-disk layout: two optional string fields under `token` and `tenantId`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(rename = "tenantId", default, skip_serializing_if = "Option::is_none")]
    tenant_id: Option<String>,
}

impl From<&SessionData> for StoredSession {
    fn from(data: &SessionData) -> Self {
        Self {
            token: Some(data.token.clone()),
            tenant_id: data.tenant_id.clone(),
        }
    }
}

impl StoredSession {
    /// A tenant id without a token is stale state and reads as absent.
    fn into_session(self) -> Option<SessionData> {
        let token = self.token?;
        SessionData::new(&token, self.tenant_id.as_deref()).ok()
    }
}

/// Persisted session state, shared by the route guard and the auth gateway.
///
/// `set` and `clear` take `&mut self`, so all writes go through this one API.
#[derive(Debug)]
pub struct SessionStore {
    dir: Option<PathBuf>,
    data: Option<SessionData>,
}

impl SessionStore {
    /// Create a store backed by `dir/session.json`. Nothing is read until `load`.
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir: Some(dir),
            data: None,
        }
    }

    /// Create a store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            dir: None,
            data: None,
        }
    }

    /// Create a store and load any previously persisted session.
    pub fn open(dir: PathBuf) -> Result<Self, SessionError> {
        let mut store = Self::new(dir);
        store.load()?;
        Ok(store)
    }

    /// Load session from disk. Returns whether a session was found.
    pub fn load(&mut self) -> Result<bool, SessionError> {
        let Some(path) = self.session_path() else {
            return Ok(self.data.is_some());
        };
        if !path.exists() {
            self.data = None;
            return Ok(false);
        }

        let contents = std::fs::read_to_string(&path)?;
        let stored: StoredSession = serde_json::from_str(&contents)?;
        self.data = stored.into_session();
        debug!(found = self.data.is_some(), "Session loaded");
        Ok(self.data.is_some())
    }

    /// Persist a token and optional tenant id, replacing any prior session.
    ///
    /// The in-memory state only changes once the write succeeded.
    pub fn set(&mut self, token: &str, tenant_id: Option<&str>) -> Result<(), SessionError> {
        let data = SessionData::new(token, tenant_id)?;
        if let Some(path) = self.session_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(&StoredSession::from(&data))?;
            std::fs::write(&path, contents)?;
        }
        debug!(has_tenant = data.tenant_id.is_some(), "Session stored");
        self.data = Some(data);
        Ok(())
    }

    pub fn get(&self) -> Option<&SessionData> {
        self.data.as_ref()
    }

    /// Remove both fields. Never fails: if the file cannot be deleted it is
    /// overwritten with an empty session instead, and the in-memory session
    /// is cleared regardless.
    pub fn clear(&mut self) {
        self.data = None;
        if let Some(path) = self.session_path() {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(&path) {
                    warn!(error = %e, path = %path.display(), "Failed to remove session file, blanking it");
                    if let Err(e) = Self::blank_file(&path) {
                        warn!(error = %e, path = %path.display(), "Failed to blank session file");
                    }
                }
            }
        }
        debug!("Session cleared");
    }

    /// Replace the file contents with `{}`, which loads as no session.
    fn blank_file(path: &Path) -> Result<(), SessionError> {
        let contents = serde_json::to_string(&StoredSession::default())?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the bearer token if a session exists
    pub fn token(&self) -> Option<&str> {
        self.data.as_ref().map(SessionData::token)
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.data.as_ref().and_then(SessionData::tenant_id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.is_some()
    }

    pub fn auth_state(&self) -> AuthState {
        if self.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    fn session_path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(SESSION_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_returns_same_values() {
        let mut store = SessionStore::in_memory();
        store.set("T1", Some("tenant-42")).expect("set session");

        let data = store.get().expect("session present");
        assert_eq!(data.token(), "T1");
        assert_eq!(data.tenant_id(), Some("tenant-42"));
        assert_eq!(store.auth_state(), AuthState::Authenticated);
    }

    #[test]
    fn test_set_overwrites_prior_session() {
        let mut store = SessionStore::in_memory();
        store.set("T1", Some("tenant-42")).expect("set session");
        store.set("T2", None).expect("set session");

        assert_eq!(store.token(), Some("T2"));
        assert_eq!(store.tenant_id(), None);
    }

    #[test]
    fn test_clear_always_reports_absent() {
        let mut store = SessionStore::in_memory();
        store.clear();
        assert!(store.get().is_none());

        store.set("T1", Some("tenant-42")).expect("set session");
        store.clear();
        assert!(store.get().is_none());
        assert_eq!(store.tenant_id(), None);
        assert_eq!(store.auth_state(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_empty_token_rejected_and_store_unchanged() {
        let mut store = SessionStore::in_memory();
        store.set("T1", None).expect("set session");

        let err = store.set("", Some("tenant-42")).unwrap_err();
        assert!(matches!(err, SessionError::EmptyToken));
        assert_eq!(store.token(), Some("T1"));
    }

    #[test]
    fn test_empty_tenant_id_treated_as_absent() {
        let data = SessionData::new("T1", Some("")).expect("valid session");
        assert_eq!(data.tenant_id(), None);
    }

    #[test]
    fn test_session_survives_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = SessionStore::new(dir.path().to_path_buf());
        store.set("T1", Some("tenant-42")).expect("set session");

        let reopened = SessionStore::open(dir.path().to_path_buf()).expect("open store");
        assert_eq!(reopened.token(), Some("T1"));
        assert_eq!(reopened.tenant_id(), Some("tenant-42"));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = SessionStore::new(dir.path().to_path_buf());
        store.set("T1", None).expect("set session");
        assert!(dir.path().join(SESSION_FILE).exists());

        store.clear();
        assert!(!dir.path().join(SESSION_FILE).exists());

        let reopened = SessionStore::open(dir.path().to_path_buf()).expect("open store");
        assert!(reopened.get().is_none());
    }

    #[test]
    fn test_persisted_layout_uses_token_and_tenant_id_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = SessionStore::new(dir.path().to_path_buf());
        store.set("T1", Some("tenant-42")).expect("set session");

        let contents = std::fs::read_to_string(dir.path().join(SESSION_FILE)).expect("read file");
        let value: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
        assert_eq!(value["token"], "T1");
        assert_eq!(value["tenantId"], "tenant-42");
        assert_eq!(value.as_object().map(|o| o.len()), Some(2));
    }

    #[test]
    fn test_tenant_without_token_loads_as_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(SESSION_FILE), r#"{"tenantId": "tenant-42"}"#)
            .expect("write file");

        let store = SessionStore::open(dir.path().to_path_buf()).expect("open store");
        assert!(store.get().is_none());
        assert_eq!(store.tenant_id(), None);

        std::fs::write(dir.path().join(SESSION_FILE), r#"{"token": "", "tenantId": "t"}"#)
            .expect("write file");
        let store = SessionStore::open(dir.path().to_path_buf()).expect("open store");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_blanked_file_never_reloads_cleared_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = SessionStore::new(dir.path().to_path_buf());
        store.set("T1", Some("tenant-42")).expect("set session");

        let path = dir.path().join(SESSION_FILE);
        SessionStore::blank_file(&path).expect("blank file");
        assert_eq!(std::fs::read_to_string(&path).expect("read file"), "{}");

        let reopened = SessionStore::open(dir.path().to_path_buf()).expect("open store");
        assert!(reopened.get().is_none());
        assert_eq!(reopened.auth_state(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(SESSION_FILE), "not json").expect("write file");

        let err = SessionStore::open(dir.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, SessionError::Corrupt(_)));
    }
}
