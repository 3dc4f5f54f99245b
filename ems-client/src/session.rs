//! Session store
//!
//! Holds the current-user identity, bearer token, and role, persisted
//! as JSON in the configured data directory so a reload restores the
//! session without re-authenticating. Presence of a token is the sole
//! local signal of "authenticated"; token validity is discovered
//! lazily when a subsequent API call is rejected.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use shared::access::AccessRole;
use shared::client::{LoginRequest, RegisterRequest, UserInfo};

use crate::api::ResourceClient;
use crate::error::ClientResult;

const SESSION_FILE: &str = "session.json";

/// Authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    /// Raw role string from the backend. Values outside the closed
    /// role set carry zero privilege.
    pub role: String,
    pub token: String,
}

impl Session {
    fn from_login(token: String, user: UserInfo) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            role: user.role,
            token,
        }
    }

    /// Parses the role string leniently; unknown roles yield `None`.
    pub fn access_role(&self) -> Option<AccessRole> {
        AccessRole::from_str(&self.role).ok()
    }
}

/// Session store: authentication flows plus durable persistence.
pub struct SessionStore {
    api: ResourceClient,
    file_path: PathBuf,
    current: RwLock<Option<Session>>,
    /// False until `restore()` (or a login) has run, so the route
    /// guard can render a loading state instead of redirecting.
    restored: AtomicBool,
    /// Bumped on every login/logout. The entity store snapshots this
    /// before each request and discards responses that complete under
    /// a different auth context.
    epoch: AtomicU64,
}

impl SessionStore {
    pub fn new(api: ResourceClient, data_dir: impl AsRef<Path>) -> Self {
        Self {
            api,
            file_path: data_dir.as_ref().join(SESSION_FILE),
            current: RwLock::new(None),
            restored: AtomicBool::new(false),
            epoch: AtomicU64::new(0),
        }
    }

    // ---- Authentication flows ----

    /// Logs in against the backend. On success the session is
    /// persisted and the bearer token installed on the transport; on
    /// failure any prior session is left untouched.
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<Session> {
        let response = self.api.login(credentials).await?;
        let session = Session::from_login(response.token, response.user);
        self.install(session.clone());
        tracing::info!(username = %session.username, role = %session.role, "logged in");
        Ok(session)
    }

    /// Registers a new user. When the backend logs the user in
    /// immediately (token in the response), the persistence contract
    /// matches `login`; otherwise only the created user is returned.
    pub async fn register(&self, user_data: &RegisterRequest) -> ClientResult<Option<Session>> {
        let response = self.api.register(user_data).await?;
        match (response.token, response.user) {
            (Some(token), Some(user)) => {
                let session = Session::from_login(token, user);
                self.install(session.clone());
                tracing::info!(username = %session.username, "registered and logged in");
                Ok(Some(session))
            }
            _ => Ok(None),
        }
    }

    /// Clears the persisted and in-memory session unconditionally.
    /// Never fails; filesystem trouble is logged and swallowed.
    pub fn logout(&self) {
        if self.file_path.exists() {
            if let Err(e) = std::fs::remove_file(&self.file_path) {
                tracing::warn!(error = %e, "failed to remove persisted session");
            }
        }
        {
            let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
            *guard = None;
        }
        self.api.http().set_token(None);
        self.restored.store(true, Ordering::SeqCst);
        self.epoch.fetch_add(1, Ordering::SeqCst);
        tracing::info!("logged out");
    }

    /// Restores a persisted session, if any, without a network
    /// round-trip. No local expiry validation is performed.
    pub fn restore(&self) -> ClientResult<Option<Session>> {
        let result = self.load_persisted();
        self.restored.store(true, Ordering::SeqCst);
        match result {
            Ok(Some(session)) => {
                self.api.http().set_token(Some(session.token.clone()));
                {
                    let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
                    *guard = Some(session.clone());
                }
                self.epoch.fetch_add(1, Ordering::SeqCst);
                tracing::info!(username = %session.username, "restored persisted session");
                Ok(Some(session))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                tracing::warn!(error = %e, "failed to restore persisted session");
                Err(e)
            }
        }
    }

    // ---- Pure reads ----

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    pub fn role(&self) -> Option<AccessRole> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .and_then(Session::access_role)
    }

    pub fn current_user(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// True while no restore attempt has completed yet.
    pub fn is_restoring(&self) -> bool {
        !self.restored.load(Ordering::SeqCst)
    }

    /// Current auth context generation.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    // ---- Persistence ----

    fn install(&self, session: Session) {
        self.api.http().set_token(Some(session.token.clone()));
        if let Err(e) = self.persist(&session) {
            tracing::warn!(error = %e, "failed to persist session");
        }
        {
            let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
            *guard = Some(session);
        }
        self.restored.store(true, Ordering::SeqCst);
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    fn persist(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(username = %session.username, "session persisted");
        Ok(())
    }

    fn load_persisted(&self) -> ClientResult<Option<Session>> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.file_path)?;
        let session: Session = serde_json::from_str(&content)?;
        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::http::HttpClient;
    use tempfile::TempDir;

    fn store_in(dir: &Path) -> SessionStore {
        let config = ClientConfig::default().with_data_dir(dir);
        let http = HttpClient::new(&config).unwrap();
        SessionStore::new(ResourceClient::new(http), dir)
    }

    fn sample_session() -> Session {
        Session {
            user_id: 7,
            username: "admin".into(),
            role: "ADMIN".into(),
            token: "tok-123".into(),
        }
    }

    #[test]
    fn fresh_store_is_restoring_until_restore_runs() {
        let dir = TempDir::new().unwrap();
        let store = store_in(dir.path());
        assert!(store.is_restoring());
        assert!(!store.is_authenticated());

        let restored = store.restore().unwrap();
        assert!(restored.is_none());
        assert!(!store.is_restoring());
    }

    #[test]
    fn persisted_session_survives_a_new_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(dir.path());
        store.install(sample_session());
        assert!(store.is_authenticated());
        assert_eq!(store.role(), Some(AccessRole::Admin));

        // Simulated reload: a brand-new store over the same directory.
        let reloaded = store_in(dir.path());
        let session = reloaded.restore().unwrap().unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.token, "tok-123");
        assert!(reloaded.is_authenticated());
        assert_eq!(
            reloaded.api.http().token().as_deref(),
            Some("tok-123"),
            "restore must install the bearer token"
        );
    }

    #[test]
    fn logout_clears_everything_and_bumps_epoch() {
        let dir = TempDir::new().unwrap();
        let store = store_in(dir.path());
        store.install(sample_session());
        let epoch_before = store.epoch();

        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(store.role(), None);
        assert!(store.api.http().token().is_none());
        assert!(store.epoch() > epoch_before);
        assert!(store.restore().unwrap().is_none());
    }

    #[test]
    fn logout_without_session_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let store = store_in(dir.path());
        store.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn unknown_role_yields_zero_privilege() {
        let dir = TempDir::new().unwrap();
        let store = store_in(dir.path());
        let mut session = sample_session();
        session.role = "SUPERVISOR".into();
        store.install(session);
        assert!(store.is_authenticated());
        assert_eq!(store.role(), None);
    }
}
