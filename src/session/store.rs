use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{info, warn};

use crate::error::ApiError;
use crate::model::session::Session;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USER_ID_KEY: &str = "userId";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Process-wide session, persisted as a flat JSON key/value file so a restart
/// picks up the same login. No expiry check: a stale token stays valid until
/// the backend rejects it.
pub struct SessionStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl SessionStore {
    /// Loads existing entries from `path`. A missing or unreadable file starts logged out.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, path = %path.display(), "Ignoring corrupt session file");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.entries
            .read()
            .expect("session store poisoned")
            .get(TOKEN_KEY)
            .is_some_and(|t| !t.is_empty())
    }

    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    pub fn current(&self) -> Option<Session> {
        let entries = self.entries.read().expect("session store poisoned");

        let token = entries.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        Some(Session {
            user_id: entries.get(USER_ID_KEY).and_then(|id| id.parse().ok()),
            role: entries.get(ROLE_KEY).cloned().unwrap_or_default(),
            token: token.clone(),
        })
    }

    pub fn login(&self, session: &Session) -> Result<(), ApiError> {
        let mut entries = self.entries.write().expect("session store poisoned");

        let mut next = entries.clone();
        next.insert(TOKEN_KEY.to_string(), session.token.clone());
        next.insert(ROLE_KEY.to_string(), session.role.clone());
        match session.user_id {
            Some(id) => next.insert(USER_ID_KEY.to_string(), id.to_string()),
            None => next.remove(USER_ID_KEY),
        };

        // memory only changes once the file does
        self.persist(&next)?;
        *entries = next;
        info!(role = %session.role, user_id = ?session.user_id, "Session stored");
        Ok(())
    }

    /// Idempotent.
    pub fn logout(&self) -> Result<(), ApiError> {
        let mut entries = self.entries.write().expect("session store poisoned");

        let mut next = entries.clone();
        for key in [TOKEN_KEY, ROLE_KEY, USER_ID_KEY] {
            next.remove(key);
        }

        self.persist(&next)?;
        *entries = next;
        info!("Session cleared");
        Ok(())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), ApiError> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| ApiError::Storage(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
