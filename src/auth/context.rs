use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::types::User;

/// An established login: the bearer token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Shared handle to the current session. Set on login or register, cleared on
/// logout, read by the API clients at request time. Cloning the handle shares
/// the underlying session.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a previously persisted session. Malformed JSON falls back
    /// silently to the unauthenticated state.
    pub fn restore(json: &str) -> Self {
        let session = serde_json::from_str::<Session>(json).ok();
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    pub fn establish(&self, session: Session) {
        *self.inner.write().expect("session lock poisoned") = Some(session);
    }

    pub fn clear(&self) {
        *self.inner.write().expect("session lock poisoned") = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().expect("session lock poisoned").is_some()
    }

    /// The bearer token, if a session is established.
    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.user.clone())
    }

    /// Serialize the current session for persistence by the host shell.
    pub fn to_json(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .and_then(|s| serde_json::to_string(s).ok())
    }
}
