use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use rentroll_core::{DomainError, DomainResult};

use crate::profile::UserProfile;
use crate::roles::Role;

/// Bearer token for the backend API.
///
/// Debug output is redacted so tokens never land in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// An authenticated session: token plus the profile fetched with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: AccessToken,
    pub profile: UserProfile,
}

impl Session {
    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn is_owner(&self) -> bool {
        self.role() == Role::Owner
    }

    /// Gate for admin-only surfaces (cross-owner directories, admin reports).
    pub fn require_admin(&self) -> DomainResult<()> {
        if self.role().is_admin() {
            Ok(())
        } else {
            Err(DomainError::Unauthorized)
        }
    }
}

/// Where the active session lives.
///
/// The browser build keeps it in web storage; tests and native hosts use
/// [`InMemorySessionStore`]. Implementations must be cheap to clone behind
/// an `Arc` and safe to share across event handlers.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<Session>;
    fn set(&self, session: Session);
    fn clear(&self);
}

/// Process-local session store.
#[derive(Default)]
pub struct InMemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    // A poisoned lock only means a panic elsewhere while holding it; the
    // stored session is still valid, so recover the guard.
    fn get(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set(&self, session: Session) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = Some(session);
    }

    fn clear(&self) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
