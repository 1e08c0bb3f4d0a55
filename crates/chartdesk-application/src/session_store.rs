//! Session store: the single cross-view holder of the authenticated
//! identity.
//!
//! Replaces the original ambient auth singleton with an explicit context
//! object. Views read the current session through [`SessionStore::current`]
//! and observe transitions through [`SessionStore::subscribe`]; only the
//! store's own `login`/`logout`/`restore` operations mutate the state.

use chartdesk_core::auth::{AuthService, AuthSession, TokenSource};
use chartdesk_core::error::Result;
use chartdesk_infrastructure::storage::{SessionTokenStorage, StoredSession};
use std::sync::Arc;
use tokio::sync::watch;

/// Holds the current authenticated identity (or none) and notifies
/// subscribers on every transition.
pub struct SessionStore {
    auth: Arc<dyn AuthService>,
    storage: Arc<SessionTokenStorage>,
    state: watch::Sender<Option<AuthSession>>,
}

impl SessionStore {
    /// Creates a store in the logged-out state.
    ///
    /// Call [`restore`](Self::restore) once before any dependent view runs,
    /// so an existing valid session is visible from the first render.
    pub fn new(auth: Arc<dyn AuthService>, storage: Arc<SessionTokenStorage>) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            auth,
            storage,
            state,
        }
    }

    /// Restores a persisted session, if one exists and is still valid.
    ///
    /// An expired or invalid token resolves to the logged-out state (and
    /// clears the stored token) rather than failing; a transport failure
    /// also resolves to logged-out but keeps the token for a later retry.
    pub async fn restore(&self) {
        let stored = match self.storage.load() {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("[Session] Failed to read persisted session: {e}");
                None
            }
        };

        let Some(StoredSession { access_token }) = stored else {
            return;
        };

        match self.auth.current_user(&access_token).await {
            Ok(Some(user)) => {
                tracing::info!("[Session] Restored session for {}", user.email);
                self.state
                    .send_replace(Some(AuthSession { user, access_token }));
            }
            Ok(None) => {
                tracing::info!("[Session] Persisted session expired, clearing");
                if let Err(e) = self.storage.clear() {
                    tracing::warn!("[Session] Failed to clear stale session: {e}");
                }
            }
            Err(e) => {
                // The token may still be good; keep it and start logged out.
                tracing::warn!("[Session] Session restore failed: {e}");
            }
        }
    }

    /// Exchanges credentials for a session and makes it current.
    ///
    /// Invalid credentials surface as `ChartdeskError::InvalidCredentials`;
    /// the state is left untouched on any failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let session = self.auth.login(email, password).await?;

        if let Err(e) = self.storage.save(&StoredSession {
            access_token: session.access_token.clone(),
        }) {
            // The in-process session still works; only restore-on-startup
            // is affected.
            tracing::warn!("[Session] Failed to persist session: {e}");
        }

        tracing::info!("[Session] Signed in as {}", session.user.email);
        self.state.send_replace(Some(session.clone()));
        Ok(session)
    }

    /// Clears the current identity.
    ///
    /// The remote revoke is best-effort; local state and the persisted
    /// token are always cleared.
    pub async fn logout(&self) {
        if let Some(session) = self.current() {
            if let Err(e) = self.auth.logout(&session.access_token).await {
                tracing::warn!("[Session] Remote logout failed: {e}");
            }
        }
        if let Err(e) = self.storage.clear() {
            tracing::warn!("[Session] Failed to clear persisted session: {e}");
        }
        self.state.send_replace(None);
        tracing::info!("[Session] Signed out");
    }

    /// The current session, or `None` while logged out.
    pub fn current(&self) -> Option<AuthSession> {
        self.state.borrow().clone()
    }

    /// Subscribes to session transitions.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthSession>> {
        self.state.subscribe()
    }
}

impl TokenSource for SessionStore {
    fn access_token(&self) -> Option<String> {
        self.current().map(|session| session.access_token)
    }
}
