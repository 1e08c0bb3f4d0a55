//! Auth service trait.
//!
//! Defines the boundary to the remote authentication service.

use super::model::{AuthSession, UserIdentity};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the remote authentication service.
///
/// Implementations talk to the actual auth backend; tests substitute an
/// in-memory fake. Session *state* lives in the application layer's session
/// store, not here.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchanges credentials for an authenticated session.
    ///
    /// # Returns
    ///
    /// - `Ok(AuthSession)`: credentials accepted
    /// - `Err(ChartdeskError::InvalidCredentials)`: credentials rejected
    /// - `Err(_)`: transport or service failure
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession>;

    /// Resolves the identity behind an access token.
    ///
    /// An expired or otherwise invalid token resolves to `Ok(None)` rather
    /// than an error, so session restore on startup can quietly fall back
    /// to the logged-out state.
    async fn current_user(&self, access_token: &str) -> Result<Option<UserIdentity>>;

    /// Revokes the session behind an access token.
    async fn logout(&self, access_token: &str) -> Result<()>;
}

/// Read-only view of the acting session's bearer token.
///
/// Data-layer clients pull the token through this seam on every call, so
/// requests always carry the identity current at the moment they are issued.
pub trait TokenSource: Send + Sync {
    /// The access token of the signed-in user, or `None` when logged out.
    fn access_token(&self) -> Option<String>;
}
