//! Session and identity domain models.

use serde::{Deserialize, Serialize};

/// The authenticated identity of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Stable user id assigned by the auth service
    pub id: String,
    /// The email the user signed in with
    pub email: String,
}

/// An authenticated session: identity plus the bearer token that proves it.
///
/// Exclusively owned by the session store; consumers receive clones and
/// never mutate session state directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: UserIdentity,
    /// Bearer token passed on every authenticated remote call
    pub access_token: String,
}
