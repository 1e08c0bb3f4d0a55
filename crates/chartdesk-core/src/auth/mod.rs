//! Authentication domain: identity models and the auth service boundary.

pub mod model;
pub mod service;

pub use model::{AuthSession, UserIdentity};
pub use service::{AuthService, TokenSource};
