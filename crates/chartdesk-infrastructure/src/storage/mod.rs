//! Local storage: atomic TOML files and the persisted session token.

pub mod atomic_toml;
pub mod session_storage;

pub use atomic_toml::AtomicTomlFile;
pub use session_storage::{SessionTokenStorage, StoredSession};
