//! Unified path management for chartdesk configuration files.
//!
//! All local chartdesk state lives under a single config directory:
//!
//! ```text
//! ~/.config/chartdesk/
//! ├── config.toml    # Remote service URL and anon key
//! └── session.toml   # Persisted access token for session restore
//! ```

use chartdesk_core::error::{ChartdeskError, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "chartdesk";

/// Unified path management for chartdesk.
///
/// A custom base directory can be supplied for tests; otherwise the
/// platform config directory is used.
#[derive(Debug, Clone)]
pub struct ChartdeskPaths {
    base_dir: Option<PathBuf>,
}

impl ChartdeskPaths {
    /// Creates a path resolver. Pass `Some(dir)` to root everything under a
    /// custom directory (for testing).
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the chartdesk configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ChartdeskError::config("Cannot determine config directory"))
    }

    /// Path of the remote service configuration file.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Path of the persisted session token file.
    pub fn session_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("session.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let tmp = TempDir::new().unwrap();
        let paths = ChartdeskPaths::new(Some(tmp.path()));
        assert_eq!(paths.config_dir().unwrap(), tmp.path());
        assert_eq!(
            paths.session_file().unwrap(),
            tmp.path().join("session.toml")
        );
        assert_eq!(paths.config_file().unwrap(), tmp.path().join("config.toml"));
    }
}
