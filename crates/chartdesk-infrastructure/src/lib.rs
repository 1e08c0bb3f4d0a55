//! Chartdesk infrastructure: HTTP clients for the remote auth/data service,
//! wire DTOs, local TOML storage, and configuration.

pub mod config_service;
pub mod dto;
pub mod http_auth_service;
pub mod http_chart_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::{ConfigService, ServiceConfig};
pub use crate::http_auth_service::HttpAuthService;
pub use crate::http_chart_repository::HttpChartRepository;
pub use crate::paths::ChartdeskPaths;
pub use crate::storage::{SessionTokenStorage, StoredSession};
