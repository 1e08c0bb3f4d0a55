//! Chartdesk core domain: chart and session models, repository and auth
//! service contracts, and the shared error type.

pub mod auth;
pub mod chart;
pub mod error;

// Re-export common error type
pub use error::{ChartdeskError, Result, ValidationError};
