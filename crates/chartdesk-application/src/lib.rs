//! Chartdesk application layer: the session store and chart use cases that
//! the frontend consumes.

pub mod chart_service;
pub mod session_store;

pub use chart_service::ChartService;
pub use session_store::SessionStore;
