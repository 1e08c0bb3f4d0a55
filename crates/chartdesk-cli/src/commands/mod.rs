//! Command handlers, one module per view.

pub mod builder;
pub mod dashboard;
pub mod login;
pub mod view;
