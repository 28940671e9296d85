//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - login/register/logout/profile
//! - [`employees`] - employee record management
//! - [`analytics`] - derived aggregate statistics

pub mod analytics;
pub mod auth;
pub mod employees;
pub mod health;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
