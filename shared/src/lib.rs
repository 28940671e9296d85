//! Shared types for CoreHR
//!
//! Domain models, client-facing DTOs, and utility types used by the
//! server and its tests.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AnalyticsData, Employee, EmployeeCreate, EmployeeStatus, EmployeeUpdate, MonthlyJoiners,
    SalaryBand, User, UserRole,
};
