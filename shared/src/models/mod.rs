//! Domain models
//!
//! - [`user`] - account and role types
//! - [`employee`] - employee records and CRUD payloads
//! - [`analytics`] - derived aggregate statistics

pub mod analytics;
pub mod employee;
pub mod user;

pub use analytics::{AnalyticsData, MonthlyJoiners, SalaryBand};
pub use employee::{Employee, EmployeeCreate, EmployeeStatus, EmployeeUpdate};
pub use user::{User, UserRole};
