//! Derived Analytics Types
//!
//! Read-only aggregates computed fresh from the employee list. Never
//! persisted; the compute lives in the server's analytics module.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One month in the trailing joiners window, e.g. `"Mar 2026"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyJoiners {
    pub month: String,
    pub count: usize,
}

/// One fixed salary bucket, e.g. `"75k-100k"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBand {
    pub range: String,
    pub count: usize,
}

/// Full analytics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub total_employees: usize,
    pub active_employees: usize,
    pub onboarding_employees: usize,
    pub exit_employees: usize,
    /// Department name -> headcount (BTreeMap for stable ordering)
    pub department_distribution: BTreeMap<String, usize>,
    /// Trailing six months ending at the current month, zero-filled
    pub monthly_joiners: Vec<MonthlyJoiners>,
    /// Five fixed non-overlapping buckets, in ascending order
    pub salary_distribution: Vec<SalaryBand>,
    /// Arithmetic mean, 0 for an empty list
    pub average_salary: f64,
    /// Exit percentage of total headcount, one decimal, 0 when empty
    pub exit_ratio: f64,
}
