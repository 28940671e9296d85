//! Derived Analytics
//!
//! Pure aggregation over the current employee list. Nothing here is
//! cached or persisted; every read recomputes from scratch, which is fine
//! at the list sizes this system handles.

use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;

use shared::models::{AnalyticsData, Employee, EmployeeStatus, MonthlyJoiners, SalaryBand};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Fixed salary buckets, ascending, each employee lands in exactly one
const SALARY_BANDS: [(&str, f64); 4] = [
    ("0-50k", 50_000.0),
    ("50k-75k", 75_000.0),
    ("75k-100k", 100_000.0),
    ("100k-150k", 150_000.0),
];
const TOP_BAND: &str = "150k+";

/// Trailing window length for the joiners chart
const JOINER_WINDOW_MONTHS: u32 = 6;

/// Compute the full analytics snapshot
///
/// `today` anchors the trailing joiners window; handlers pass the current
/// date, tests pass a fixed one.
pub fn compute(employees: &[Employee], today: NaiveDate) -> AnalyticsData {
    let total = employees.len();
    let active = count_status(employees, EmployeeStatus::Active);
    let onboarding = count_status(employees, EmployeeStatus::Onboarding);
    let exiting = count_status(employees, EmployeeStatus::Exit);

    AnalyticsData {
        total_employees: total,
        active_employees: active,
        onboarding_employees: onboarding,
        exit_employees: exiting,
        department_distribution: department_distribution(employees),
        monthly_joiners: monthly_joiners(employees, today),
        salary_distribution: salary_distribution(employees),
        average_salary: average_salary(employees),
        exit_ratio: exit_ratio(exiting, total),
    }
}

fn count_status(employees: &[Employee], status: EmployeeStatus) -> usize {
    employees.iter().filter(|e| e.status == status).count()
}

/// Department name -> headcount
pub fn department_distribution(employees: &[Employee]) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for employee in employees {
        *distribution.entry(employee.department.clone()).or_insert(0) += 1;
    }
    distribution
}

/// Five fixed non-overlapping buckets; counts sum to the employee total
pub fn salary_distribution(employees: &[Employee]) -> Vec<SalaryBand> {
    let mut counts = [0usize; SALARY_BANDS.len() + 1];
    for employee in employees {
        let idx = SALARY_BANDS
            .iter()
            .position(|(_, upper)| employee.salary < *upper)
            .unwrap_or(SALARY_BANDS.len());
        counts[idx] += 1;
    }

    SALARY_BANDS
        .iter()
        .map(|(range, _)| *range)
        .chain(std::iter::once(TOP_BAND))
        .zip(counts)
        .map(|(range, count)| SalaryBand {
            range: range.to_string(),
            count,
        })
        .collect()
}

/// Joiners per month over the trailing six months ending at `today`'s month
///
/// Months with zero joiners still appear; joining dates outside the window
/// are ignored.
pub fn monthly_joiners(employees: &[Employee], today: NaiveDate) -> Vec<MonthlyJoiners> {
    let mut buckets: Vec<(String, usize)> = (0..JOINER_WINDOW_MONTHS)
        .rev()
        .filter_map(|back| today.checked_sub_months(Months::new(back)))
        .map(|date| (month_label(date), 0))
        .collect();

    for employee in employees {
        let label = month_label(employee.joining_date);
        if let Some(bucket) = buckets.iter_mut().find(|(key, _)| *key == label) {
            bucket.1 += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(month, count)| MonthlyJoiners { month, count })
        .collect()
}

/// Arithmetic mean; 0 for the empty list (division guard)
pub fn average_salary(employees: &[Employee]) -> f64 {
    if employees.is_empty() {
        return 0.0;
    }
    let sum: f64 = employees.iter().map(|e| e.salary).sum();
    sum / employees.len() as f64
}

/// Exit percentage of total headcount, one decimal; 0 when total is 0
pub fn exit_ratio(exiting: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = exiting as f64 / total as f64 * 100.0;
    (ratio * 10.0).round() / 10.0
}

fn month_label(date: NaiveDate) -> String {
    format!(
        "{} {}",
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}
