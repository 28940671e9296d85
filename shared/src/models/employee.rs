//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Onboarding,
    Active,
    Exit,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Onboarding => "onboarding",
            EmployeeStatus::Active => "active",
            EmployeeStatus::Exit => "exit",
        }
    }
}

/// Employee record
///
/// Persisted as part of the employee-list blob. Field names stay camelCase
/// on the wire to match the stored format. Employee and User are correlated
/// only by email string; there is no foreign key between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    pub salary: f64,
    pub joining_date: NaiveDate,
    pub status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds, refreshed on every mutation
    pub updated_at: i64,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,
    pub designation: String,
    #[validate(range(min = 0.0, message = "salary must be non-negative"))]
    pub salary: f64,
    pub joining_date: NaiveDate,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
}

/// Update employee payload - absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    #[validate(range(min = 0.0, message = "salary must be non-negative"))]
    pub salary: Option<f64>,
    pub joining_date: Option<NaiveDate>,
    pub status: Option<EmployeeStatus>,
    pub avatar: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: 1,
            first_name: "John".into(),
            last_name: "Smith".into(),
            email: "john.smith@company.com".into(),
            phone: "+1 (555) 123-4567".into(),
            department: "Engineering".into(),
            designation: "Senior Developer".into(),
            salary: 95000.0,
            joining_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            status: EmployeeStatus::Active,
            avatar: None,
            address: None,
            emergency_contact: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["joiningDate"], "2023-01-15");
        assert_eq!(json["status"], "active");
        // Optional fields stay off the wire when absent
        assert!(json.get("avatar").is_none());
    }

    #[test]
    fn create_payload_rejects_negative_salary() {
        use validator::Validate;
        let payload = EmployeeCreate {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a.b@company.com".into(),
            phone: String::new(),
            department: "Sales".into(),
            designation: String::new(),
            salary: -1.0,
            joining_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            status: EmployeeStatus::Onboarding,
            avatar: None,
            address: None,
            emergency_contact: None,
        };
        assert!(payload.validate().is_err());
    }
}
