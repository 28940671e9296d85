//! Employee Repository
//!
//! The employee list is one blob under `corehr_employees`; every mutation
//! rewrites the whole list. Creation order is preserved (new records are
//! appended).
//!
//! Missing-identifier mutations fail with [`RepoError::NotFound`] and leave
//! the list untouched. Duplicate employee emails are allowed: uniqueness is
//! only enforced on the credential table, and imported records may share
//! addresses.

use super::{RepoError, RepoResult};
use crate::db::{EMPLOYEES_KEY, RecordStore};
use shared::models::{Employee, EmployeeCreate, EmployeeStatus, EmployeeUpdate};
use shared::util::{now_millis, snowflake_id};

#[derive(Clone)]
pub struct EmployeeRepository {
    store: RecordStore,
}

impl EmployeeRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.store.get_json(EMPLOYEES_KEY)?.unwrap_or_default())
    }

    fn save(&self, employees: &[Employee]) -> RepoResult<()> {
        Ok(self.store.put_json(EMPLOYEES_KEY, &employees)?)
    }

    /// All employees, creation order
    pub fn list(&self) -> RepoResult<Vec<Employee>> {
        self.load()
    }

    /// Find employee by id
    pub fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        Ok(self.load()?.into_iter().find(|e| e.id == id))
    }

    /// Find the first employee with a matching email
    pub fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        Ok(self.load()?.into_iter().find(|e| e.email == email))
    }

    /// Create a new employee
    ///
    /// Assigns a fresh snowflake id and both timestamps, then appends.
    pub fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        if data.salary < 0.0 {
            return Err(RepoError::Validation(
                "Salary must be non-negative".to_string(),
            ));
        }

        let now = now_millis();
        let employee = Employee {
            id: snowflake_id(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            department: data.department,
            designation: data.designation,
            salary: data.salary,
            joining_date: data.joining_date,
            status: data.status,
            avatar: data.avatar,
            address: data.address,
            emergency_contact: data.emergency_contact,
            created_at: now,
            updated_at: now,
        };

        let mut employees = self.load()?;
        employees.push(employee.clone());
        self.save(&employees)?;
        Ok(employee)
    }

    /// Merge the present fields of `data` into the employee with `id`
    pub fn update(&self, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
        if let Some(salary) = data.salary
            && salary < 0.0
        {
            return Err(RepoError::Validation(
                "Salary must be non-negative".to_string(),
            ));
        }

        let mut employees = self.load()?;
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        if let Some(v) = data.first_name {
            employee.first_name = v;
        }
        if let Some(v) = data.last_name {
            employee.last_name = v;
        }
        if let Some(v) = data.email {
            employee.email = v;
        }
        if let Some(v) = data.phone {
            employee.phone = v;
        }
        if let Some(v) = data.department {
            employee.department = v;
        }
        if let Some(v) = data.designation {
            employee.designation = v;
        }
        if let Some(v) = data.salary {
            employee.salary = v;
        }
        if let Some(v) = data.joining_date {
            employee.joining_date = v;
        }
        if let Some(v) = data.status {
            employee.status = v;
        }
        if let Some(v) = data.avatar {
            employee.avatar = Some(v);
        }
        if let Some(v) = data.address {
            employee.address = Some(v);
        }
        if let Some(v) = data.emergency_contact {
            employee.emergency_contact = Some(v);
        }
        employee.updated_at = now_millis();

        let updated = employee.clone();
        self.save(&employees)?;
        Ok(updated)
    }

    /// Hard delete by id
    pub fn delete(&self, id: i64) -> RepoResult<()> {
        let mut employees = self.load()?;
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(RepoError::NotFound(format!("Employee {} not found", id)));
        }
        self.save(&employees)
    }

    /// Change only the lifecycle status (refreshes `updated_at`)
    pub fn set_status(&self, id: i64, status: EmployeeStatus) -> RepoResult<Employee> {
        let mut employees = self.load()?;
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        employee.status = status;
        employee.updated_at = now_millis();

        let updated = employee.clone();
        self.save(&employees)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn repo() -> EmployeeRepository {
        EmployeeRepository::new(RecordStore::open_in_memory().unwrap())
    }

    fn create_payload(email: &str, salary: f64) -> EmployeeCreate {
        EmployeeCreate {
            first_name: "John".into(),
            last_name: "Smith".into(),
            email: email.to_string(),
            phone: "+1 (555) 123-4567".into(),
            department: "Engineering".into(),
            designation: "Developer".into(),
            salary,
            joining_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            status: EmployeeStatus::Active,
            avatar: None,
            address: None,
            emergency_contact: None,
        }
    }

    #[test]
    fn create_assigns_unique_ids_and_appends() {
        let repo = repo();
        let a = repo.create(create_payload("a@company.com", 50000.0)).unwrap();
        let b = repo.create(create_payload("b@company.com", 60000.0)).unwrap();
        let c = repo.create(create_payload("c@company.com", 70000.0)).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_eq!(a.created_at, a.updated_at);

        let list = repo.list().unwrap();
        assert_eq!(list.len(), 3);
        // Creation order preserved
        assert_eq!(list[0].id, a.id);
        assert_eq!(list[2].id, c.id);
    }

    #[test]
    fn create_rejects_negative_salary() {
        let repo = repo();
        let err = repo
            .create(create_payload("a@company.com", -1.0))
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn duplicate_emails_are_permitted() {
        let repo = repo();
        repo.create(create_payload("same@company.com", 50000.0))
            .unwrap();
        repo.create(create_payload("same@company.com", 60000.0))
            .unwrap();
        assert_eq!(repo.list().unwrap().len(), 2);
    }

    #[test]
    fn update_merges_fields_and_refreshes_timestamp() {
        let repo = repo();
        let created = repo.create(create_payload("a@company.com", 50000.0)).unwrap();

        let updated = repo
            .update(
                created.id,
                EmployeeUpdate {
                    department: Some("Sales".into()),
                    salary: Some(55000.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.department, "Sales");
        assert_eq!(updated.salary, 55000.0);
        // Untouched fields survive the merge
        assert_eq!(updated.first_name, "John");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn mutations_on_missing_id_fail_and_leave_list_unchanged() {
        let repo = repo();
        repo.create(create_payload("a@company.com", 50000.0)).unwrap();
        let before = repo.list().unwrap();

        assert!(matches!(
            repo.update(999, EmployeeUpdate::default()),
            Err(RepoError::NotFound(_))
        ));
        assert!(matches!(repo.delete(999), Err(RepoError::NotFound(_))));
        assert!(matches!(
            repo.set_status(999, EmployeeStatus::Exit),
            Err(RepoError::NotFound(_))
        ));

        assert_eq!(repo.list().unwrap(), before);
    }

    #[test]
    fn delete_removes_only_the_matching_record() {
        let repo = repo();
        let a = repo.create(create_payload("a@company.com", 50000.0)).unwrap();
        let b = repo.create(create_payload("b@company.com", 60000.0)).unwrap();

        repo.delete(a.id).unwrap();
        let list = repo.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, b.id);
    }

    #[test]
    fn set_status_touches_only_status_and_timestamp() {
        let repo = repo();
        let created = repo.create(create_payload("a@company.com", 50000.0)).unwrap();

        let updated = repo.set_status(created.id, EmployeeStatus::Exit).unwrap();
        assert_eq!(updated.status, EmployeeStatus::Exit);
        assert_eq!(updated.salary, created.salary);
        assert_eq!(updated.department, created.department);
    }
}
