//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeePatch};
use crate::utils::validation::validate_employee;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "employee";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all employees, most recently created first
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let emp: Option<Employee> = self.base.db().select(thing).await?;
        Ok(emp)
    }

    /// Find employee by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Equality match on designation and/or department. At least one filter
    /// must be supplied; when both are, both must match.
    pub async fn find_by_filter(
        &self,
        designation: Option<&str>,
        department: Option<&str>,
    ) -> RepoResult<Vec<Employee>> {
        let mut result = match (designation, department) {
            (Some(designation), Some(department)) => {
                self.base
                    .db()
                    .query("SELECT * FROM employee WHERE designation = $designation AND department = $department")
                    .bind(("designation", designation.to_string()))
                    .bind(("department", department.to_string()))
                    .await?
            }
            (Some(designation), None) => {
                self.base
                    .db()
                    .query("SELECT * FROM employee WHERE designation = $designation")
                    .bind(("designation", designation.to_string()))
                    .await?
            }
            (None, Some(department)) => {
                self.base
                    .db()
                    .query("SELECT * FROM employee WHERE department = $department")
                    .bind(("department", department.to_string()))
                    .await?
            }
            (None, None) => {
                return Err(RepoError::Validation(
                    "Either designation or department must be provided".to_string(),
                ));
            }
        };

        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Create a new employee: normalize, validate, guard against duplicate
    /// email, persist.
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let employee = Employee::from_create(data);

        validate_employee(&employee).map_err(|e| RepoError::Validation(e.to_string()))?;

        if self.find_by_email(&employee.email).await?.is_some() {
            return Err(RepoError::Duplicate(
                "Employee with this email already exists".to_string(),
            ));
        }

        let created: Option<Employee> = self.base.db().create(TABLE).content(employee).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Partial update: merge the supplied fields onto the existing record,
    /// re-validate the merged record as a whole, persist.
    pub async fn update(&self, id: &str, patch: EmployeePatch) -> RepoResult<Employee> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        // Check duplicate email if changing
        if let Some(new_email) = patch.email.as_deref().map(str::trim)
            && new_email != existing.email
            && self.find_by_email(new_email).await?.is_some()
        {
            return Err(RepoError::Duplicate(
                "Email already in use by another employee".to_string(),
            ));
        }

        let mut merged = existing.merged_with(&patch);
        validate_employee(&merged).map_err(|e| RepoError::Validation(e.to_string()))?;

        // The record id comes from the UPDATE target, not the content
        merged.id = None;

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing CONTENT $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", merged))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Hard delete an employee
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
