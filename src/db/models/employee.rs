//! Employee Model

use super::serde_helpers;
use crate::utils::time::now_millis;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee gender, a closed enumeration at the API boundary and in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, async_graphql::Enum)]
#[graphql(rename_items = "PascalCase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Employee record
///
/// `date_of_joining` is stored as an ISO `YYYY-MM-DD` string;
/// `created_at` / `updated_at` are system-managed epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    pub department: String,
    #[serde(default)]
    pub employee_photo: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload (date already parsed at the boundary)
#[derive(Debug, Clone)]
pub struct EmployeeCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    pub department: String,
    pub employee_photo: Option<String>,
}

/// Partial update payload — only the supplied fields are applied
#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub designation: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<NaiveDate>,
    pub department: Option<String>,
    pub employee_photo: Option<String>,
}

impl Employee {
    /// Build a fresh record from a create payload. String fields are trimmed,
    /// the photo defaults to empty, timestamps are stamped now.
    pub fn from_create(data: EmployeeCreate) -> Self {
        let now = now_millis();
        Self {
            id: None,
            first_name: data.first_name.trim().to_string(),
            last_name: data.last_name.trim().to_string(),
            email: data.email.trim().to_string(),
            gender: data.gender,
            designation: data.designation.trim().to_string(),
            salary: data.salary,
            date_of_joining: data.date_of_joining,
            department: data.department.trim().to_string(),
            employee_photo: data
                .employee_photo
                .map(|p| p.trim().to_string())
                .unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch onto this record field-by-field. Supplied strings are
    /// trimmed, `updated_at` is bumped, `created_at` and `id` are preserved.
    /// The caller re-validates the merged record as a whole.
    pub fn merged_with(&self, patch: &EmployeePatch) -> Self {
        let trimmed = |v: &Option<String>, current: &str| {
            v.as_deref()
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| current.to_string())
        };

        Self {
            id: self.id.clone(),
            first_name: trimmed(&patch.first_name, &self.first_name),
            last_name: trimmed(&patch.last_name, &self.last_name),
            email: trimmed(&patch.email, &self.email),
            gender: patch.gender.unwrap_or(self.gender),
            designation: trimmed(&patch.designation, &self.designation),
            salary: patch.salary.unwrap_or(self.salary),
            date_of_joining: patch.date_of_joining.unwrap_or(self.date_of_joining),
            department: trimmed(&patch.department, &self.department),
            employee_photo: trimmed(&patch.employee_photo, &self.employee_photo),
            created_at: self.created_at,
            updated_at: now_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Employee {
        Employee {
            id: None,
            first_name: "Bob".into(),
            last_name: "Stone".into(),
            email: "bob@example.com".into(),
            gender: Gender::Male,
            designation: "Engineer".into(),
            salary: 1200.0,
            date_of_joining: NaiveDate::from_ymd_opt(2021, 3, 4).unwrap(),
            department: "Eng".into(),
            employee_photo: String::new(),
            created_at: 42,
            updated_at: 42,
        }
    }

    #[test]
    fn from_create_trims_and_defaults_photo() {
        let emp = Employee::from_create(EmployeeCreate {
            first_name: "  Bob ".into(),
            last_name: "Stone".into(),
            email: " bob@example.com ".into(),
            gender: Gender::Male,
            designation: "Engineer".into(),
            salary: 1200.0,
            date_of_joining: NaiveDate::from_ymd_opt(2021, 3, 4).unwrap(),
            department: " Eng".into(),
            employee_photo: None,
        });

        assert_eq!(emp.first_name, "Bob");
        assert_eq!(emp.email, "bob@example.com");
        assert_eq!(emp.department, "Eng");
        assert_eq!(emp.employee_photo, "");
        assert_eq!(emp.created_at, emp.updated_at);
    }

    #[test]
    fn merge_applies_only_supplied_fields() {
        let patch = EmployeePatch {
            salary: Some(2000.0),
            department: Some("  Sales ".into()),
            ..Default::default()
        };

        let merged = existing().merged_with(&patch);
        assert_eq!(merged.salary, 2000.0);
        assert_eq!(merged.department, "Sales");
        // untouched fields survive
        assert_eq!(merged.first_name, "Bob");
        assert_eq!(merged.email, "bob@example.com");
        assert_eq!(merged.gender, Gender::Male);
        // created_at preserved, updated_at bumped
        assert_eq!(merged.created_at, 42);
        assert!(merged.updated_at >= 42);
    }
}
