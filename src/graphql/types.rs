//! GraphQL Object Types
//!
//! Boundary representations of the stored records. Field names here are the
//! external contract: object fields and mutation arguments stay snake_case
//! (`first_name`, `date_of_joining`), operation names are camelCase.

use async_graphql::{ID, SimpleObject};

use crate::db::models;
use crate::utils::time::millis_to_rfc3339;

pub use crate::db::models::Gender;

/// User account (the password hash is never exposed)
#[derive(SimpleObject, Clone)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub email: String,
}

/// Token plus the user it identifies, returned by login and signup
#[derive(SimpleObject, Clone)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// Employee record
#[derive(SimpleObject, Clone)]
#[graphql(rename_fields = "snake_case")]
pub struct Employee {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub designation: String,
    pub salary: f64,
    /// ISO date, `YYYY-MM-DD`
    pub date_of_joining: String,
    pub department: String,
    pub employee_photo: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<models::User> for User {
    fn from(user: models::User) -> Self {
        Self {
            id: ID(user.id.map(|t| t.to_string()).unwrap_or_default()),
            username: user.username,
            email: user.email,
        }
    }
}

impl From<models::Employee> for Employee {
    fn from(emp: models::Employee) -> Self {
        Self {
            id: ID(emp.id.map(|t| t.to_string()).unwrap_or_default()),
            first_name: emp.first_name,
            last_name: emp.last_name,
            email: emp.email,
            gender: emp.gender,
            designation: emp.designation,
            salary: emp.salary,
            date_of_joining: emp.date_of_joining.to_string(),
            department: emp.department,
            employee_photo: emp.employee_photo,
            created_at: millis_to_rfc3339(emp.created_at),
            updated_at: millis_to_rfc3339(emp.updated_at),
        }
    }
}
