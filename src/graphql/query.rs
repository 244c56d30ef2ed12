//! GraphQL Query Resolvers

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use crate::core::ServerState;
use crate::db::repository::{EmployeeRepository, UserRepository};
use crate::graphql::{auth_payload, repo_error};
use crate::graphql::types::{AuthPayload, Employee};
use crate::utils::AppError;

pub struct Query;

#[Object]
impl Query {
    /// Authenticate by username or email plus password, returning a token
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: Option<String>,
        email: Option<String>,
        password: String,
    ) -> Result<AuthPayload> {
        let state = ctx.data_unchecked::<ServerState>();
        let repo = UserRepository::new(state.get_db());

        let user = repo
            .find_by_username_or_email(username.as_deref(), email.as_deref())
            .await
            .map_err(repo_error)?
            .ok_or_else(|| AppError::not_found("User not found").extend())?;

        let password_valid = user.verify_password(&password).map_err(|e| {
            AppError::internal(format!("Password verification failed: {}", e)).extend()
        })?;

        if !password_valid {
            tracing::warn!(username = ?username, "login failed - invalid credentials");
            return Err(AppError::authentication("Invalid credentials").extend());
        }

        auth_payload(state, user)
    }

    /// All employees, most recently created first
    async fn get_all_employees(&self, ctx: &Context<'_>) -> Result<Vec<Employee>> {
        let state = ctx.data_unchecked::<ServerState>();
        let repo = EmployeeRepository::new(state.get_db());

        let employees = repo.find_all().await.map_err(repo_error)?;
        Ok(employees.into_iter().map(Employee::from).collect())
    }

    /// Single employee lookup
    async fn get_employee_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Employee> {
        let state = ctx.data_unchecked::<ServerState>();
        let repo = EmployeeRepository::new(state.get_db());

        let employee = repo
            .find_by_id(&id.0)
            .await
            .map_err(repo_error)?
            .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id.0)).extend())?;

        Ok(employee.into())
    }

    /// Employees matching the given designation and/or department
    async fn get_employees_by_filter(
        &self,
        ctx: &Context<'_>,
        designation: Option<String>,
        department: Option<String>,
    ) -> Result<Vec<Employee>> {
        let state = ctx.data_unchecked::<ServerState>();
        let repo = EmployeeRepository::new(state.get_db());

        let employees = repo
            .find_by_filter(designation.as_deref(), department.as_deref())
            .await
            .map_err(repo_error)?;

        Ok(employees.into_iter().map(Employee::from).collect())
    }
}
