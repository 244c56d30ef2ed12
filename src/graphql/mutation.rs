//! GraphQL Mutation Resolvers

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use crate::core::ServerState;
use crate::db::models::{EmployeeCreate, EmployeePatch, Gender, UserCreate};
use crate::db::repository::{EmployeeRepository, UserRepository};
use crate::graphql::{auth_payload, repo_error};
use crate::graphql::types::{AuthPayload, Employee};
use crate::utils::validation::parse_joining_date;

pub struct Mutation;

#[Object(rename_args = "snake_case")]
impl Mutation {
    /// Register a new account and log it in
    async fn signup(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<AuthPayload> {
        let state = ctx.data_unchecked::<ServerState>();
        let repo = UserRepository::new(state.get_db());

        let user = repo
            .create(UserCreate {
                username,
                email,
                password,
            })
            .await
            .map_err(repo_error)?;

        tracing::info!(username = %user.username, "user signed up");
        auth_payload(state, user)
    }

    /// Add an employee record
    #[allow(clippy::too_many_arguments)]
    async fn add_employee(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        last_name: String,
        email: String,
        gender: Gender,
        designation: String,
        salary: f64,
        date_of_joining: String,
        department: String,
        employee_photo: Option<String>,
    ) -> Result<Employee> {
        let state = ctx.data_unchecked::<ServerState>();
        let repo = EmployeeRepository::new(state.get_db());

        let date_of_joining = parse_joining_date(&date_of_joining).map_err(|e| e.extend())?;

        let employee = repo
            .create(EmployeeCreate {
                first_name,
                last_name,
                email,
                gender,
                designation,
                salary,
                date_of_joining,
                department,
                employee_photo,
            })
            .await
            .map_err(repo_error)?;

        Ok(employee.into())
    }

    /// Update any subset of an employee's fields
    #[allow(clippy::too_many_arguments)]
    async fn update_employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        gender: Option<Gender>,
        designation: Option<String>,
        salary: Option<f64>,
        date_of_joining: Option<String>,
        department: Option<String>,
        employee_photo: Option<String>,
    ) -> Result<Employee> {
        let state = ctx.data_unchecked::<ServerState>();
        let repo = EmployeeRepository::new(state.get_db());

        let date_of_joining = date_of_joining
            .map(|raw| parse_joining_date(&raw))
            .transpose()
            .map_err(|e| e.extend())?;

        let patch = EmployeePatch {
            first_name,
            last_name,
            email,
            gender,
            designation,
            salary,
            date_of_joining,
            department,
            employee_photo,
        };

        let employee = repo.update(&id.0, patch).await.map_err(repo_error)?;
        Ok(employee.into())
    }

    /// Delete an employee record
    async fn delete_employee(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let state = ctx.data_unchecked::<ServerState>();
        let repo = EmployeeRepository::new(state.get_db());

        let deleted = repo.delete(&id.0).await.map_err(repo_error)?;
        Ok(deleted)
    }
}
