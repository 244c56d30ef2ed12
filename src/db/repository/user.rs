//! User Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, UserCreate};
use crate::utils::time::now_millis;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_email, validate_required_text,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a user matching the given username OR email. Returns `None` when
    /// neither identifier is supplied.
    pub async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> RepoResult<Option<User>> {
        let mut result = match (username, email) {
            (Some(username), Some(email)) => {
                self.base
                    .db()
                    .query("SELECT * FROM user WHERE username = $username OR email = $email LIMIT 1")
                    .bind(("username", username.to_string()))
                    .bind(("email", email.to_string()))
                    .await?
            }
            (Some(username), None) => {
                self.base
                    .db()
                    .query("SELECT * FROM user WHERE username = $username LIMIT 1")
                    .bind(("username", username.to_string()))
                    .await?
            }
            (None, Some(email)) => {
                self.base
                    .db()
                    .query("SELECT * FROM user WHERE email = $email LIMIT 1")
                    .bind(("email", email.to_string()))
                    .await?
            }
            (None, None) => return Ok(None),
        };

        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a new user account: validate, guard against duplicates, hash
    /// the password, persist.
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        let username = data.username.trim().to_string();
        let email = data.email.trim().to_string();

        validate_required_text(&username, "username", MAX_NAME_LEN)
            .and_then(|_| validate_email(&email))
            .and_then(|_| validate_required_text(&data.password, "password", MAX_PASSWORD_LEN))
            .map_err(|e| RepoError::Validation(e.to_string()))?;

        if self
            .find_by_username_or_email(Some(&username), Some(&email))
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(
                "Username or email already taken".to_string(),
            ));
        }

        let hash_pass = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let user = User {
            id: None,
            username,
            email,
            hash_pass,
            created_at: now_millis(),
        };

        let created: Option<User> = self.base.db().create(TABLE).content(user).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Total number of user records
    pub async fn count(&self) -> RepoResult<usize> {
        let users: Vec<User> = self.base.db().query("SELECT * FROM user").await?.take(0)?;
        Ok(users.len())
    }
}
