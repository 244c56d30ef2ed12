//! Unified error handling
//!
//! [`AppError`] is the taxonomy every operation normalizes into before an
//! error crosses the API boundary:
//!
//! | Variant | GraphQL extension code |
//! |---------|------------------------|
//! | Validation | BAD_USER_INPUT |
//! | NotFound | NOT_FOUND |
//! | Authentication | UNAUTHENTICATED |
//! | Database / Internal | INTERNAL_SERVER_ERROR |

use async_graphql::ErrorExtensions;
use tracing::error;

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller-supplied input violates a business rule (400-class)
    #[error("{0}")]
    Validation(String),

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Credential mismatch during login
    #[error("{0}")]
    Authentication(String),

    /// Persistence layer failure, message carried from the store
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else that should never happen
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Machine-readable error code, mirroring Apollo Server conventions
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "BAD_USER_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Authentication(_) => "UNAUTHENTICATED",
            AppError::Database(_) | AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Validation(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        // Server-side failures keep their detail in the log, the client only
        // gets the message string and the code.
        if let AppError::Database(msg) | AppError::Internal(msg) = self {
            error!(target: "operation", error = %msg, "operation failed");
        }

        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}
