//! Database Module
//!
//! Embedded SurrealDB storage. `DbService` opens the engine, selects the
//! namespace/database and applies the schema definitions. The unique indexes
//! declared here are the authoritative uniqueness guarantee; repository-level
//! duplicate checks are a best-effort pre-check on top.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "staff";
const DATABASE: &str = "staff";

/// Idempotent schema definitions, applied on every startup
const SCHEMA: &str = r#"
    DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS user_username ON user FIELDS username UNIQUE;
    DEFINE INDEX IF NOT EXISTS user_email ON user FIELDS email UNIQUE;

    DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS employee_email ON employee FIELDS email UNIQUE;
    DEFINE INDEX IF NOT EXISTS employee_created_at ON employee FIELDS created_at;
"#;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `path`
    pub async fn new(path: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;
        Self::prepare(db).await
    }

    /// Open an in-memory database (tests)
    pub async fn new_in_memory() -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;
        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {}", e)))?;

        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {}", e)))?
            .check()
            .map_err(|e| AppError::database(format!("Failed to apply schema: {}", e)))?;

        tracing::info!("Database ready (ns={}, db={})", NAMESPACE, DATABASE);
        Ok(Self { db })
    }
}
