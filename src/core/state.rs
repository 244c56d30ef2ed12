//! Server State
//!
//! Shared handles every request needs: the configuration, the embedded
//! database and the JWT service. `Clone` is shallow (Arc / handle clones).

use std::path::Path;
use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Assemble state from an already opened database (tests use this with
    /// the in-memory engine)
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// Open the configured database and assemble the state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(Path::new(&config.database_path)).await?;
        Ok(Self::new(config.clone(), db_service.db))
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// JWT service
    pub fn get_jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
