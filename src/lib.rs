//! Staff Server — GraphQL API for authentication and employee records
//!
//! # Architecture
//!
//! - **GraphQL API** (`graphql`): queries and mutations for signup/login and
//!   employee CRUD, served over axum
//! - **Authentication** (`auth`): JWT issuing/verification and per-request
//!   identity derivation from the `Authorization` header
//! - **Database** (`db`): embedded SurrealDB storage with typed repositories
//! - **Core** (`core`): configuration, shared state, HTTP server
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # Config, state, server
//! ├── auth/          # JWT service, identity extraction
//! ├── graphql/       # Schema, resolvers, boundary types
//! ├── db/            # Models and repositories
//! └── utils/         # Errors, logging, validation
//! ```

pub mod auth;
pub mod core;
pub mod db;
pub mod graphql;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtConfig, JwtService};
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use graphql::{ServiceSchema, build_schema};
pub use utils::{AppError, AppResult};

/// Load `.env` and initialize logging. Called once, before anything else.
pub fn setup_environment() {
    dotenv::dotenv().ok();

    match std::env::var("LOG_DIR") {
        Ok(dir) => utils::init_logger_with_file(Some(&dir)),
        Err(_) => utils::init_logger(),
    }
}
