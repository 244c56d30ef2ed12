//! Server Configuration
//!
//! All settings come from the environment, read exactly once at startup.
//! Operation logic receives the resulting [`Config`] by reference and never
//! consults the environment itself.
//!
//! | Environment variable | Default | Meaning |
//! |----------------------|---------|---------|
//! | HTTP_PORT | 4000 | HTTP listen port |
//! | DATABASE_PATH | data/staff.db | Embedded database directory |
//! | JWT_SECRET | (dev fallback) | Token signing secret |
//! | JWT_EXPIRATION_MINUTES | 1440 | Token validity window |
//! | LOG_DIR | (stderr) | Daily-rolling log file directory |

use crate::auth::JwtConfig;

/// Process configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub http_port: u16,
    /// Path of the embedded database
    pub database_path: String,
    /// Token signing configuration
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/staff.db".into()),
            jwt: JwtConfig::from_env(),
        }
    }
}
