//! Authentication Module
//!
//! JWT issuing/verification and per-request identity derivation.

pub mod extractor;
pub mod jwt;

pub use extractor::identity_from_headers;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
