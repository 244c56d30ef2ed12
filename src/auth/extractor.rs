//! Request Identity Extractor
//!
//! Derives the optional caller identity from the `Authorization` header.
//! A missing, malformed, expired or badly signed token yields an anonymous
//! context — it never fails the request.

use http::HeaderMap;

use crate::auth::{CurrentUser, JwtService};

/// Extract and verify the bearer token, if any
pub fn identity_from_headers(headers: &HeaderMap, jwt: &JwtService) -> Option<CurrentUser> {
    let header = headers.get(http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = JwtService::extract_from_header(header)?;

    match jwt.validate_token(token) {
        Ok(claims) => Some(CurrentUser::from(claims)),
        Err(e) => {
            tracing::debug!(error = %e, "discarding invalid bearer token");
            None
        }
    }
}
