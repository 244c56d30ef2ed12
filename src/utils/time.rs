//! Timestamp helpers

use chrono::{DateTime, Utc};

/// Current time as epoch milliseconds (the storage representation for
/// `created_at` / `updated_at`)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render an epoch-milliseconds timestamp as RFC 3339 for the API boundary
pub fn millis_to_rfc3339(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_render_as_rfc3339() {
        assert_eq!(millis_to_rfc3339(0), "1970-01-01T00:00:00+00:00");
        // Out-of-range values degrade to an empty string instead of panicking
        assert_eq!(millis_to_rfc3339(i64::MAX), "");
    }
}
